// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::log::{DisplayPreference, TracingConfig, WriterConfig,
                 rolling_file_appender_impl};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Builds the layers for `tracing_config` without installing them: a level filter, then
/// a display layer and a file layer when the writer config asks for them.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
        vec![Box::new(level_filter)];

    if let Some(layer) = try_create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    Ok(return_it)
}

pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().compact().with_target(false);

    match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
            let file = rolling_file_appender_impl::try_create(path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

impl TracingConfig {
    /// Global default subscriber. Once set it can't be changed, so this is for apps.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be opened, or a global subscriber is
    /// already installed.
    pub fn install_global(&self) -> miette::Result<()> {
        tracing_subscriber::registry()
            .with(try_create_layers(self)?)
            .try_init()
            .into_diagnostic()
    }

    /// Subscriber for the current thread only, until the guard drops. This is for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be opened.
    pub fn install_thread_local(&self) -> miette::Result<DefaultGuard> {
        Ok(tracing_subscriber::registry()
            .with(try_create_layers(self)?)
            .set_default())
    }
}

/// Logging is disabled unless this is called with a config that isn't
/// [`TracingConfig::is_off`].
///
/// # Errors
///
/// See [`TracingConfig::install_global`].
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if logging is off.
    if it.is_off() {
        return Ok(());
    }

    it.install_global()
}

/// Like [`try_initialize_logging_global`], but scoped to the current thread. Returns
/// `None` when logging is off.
///
/// # Errors
///
/// See [`TracingConfig::install_thread_local`].
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if logging is off.
    if it.is_off() {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn temp_log_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("constellation_lists_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_display_only_has_two_layers() {
        let layers =
            try_create_layers(&DisplayPreference::Stdout.into()).unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_display_and_file_has_three_layers() {
        let path = temp_log_file("both.log");
        let config = TracingConfig::from(WriterConfig::DisplayAndFile(
            DisplayPreference::Stderr,
            path.to_string_lossy().into_owned(),
        ));

        let layers = try_create_layers(&config).unwrap();

        assert_eq!(layers.len(), 3);
        assert!(path.exists());
    }

    #[test]
    fn test_none_has_only_level_filter() {
        let layers = try_create_layers(&WriterConfig::None.into()).unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn test_off_does_not_install() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    #[serial]
    fn test_thread_local_writes_to_file() {
        let path = temp_log_file("thread_local.log");
        let config = TracingConfig {
            writer_config: WriterConfig::File(path.to_string_lossy().into_owned()),
            level_filter: LevelFilter::INFO,
        };

        let guard = try_initialize_logging_thread_local(config).unwrap().unwrap();
        tracing::info!(message = "written to the log file", rows = 42);
        tracing::debug!(message = "filtered out by level");
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("written to the log file"));
        assert!(contents.contains("rows=42"));
        assert!(!contents.contains("filtered out by level"));
    }
}
