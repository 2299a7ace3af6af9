// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where logs go and how verbose they are. Build one directly, or convert from a
/// [`LevelFilter`], a [`WriterConfig`] or a [`DisplayPreference`].
///
/// Logging is off when `level_filter` is [`LevelFilter::OFF`].
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is a path to the log file, eg: `log.txt` or `/tmp/cl/log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn is_off(&self) -> bool {
        self.level_filter == LevelFilter::OFF
            || matches!(self.writer_config, WriterConfig::None)
    }
}

/// Logs to [`DEFAULT_LOG_FILE_NAME`] at the given level.
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_owned()),
        }
    }
}

/// Logs at [`LevelFilter::DEBUG`].
impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Logs at [`LevelFilter::DEBUG`] to the display only.
impl From<DisplayPreference> for TracingConfig {
    fn from(display_preference: DisplayPreference) -> Self {
        WriterConfig::Display(display_preference).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_level_filter_writes_to_default_file() {
        let it = TracingConfig::from(LevelFilter::INFO);
        assert_eq!(it.get_level_filter(), LevelFilter::INFO);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_owned())
        );
    }

    #[test]
    fn test_from_display_preference() {
        let it = TracingConfig::from(DisplayPreference::Stderr);
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
    }

    #[test]
    fn test_is_off() {
        assert!(TracingConfig::from(LevelFilter::OFF).is_off());
        assert!(TracingConfig::from(WriterConfig::None).is_off());
        assert!(!TracingConfig::from(DisplayPreference::Stdout).is_off());
    }
}
