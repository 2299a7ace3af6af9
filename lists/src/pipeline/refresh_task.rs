// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex,
            task::JoinHandle,
            time::{MissedTickBehavior, interval}};

use crate::{DEBUG_PIPELINE_MOD, ListPipeline};

/// A pipeline shared between a view and background tasks.
pub type SharedListPipeline<T> = Arc<Mutex<ListPipeline<T>>>;

impl<T: Send + 'static> ListPipeline<T> {
    #[must_use]
    pub fn into_shared(self) -> SharedListPipeline<T> { Arc::new(Mutex::new(self)) }
}

/// Stops the refresh task when dropped.
#[derive(Debug)]
pub struct RefreshTaskHandle {
    join_handle: JoinHandle<()>,
}

impl RefreshTaskHandle {
    pub fn abort(&self) { self.join_handle.abort(); }

    #[must_use]
    pub fn is_finished(&self) -> bool { self.join_handle.is_finished() }
}

impl Drop for RefreshTaskHandle {
    fn drop(&mut self) { self.join_handle.abort(); }
}

/// Reloads `pipeline` every `period`, for views that need fresher data than "on
/// mount and on token change" (eg: presence). The first reload happens one `period`
/// after the call. Ticks missed while a fetch holds the lock are skipped, not queued.
///
/// Must be called from within a tokio runtime. A zero `period` is treated as 1ms.
pub fn spawn_refresh_task<T: Send + 'static>(
    pipeline: SharedListPipeline<T>,
    period: Duration,
) -> RefreshTaskHandle {
    let period = period.max(Duration::from_millis(1));

    let join_handle = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            DEBUG_PIPELINE_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(message = "🔄 Periodic refresh", period = ?period);
            });

            pipeline.lock().await.load().await;
        }
    });

    RefreshTaskHandle { join_handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{ScriptedSource, member_columns, member_identity, members};

    #[tokio::test]
    async fn test_refreshes_until_dropped() {
        let source = ScriptedSource::with_rows(members());
        let pipeline = ListPipeline::builder(source.clone(), member_identity)
            .columns(member_columns())
            .build()
            .into_shared();

        let handle = spawn_refresh_task(Arc::clone(&pipeline), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(80)).await;
        drop(handle);

        let fetched = source.fetch_count();
        assert!(fetched >= 2, "fetched {fetched} times");
        assert_eq!(pipeline.lock().await.rows().len(), 4);

        // Give the aborted task a chance to run if it somehow survived.
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(source.fetch_count() <= fetched + 1);
    }

    #[tokio::test]
    async fn test_abort() {
        let pipeline = ListPipeline::builder(ScriptedSource::default(), member_identity)
            .build()
            .into_shared();
        let handle = spawn_refresh_task(pipeline, Duration::from_secs(60));
        handle.abort();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(handle.is_finished());
    }
}
