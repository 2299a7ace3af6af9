// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{AuthToken, CollectionPayload, ItemId, PipelineError, PipelineResult};

/// The backend collaborator of a [`crate::ListPipeline`]. Each list view gets its own
/// source (clubs, users, pins, ...).
///
/// - [`CollectionSource::fetch`] must be read only and idempotent.
/// - [`CollectionSource::delete`] is called at most once per user confirmation. Read
///   only sources keep the default, which reports
///   [`PipelineError::DeleteUnsupported`].
///
/// The token is passed through unmodified on every call; sources must not cache or
/// refresh it.
#[async_trait]
pub trait CollectionSource<T: Send>: Send + Sync {
    async fn fetch(&self, token: Option<&AuthToken>) -> PipelineResult<CollectionPayload<T>>;

    async fn delete(&self, id: &ItemId, token: Option<&AuthToken>) -> PipelineResult<()> {
        let _unused = token;
        Err(PipelineError::DeleteUnsupported { id: id.clone() })
    }
}

/// Lets a caller keep a handle on a source that a pipeline also owns.
#[async_trait]
impl<T, S> CollectionSource<T> for Arc<S>
where
    T: Send,
    S: CollectionSource<T> + ?Sized,
{
    async fn fetch(&self, token: Option<&AuthToken>) -> PipelineResult<CollectionPayload<T>> {
        self.as_ref().fetch(token).await
    }

    async fn delete(&self, id: &ItemId, token: Option<&AuthToken>) -> PipelineResult<()> {
        self.as_ref().delete(id, token).await
    }
}
