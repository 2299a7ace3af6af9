// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use constellation_lists::{ItemId, ListPipeline, StrapiCollection, json_field,
                          strapi_identity};
use serde_json::Value;

use crate::{DEBUG_CL_MOD, GlobalOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub collection: String,
    pub id: ItemId,
    /// Rows dropped from the local copy after the backend confirmed.
    pub removed: usize,
}

/// `cl delete`: remove one row through the mutation bridge.
///
/// # Errors
///
/// Returns an error if the http client can't be built, the fetch fails, or the
/// backend rejects the delete.
pub async fn try_delete(
    global: &GlobalOption,
    collection: &str,
    raw_id: &str,
) -> miette::Result<DeleteReport> {
    let source = StrapiCollection::<Value>::try_new(&global.api_url, collection)?;
    let pipeline = ListPipeline::builder(source, strapi_identity)
        .token(global.auth_token())
        .build();
    try_run_delete(pipeline, collection, raw_id).await
}

/// Loads first so `raw_id` can be matched against the rows, then deletes.
///
/// # Errors
///
/// Returns the fetch error or the delete error.
pub async fn try_run_delete(
    mut pipeline: ListPipeline<Value>,
    collection: &str,
    raw_id: &str,
) -> miette::Result<DeleteReport> {
    pipeline.load().await;
    if let Some(error) = pipeline.take_last_error() {
        return Err(error.into());
    }

    let id = resolve_id(&pipeline, raw_id);

    DEBUG_CL_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "🗑️ Delete", raw_id = %raw_id, id = ?id);
    });

    let removed = pipeline.remove(&id).await?;

    Ok(DeleteReport {
        collection: collection.to_owned(),
        id,
        removed,
    })
}

/// Rows are identified by `documentId` when they have one, but people often type the
/// numeric `id`. Map the latter onto the row's real identity when a row matches.
#[must_use]
pub fn resolve_id(pipeline: &ListPipeline<Value>, raw_id: &str) -> ItemId {
    let parsed = ItemId::from(raw_id);
    let read_numeric_id = json_field("id");
    pipeline
        .rows()
        .iter()
        .find(|row| {
            pipeline.identity_of(row) == parsed || read_numeric_id(row).to_string() == raw_id
        })
        .map_or(parsed, |row| pipeline.identity_of(row))
}
