// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use constellation_lists::{AuthToken, CollectionSource, Column, FacetSelection,
                          ListPipeline, SortDescriptor, StatusFacet, StrapiCollection,
                          VisibleColumns, json_field, strapi_identity};
use serde_json::Value;

use crate::{DEBUG_CL_MOD, GlobalOption, ListArgs, RenderedTable, render_table};

/// `cl list`: fetch `args.collection` from the backend and render one page of it.
///
/// # Errors
///
/// Returns an error if the http client can't be built or the fetch fails.
pub async fn try_list(global: &GlobalOption, args: &ListArgs) -> miette::Result<RenderedTable> {
    let mut source = StrapiCollection::<Value>::try_new(&global.api_url, &args.collection)?;
    if args.populate {
        source = source.with_query("populate", "*");
    }

    let pipeline = create_list_pipeline(source, args, global.auth_token());
    try_run_list(pipeline, args).await
}

/// Loads, applies the view arguments, renders.
///
/// # Errors
///
/// Returns the fetch error, if any. The CLI has nothing to show without rows, unlike a
/// view that keeps showing its previous rows.
pub async fn try_run_list(
    mut pipeline: ListPipeline<Value>,
    args: &ListArgs,
) -> miette::Result<RenderedTable> {
    pipeline.load().await;
    if let Some(error) = pipeline.take_last_error() {
        return Err(error.into());
    }

    apply_view_args(&mut pipeline, args);

    DEBUG_CL_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📋 List ready",
            collection = %args.collection,
            filtered = %pipeline.filtered_count(),
            page = %pipeline.page(),
            pages = %pipeline.pages()
        );
    });

    Ok(render_table(&pipeline))
}

/// One column per `--columns` key. A `--sort` key that isn't listed gets a hidden
/// column so rows can still be ordered by it.
pub fn create_list_pipeline(
    source: impl CollectionSource<Value> + 'static,
    args: &ListArgs,
    token: Option<AuthToken>,
) -> ListPipeline<Value> {
    let mut keys = args.columns.clone();
    let sort_key = args.sort.clone().or_else(|| keys.first().cloned());
    let sorts_by_hidden_column = match &sort_key {
        Some(key) if !keys.contains(key) => {
            keys.push(key.clone());
            true
        }
        _ => false,
    };

    let mut builder = ListPipeline::builder(source, strapi_identity)
        .columns(keys.iter().map(|key| {
            Column::new(key.as_str(), column_label(key), true, json_field(key.as_str()))
        }))
        .rows_per_page(args.rows_per_page)
        .enable_pagination(!args.all)
        .token(token);

    if sorts_by_hidden_column {
        builder = builder.visible_columns(VisibleColumns::only(args.columns.iter().cloned()));
    }

    if let Some(key) = sort_key {
        builder = builder.initial_sort(if args.descending {
            SortDescriptor::descending(key)
        } else {
            SortDescriptor::ascending(key)
        });
    }

    if let Some(field) = &args.status_field {
        let read_status = json_field(field.as_str());
        // Known values aren't known up front, so any `--status` selection narrows.
        builder = builder.status_facet(StatusFacet::new(
            move |row: &Value| read_status(row).to_string(),
            Vec::<String>::new(),
        ));
    }

    builder.build()
}

/// Query and facet first, since changing them goes back to page 1.
pub fn apply_view_args(pipeline: &mut ListPipeline<Value>, args: &ListArgs) {
    pipeline.set_query(args.query.clone().unwrap_or_default());
    if !args.status.is_empty() {
        pipeline.set_facet(FacetSelection::only(args.status.iter().cloned()));
    }
    pipeline.set_page(args.page);
}

/// `documentId` becomes `DocumentId`.
#[must_use]
pub fn column_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
