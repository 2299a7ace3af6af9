// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Constellation list pipeline
//!
//! Every entity list in Constellation (clubs, users, pins, encounters, awards, ...)
//! renders the same way: a raw collection is fetched from the backend, and then the
//! user narrows it with a search box and a status facet, orders it by clicking column
//! headers, and pages through it. This crate is that reusable controller, decoupled
//! from any specific entity.
//!
//! ```text
//! CollectionSource::fetch ─▶ rows ─▶ filter ─▶ sort ─▶ paginate ─▶ page_items()
//!          ▲                  │
//!          │                  └── remove(id) ◀── CollectionSource::delete
//!      AuthToken
//! ```
//!
//! # Pieces
//!
//! 1. [`CollectionSource`] is the seam to the backend. [`StrapiCollection`] implements
//!    it over the Strapi REST API; tests implement it in memory.
//! 2. [`ListPipeline`] owns a client side copy of the collection and all derived view
//!    state (query, facet, sort descriptor, page, visible columns, selection).
//! 3. The stages ([`filter_rows`], [`sort_rows`], [`paginate`]) are plain functions
//!    over borrowed rows, so they can be used without a pipeline.
//! 4. [`ListPipeline::remove`] is the mutation bridge: it only drops a row locally
//!    after the backend confirms the delete.
//!
//! # Example
//!
//! ```no_run
//! use constellation_lists::{AuthToken, CellValue, Column, ListPipeline,
//!                           StrapiCollection, json_field, strapi_identity};
//!
//! # async fn run() -> miette::Result<()> {
//! let source = StrapiCollection::<serde_json::Value>::try_new(
//!     "http://localhost:1337",
//!     "clubs",
//! )?;
//!
//! let mut pipeline = ListPipeline::builder(source, strapi_identity)
//!     .column(Column::new("name", "Name", true, json_field("name")))
//!     .column(Column::new("members", "Members", true, json_field("members")))
//!     .rows_per_page(10)
//!     .token(Some(AuthToken::new("jwt")))
//!     .build();
//!
//! pipeline.load().await;
//! pipeline.set_query("chess");
//! for row in pipeline.page_items() {
//!     println!("{row}");
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod error;
pub mod loader;
pub mod log;
pub mod pipeline;
pub mod stages;
pub mod types;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use error::*;
pub use loader::*;
pub use log::*;
pub use pipeline::*;
pub use stages::*;
pub use types::*;
