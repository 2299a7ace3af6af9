// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The remote collection loader: the [`CollectionSource`] seam to the backend, the
//! payload shapes it may return, the load state machine, and the Strapi REST
//! implementation.

// Attach sources.
mod collection_payload;
mod collection_source;
mod http_client;
mod load_state;
mod strapi_pagination;
mod strapi_source;

// Re-export.
pub use collection_payload::*;
pub use collection_source::*;
pub use http_client::*;
pub use load_state::*;
pub use strapi_pagination::*;
pub use strapi_source::*;

pub const DEBUG_LOADER_MOD: bool = true;
