// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors reported by collection sources. The pipeline never lets these escape as
//! panics: a failed fetch is kept in [`crate::ListPipeline::last_error`], and a failed
//! delete is handed back to the caller as a value.

use crate::ItemId;

/// Convenience alias for results produced by a [`crate::CollectionSource`].
pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PipelineError {
    #[error("📡 Could not reach '{url}'")]
    #[diagnostic(
        code(constellation_lists::transport),
        help("Check that the backend is running and that the base url is correct.")
    )]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("🚫 '{url}' responded with status {status}")]
    #[diagnostic(
        code(constellation_lists::http_status),
        help("A 401 or 403 usually means the auth token is missing or expired.")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("🧩 Could not decode the response body from '{url}'")]
    #[diagnostic(code(constellation_lists::decode))]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("🗑️ This collection source can't delete rows (tried to delete '{id}')")]
    #[diagnostic(code(constellation_lists::delete_unsupported))]
    DeleteUnsupported { id: ItemId },

    #[error("❌ The source rejected the request: {reason}")]
    #[diagnostic(code(constellation_lists::rejected))]
    Rejected { reason: String },

    #[error("🔧 Could not build the http client")]
    #[diagnostic(code(constellation_lists::client_build))]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

impl PipelineError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}
