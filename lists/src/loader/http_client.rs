// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PipelineError, PipelineResult};

mod constants {
    pub const USER_AGENT: &str = concat!("constellation-lists/", env!("CARGO_PKG_VERSION"));
}

/// # Errors
///
/// Returns an error if:
/// - The HTTP client builder fails to build
/// - TLS backend initialization fails
pub fn create_client_with_user_agent(
    user_agent: Option<&str>,
) -> PipelineResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent.map_or_else(
            /* none */ || constants::USER_AGENT.to_owned(),
            /* some */ ToOwned::to_owned,
        ))
        .build()
        .map_err(|source| PipelineError::ClientBuild { source })
}
