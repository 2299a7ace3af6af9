// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # cl
//!
//! Browse and prune Constellation collections from the terminal. `cl` drives the same
//! [`constellation_lists::ListPipeline`] the app's list views use, so a search, a sort
//! or a page here shows exactly the rows the app would show.
//!
//! ```text
//! cl list clubs --query chess --sort name --descending --page 2
//! cl list users --columns username,email,blocked --status-field blocked --status false
//! cl delete clubs h7x2k9
//! ```
//!
//! The backend url and auth token come from `--api-url` and `--token`, or from the
//! `CONSTELLATION_API_URL` and `CONSTELLATION_TOKEN` environment variables.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::needless_return)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::needless_pass_by_value)]

pub const DEBUG_CL_MOD: bool = true;

// Attach sources.
pub mod cl;

// Re-export.
pub use cl::*;

#[cfg(test)]
pub mod test_fixtures;
