// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`ListPipeline`] ties the loader, the stages and the mutation bridge together into
//! one controller per list view.
//!
//! # Ownership
//!
//! A pipeline owns its full copy of the remote collection and all derived view state.
//! Nothing is shared between instances: two open views of the same entity type hold
//! independent snapshots that can drift until their next fetch.
//!
//! # Concurrency
//!
//! [`ListPipeline::load`], [`ListPipeline::set_token`] and [`ListPipeline::remove`] take
//! `&mut self`, so at most one fetch or delete is in flight per pipeline, and fetches
//! resolve in the order they were started. Share a pipeline with a
//! [`SharedListPipeline`] (eg: for [`spawn_refresh_task`]).

// Attach sources.
mod list_pipeline_impl;
mod list_pipeline_struct;
mod mutation_bridge;
mod refresh_task;
mod selection;

// Re-export.
pub use list_pipeline_impl::*;
pub use list_pipeline_struct::*;
pub use mutation_bridge::*;
pub use refresh_task::*;
pub use selection::*;

pub const DEBUG_PIPELINE_MOD: bool = true;
