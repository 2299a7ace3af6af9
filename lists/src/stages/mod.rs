// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The three view stages, as plain functions over borrowed rows. None of them mutate
//! the source collection; each returns (or reorders) a new `Vec<&T>`.
//!
//! ```text
//! &[T] ─▶ filter_rows ─▶ Vec<&T> ─▶ sort_rows ─▶ Vec<&T> ─▶ paginate ─▶ &[&T]
//! ```

// Attach sources.
mod filter_stage;
mod pagination_stage;
mod sort_stage;

// Re-export.
pub use filter_stage::*;
pub use pagination_stage::*;
pub use sort_stage::*;
