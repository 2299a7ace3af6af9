// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Vocabulary shared by the stages and the pipeline: columns and their cell values,
//! row identity, the sort descriptor, filter state, visible columns and page state.

// Attach sources.
mod auth_token;
mod cell_value;
mod column;
mod filter_state;
mod item_id;
mod page_state;
mod sort_descriptor;
mod visible_columns;

// Re-export.
pub use auth_token::*;
pub use cell_value::*;
pub use column::*;
pub use filter_state::*;
pub use item_id::*;
pub use page_state::*;
pub use sort_descriptor::*;
pub use visible_columns::*;

/// Inline capacity for the small collections this crate hands out (columns, ids on a
/// page). Spills to the heap past this size.
pub const DEFAULT_INLINE_CAPACITY: usize = 16;

pub type InlineVec<T> = smallvec::SmallVec<[T; DEFAULT_INLINE_CAPACITY]>;
