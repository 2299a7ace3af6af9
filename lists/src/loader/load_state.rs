// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Load lifecycle of a pipeline.
///
/// ```text
/// Idle ──load()──▶ Loading ──▶ Ready ──set_token() / load()──▶ Loading ──▶ Ready
/// ```
///
/// Filter, sort and page changes are synchronous and never pass through
/// [`LoadState::Loading`]. A failed fetch still ends in [`LoadState::Ready`]; the error
/// is kept separately, see [`crate::ListPipeline::last_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
}

impl LoadState {
    #[must_use]
    pub fn is_loading(self) -> bool { self == LoadState::Loading }
}

impl Display for LoadState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            LoadState::Idle => write!(f, "idle"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Ready => write!(f, "ready"),
        }
    }
}
