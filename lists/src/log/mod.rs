// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup shared by the library's tests and the `cl` binary. The library itself
//! only emits events through the [`tracing`] macros; installing a subscriber is up to
//! the application.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
