// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod delete_command;
pub mod list_command;
pub mod table_renderer;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use delete_command::*;
pub use list_command::*;
pub use table_renderer::*;
