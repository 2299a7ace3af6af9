// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use clap::{Args, Parser, Subcommand};
use constellation_lists::{AuthToken, DEFAULT_ROWS_PER_PAGE};

mod constants {
    pub const DEFAULT_API_URL: &str = "http://localhost:1337";
    pub const DEFAULT_COLUMNS: &str = "id,name";
}

#[derive(Debug, Parser)]
#[command(bin_name = "cl")]
#[command(about = "📋 Browse and prune Constellation collections from the terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  cl [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        env = "CONSTELLATION_API_URL",
        default_value = constants::DEFAULT_API_URL,
        help = "Base url of the Strapi backend"
    )]
    pub api_url: String,

    #[arg(
        global = true,
        long,
        env = "CONSTELLATION_TOKEN",
        hide_env_values = true,
        help = "JWT sent as `Authorization: Bearer <token>`"
    )]
    pub token: Option<String>,
}

/// The token is never printed, since `cli_arg` is logged when logging is enabled.
impl Debug for GlobalOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalOption")
            .field("enable_logging", &self.enable_logging)
            .field("api_url", &self.api_url)
            .field("token", &self.auth_token())
            .finish()
    }
}

impl GlobalOption {
    #[must_use]
    pub fn auth_token(&self) -> Option<AuthToken> {
        self.token
            .as_deref()
            .filter(|it| !it.is_empty())
            .map(AuthToken::new)
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "📋 Show one page of a collection\n💡 Eg: `cl list clubs --query chess`")]
    List(ListArgs),

    #[clap(about = "🗑️ Delete one row from a collection\n💡 Eg: `cl delete clubs h7x2k9`")]
    Delete {
        #[arg(help = "Collection name, eg: `clubs`")]
        collection: String,
        #[arg(help = "Numeric `id` or `documentId` of the row")]
        id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ListArgs {
    #[arg(help = "Collection name, eg: `clubs`")]
    pub collection: String,

    #[arg(long, short = 'q', help = "Case insensitive search across all columns")]
    pub query: Option<String>,

    #[arg(long, short = 's', help = "Column key to sort by [default: first column]")]
    pub sort: Option<String>,

    #[arg(long, short = 'd', help = "Sort descending")]
    pub descending: bool,

    #[arg(long, short = 'p', default_value_t = 1, help = "Page to show, 1 based")]
    pub page: usize,

    #[arg(long, short = 'r', default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub rows_per_page: usize,

    #[arg(long, help = "Show every row on one page")]
    pub all: bool,

    #[arg(
        long,
        short = 'c',
        value_delimiter = ',',
        default_value = constants::DEFAULT_COLUMNS,
        help = "Comma separated field names to show and search"
    )]
    pub columns: Vec<String>,

    #[arg(long, requires = "status", help = "Field that holds each row's status")]
    pub status_field: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Comma separated statuses to keep")]
    pub status: Vec<String>,

    #[arg(long, help = "Ask Strapi to populate relations (`populate=*`)")]
    pub populate: bool,
}
