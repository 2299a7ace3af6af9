// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `cl` entry point. See the [`constellation_cmdr`] crate docs for usage.

use clap::Parser;
use constellation_cmdr::{CLIArg, CLICommand, try_delete, try_list, ui_str};
use constellation_lists::try_initialize_logging_global;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let exit_code = launch_cl(&cli_arg).await;

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...", exit_code = %exit_code);
    });

    std::process::exit(exit_code);
}

/// Returns the process exit code.
async fn launch_cl(cli_arg: &CLIArg) -> i32 {
    match try_run_command(cli_arg).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            0
        }
        // Handle unrecoverable / unknown errors here.
        Err(report) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run cl due to the following problem",
                error = ?report
            );
            eprintln!("{}", ui_str::unrecoverable_error_message(&report));
            1
        }
    }
}

async fn try_run_command(cli_arg: &CLIArg) -> miette::Result<Vec<String>> {
    let global = &cli_arg.global_options;
    match &cli_arg.command {
        CLICommand::List(args) => {
            let table = try_list(global, args).await?;
            Ok(ui_str::styled_table_lines(&table))
        }
        CLICommand::Delete { collection, id } => {
            let report = try_delete(global, collection, id).await?;
            Ok(vec![ui_str::deleted_message(&report)])
        }
    }
}
