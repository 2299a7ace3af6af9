// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Stylize;

use crate::{DeleteReport, RenderedTable};

pub fn unrecoverable_error_message(report: &miette::Report) -> String {
    format!(
        "{a}:\n{b:?}",
        a = "Could not run cl due to the following problem".red(),
        b = report
    )
}

#[must_use]
pub fn page_footer(page: usize, pages: usize, filtered: usize, total: usize) -> String {
    format!("Page {page} of {pages} · {filtered} of {total} rows")
}

#[must_use]
pub fn no_rows_message() -> String { "No rows match.".dark_grey().to_string() }

#[must_use]
pub fn deleted_message(report: &DeleteReport) -> String {
    let text = format!("Deleted {} from {}.", report.id, report.collection);
    if report.removed == 0 {
        format!("{} {}", text.green(), "It was not in the local copy.".dark_grey())
    } else {
        text.green().to_string()
    }
}

/// Header in bold, rules and footer dimmed, rows as is.
#[must_use]
pub fn styled_table_lines(table: &RenderedTable) -> Vec<String> {
    let rule = table.rule();
    let mut lines = vec![
        table.header.clone().bold().to_string(),
        rule.clone().dark_grey().to_string(),
    ];
    if table.rows.is_empty() {
        lines.push(no_rows_message());
    } else {
        lines.extend(table.rows.iter().cloned());
    }
    lines.push(rule.dark_grey().to_string());
    lines.push(table.footer.clone().dark_grey().to_string());
    lines
}
