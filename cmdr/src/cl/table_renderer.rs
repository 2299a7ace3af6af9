// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain text rendering of the current page of a [`ListPipeline`]. Only visible columns
//! are shown, in declaration order, and the sorted column's header carries a direction
//! marker.

use constellation_lists::{Column, ListPipeline, SortDirection};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod constants {
    pub const MAX_CELL_WIDTH: usize = 32;
    pub const COLUMN_GAP: &str = "  ";
    pub const ELLIPSIS: char = '…';
    pub const RULE: char = '─';
    pub const ASCENDING_MARKER: &str = " ▲";
    pub const DESCENDING_MARKER: &str = " ▼";
}

/// Lines of a rendered page: header, rule, one line per row, rule, footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub header: String,
    pub rows: Vec<String>,
    pub footer: String,
}

impl RenderedTable {
    #[must_use]
    pub fn rule(&self) -> String {
        constants::RULE
            .to_string()
            .repeat(self.header.width().max(self.footer.width()))
    }

    /// Every line, with the rule above and below the rows.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let rule = self.rule();
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.header.clone());
        lines.push(rule.clone());
        lines.extend(self.rows.iter().cloned());
        lines.push(rule);
        lines.push(self.footer.clone());
        lines
    }
}

#[must_use]
pub fn render_table<T: Send + 'static>(pipeline: &ListPipeline<T>) -> RenderedTable {
    let columns = pipeline.visible_columns();
    let page_items = pipeline.page_items();

    let headers: Vec<String> = columns
        .iter()
        .map(|column| header_label(pipeline, column))
        .collect();

    let cells: Vec<Vec<String>> = page_items
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| truncate(&column.cell(row).to_string(), constants::MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            cells
                .iter()
                .map(|row| row[index].width())
                .fold(header.width(), usize::max)
        })
        .collect();

    let header = join_padded(&headers, &widths);
    let rows = cells.iter().map(|row| join_padded(row, &widths)).collect();
    let footer = crate::ui_str::page_footer(
        pipeline.page(),
        pipeline.pages(),
        pipeline.filtered_count(),
        pipeline.rows().len(),
    );

    RenderedTable {
        header,
        rows,
        footer,
    }
}

fn header_label<T: Send + 'static>(pipeline: &ListPipeline<T>, column: &Column<T>) -> String {
    let descriptor = pipeline.sort_descriptor();
    if descriptor.column != column.key {
        return column.label.clone();
    }
    let marker = match descriptor.direction {
        SortDirection::Ascending => constants::ASCENDING_MARKER,
        SortDirection::Descending => constants::DESCENDING_MARKER,
    };
    format!("{}{marker}", column.label)
}

/// Pads every cell to its column width and trims trailing spaces off the line.
fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(constants::COLUMN_GAP);
    line.trim_end().to_owned()
}

/// Pads by display width, so wide characters (eg: emoji, CJK) line up.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// Cuts `text` to at most `max_width` columns of display width, ending with `…` when
/// something was cut. Newlines are flattened to spaces.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    let text = text.replace(['\n', '\r'], " ");
    if text.width() <= max_width {
        return text;
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut return_it = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        return_it.push(ch);
    }
    return_it.push(constants::ELLIPSIS);
    return_it
}
