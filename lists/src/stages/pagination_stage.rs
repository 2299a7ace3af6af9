// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::PageState;

/// Slices one page out of the sorted, filtered rows.
///
/// - Pages are 1 based. Page 0 is treated as page 1.
/// - A page past the end yields an empty slice. Callers that set the page directly are
///   responsible for keeping it in range; see [`crate::ListPipeline::set_page`].
/// - With `enabled == false` this is the identity.
#[must_use]
pub fn paginate<'r, T>(rows: &'r [T], page_state: &PageState, enabled: bool) -> &'r [T] {
    if !enabled {
        return rows;
    }

    let rows_per_page = page_state.rows_per_page.max(1);
    let start = page_state
        .page
        .saturating_sub(1)
        .saturating_mul(rows_per_page)
        .min(rows.len());
    let end = start.saturating_add(rows_per_page).min(rows.len());

    &rows[start..end]
}
