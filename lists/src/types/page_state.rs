// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Current page (1 based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageState {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl PageState {
    /// A `rows_per_page` of 0 is treated as 1.
    #[must_use]
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            page: 1,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// `max(1, ceil(row_count / rows_per_page))`.
    #[must_use]
    pub fn pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.rows_per_page.max(1)).max(1)
    }

    /// Advances unless already on the last page. Returns whether the page changed.
    pub fn next(&mut self, row_count: usize) -> bool {
        if self.page < self.pages(row_count) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back unless already on page 1. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) { self.page = 1; }
}
