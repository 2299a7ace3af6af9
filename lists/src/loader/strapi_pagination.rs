// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Strapi pages list responses (25 rows by default, at most 100). A fetch requests
//! page after page, feeding each response to a [`PageCollector`] until it says stop.

use serde::{Deserialize, de::IgnoredAny};

use crate::CollectionPayload;

pub(crate) mod constants {
    pub const PAGE_PARAM: &str = "pagination[page]";
    pub const PAGE_SIZE_PARAM: &str = "pagination[pageSize]";
    /// Strapi's default `maxLimit`.
    pub const PAGE_SIZE: u64 = 100;
    /// Upper bound on requests per fetch, in case a server keeps reporting more pages.
    pub const MAX_PAGES: u64 = 1_000;
}

/// `meta.pagination` of a Strapi list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrapiPagination {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StrapiMeta {
    pub pagination: StrapiPagination,
}

/// One response body. Anything without `meta.pagination` (a bare array, an envelope
/// from a non Strapi backend, garbage) is [`StrapiPage::Unpaged`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StrapiPage<T> {
    Paged { data: Vec<T>, meta: StrapiMeta },
    Unpaged(CollectionPayload<T>),
}

#[derive(Debug)]
pub struct PageCollector<T> {
    rows: Vec<T>,
    last_page: u64,
    pages_read: u64,
    expected_total: Option<u64>,
    recognized: bool,
}

impl<T> Default for PageCollector<T> {
    fn default() -> Self {
        Self {
            rows: vec![],
            last_page: 0,
            pages_read: 0,
            expected_total: None,
            recognized: true,
        }
    }
}

impl<T> PageCollector<T> {
    /// Adds one response. Returns the next page to request, or `None` when done.
    ///
    /// Stops early on an empty page, on a page number that didn't advance (a server
    /// ignoring `pagination[page]`), and after 1000 requests.
    pub fn push(&mut self, page: StrapiPage<T>) -> Option<u64> {
        self.pages_read += 1;

        match page {
            StrapiPage::Paged { data, meta } => {
                let StrapiPagination {
                    page,
                    page_count,
                    total,
                } = meta.pagination;
                let was_empty = data.is_empty();
                self.rows.extend(data);
                self.expected_total = Some(total);

                let advanced = page > self.last_page;
                self.last_page = page;

                let has_more = advanced
                    && !was_empty
                    && page < page_count
                    && self.pages_read < constants::MAX_PAGES;
                has_more.then_some(page + 1)
            }
            StrapiPage::Unpaged(payload) => {
                if self.pages_read == 1 {
                    self.recognized = payload.is_recognized();
                }
                self.rows.extend(payload.into_items());
                None
            }
        }
    }

    /// Rows the server reported in `meta.pagination.total` that never arrived.
    #[must_use]
    pub fn missing_rows(&self) -> u64 {
        let received = u64::try_from(self.rows.len()).unwrap_or(u64::MAX);
        self.expected_total
            .map_or(0, |total| total.saturating_sub(received))
    }

    /// All rows read so far. Logs a warning when fewer rows arrived than the server
    /// said it has.
    pub fn finish(self, url: &str) -> CollectionPayload<T> {
        if !self.recognized {
            return CollectionPayload::Unrecognized(IgnoredAny);
        }

        let missing = self.missing_rows();
        if missing > 0 {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "⚠️ Collection is incomplete, the server has more rows than were loaded",
                url = %url,
                loaded = %self.rows.len(),
                missing = %missing,
                pages = %self.pages_read
            );
        }

        CollectionPayload::Envelope { data: self.rows }
    }
}
