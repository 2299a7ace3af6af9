// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::watch;

use crate::{AuthToken, Column, ColumnKey, DEBUG_PIPELINE_MOD, FacetSelection,
            FilterState, InlineVec, ItemId, ListPipeline, LoadState, PageState,
            PipelineError, Selection, SortDescriptor, StatusFacet, VisibleColumns,
            filter_rows, find_column, paginate, sort_rows};

/// Loading.
impl<T: Send + 'static> ListPipeline<T> {
    /// Fetches the whole collection and replaces the local rows.
    ///
    /// Publishes [`LoadState::Loading`] before the request and [`LoadState::Ready`]
    /// after it, whatever the outcome. A failed fetch is logged and kept in
    /// [`Self::last_error`]; the previous rows stay in place. There is no retry.
    pub async fn load(&mut self) {
        self.load_state.send_replace(LoadState::Loading);

        match self.source.fetch(self.token.as_ref()).await {
            Ok(payload) => {
                if !payload.is_recognized() {
                    tracing::warn!(
                        message = "⚠️ Unrecognized collection payload, loading empty"
                    );
                }
                self.replace_rows(payload.into_items());
                self.last_error = None;

                DEBUG_PIPELINE_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "✅ Collection loaded",
                        rows = %self.rows.len()
                    );
                });
            }
            Err(error) => {
                tracing::warn!(
                    message = "❌ Could not load collection, keeping previous rows",
                    error = ?error,
                    rows = %self.rows.len()
                );
                self.last_error = Some(error);
            }
        }

        self.load_state.send_replace(LoadState::Ready);
    }

    /// Swaps the token. Reloads and returns `true` only if it actually changed.
    pub async fn set_token(&mut self, token: Option<AuthToken>) -> bool {
        if self.token == token {
            return false;
        }
        self.token = token;
        self.load().await;
        true
    }

    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> { self.token.as_ref() }

    #[must_use]
    pub fn load_state(&self) -> LoadState { *self.load_state.borrow() }

    #[must_use]
    pub fn is_loading(&self) -> bool { self.load_state().is_loading() }

    /// Observe load state changes while a fetch is in flight.
    #[must_use]
    pub fn subscribe_load_state(&self) -> watch::Receiver<LoadState> {
        self.load_state.subscribe()
    }

    /// The error from the most recent fetch, cleared by the next successful one.
    #[must_use]
    pub fn last_error(&self) -> Option<&PipelineError> { self.last_error.as_ref() }

    /// Hands the last fetch error to the caller, eg: to report it, and clears it.
    pub fn take_last_error(&mut self) -> Option<PipelineError> { self.last_error.take() }
}

/// Rows.
impl<T: Send + 'static> ListPipeline<T> {
    /// The full local copy of the collection, in fetch order.
    #[must_use]
    pub fn rows(&self) -> &[T] { &self.rows }

    /// Replaces the local rows, eg: after a create or update round trip.
    pub fn set_data(&mut self, rows: Vec<T>) { self.replace_rows(rows); }

    /// Replaces the row with the same identity, or appends it. Returns `true` if an
    /// existing row was replaced.
    pub fn upsert(&mut self, row: T) -> bool {
        let id = self.identity_of(&row);
        match self.rows.iter().position(|it| self.identity_of(it) == id) {
            Some(index) => {
                self.rows[index] = row;
                true
            }
            None => {
                self.rows.push(row);
                false
            }
        }
    }

    #[must_use]
    pub fn identity_of(&self, row: &T) -> ItemId { (self.config.identity)(row) }

    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&T> {
        self.rows.iter().find(|row| self.identity_of(row) == *id)
    }

    #[must_use]
    pub fn columns(&self) -> &[Column<T>] { &self.config.columns }

    #[must_use]
    pub fn status_facet(&self) -> Option<&StatusFacet<T>> {
        self.config.status_facet.as_ref()
    }

    pub(crate) fn replace_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.prune_selection();
    }

    pub(crate) fn prune_selection(&mut self) {
        let identity = &self.config.identity;
        let rows = &self.rows;
        self.selection
            .retain(|id| rows.iter().any(|row| identity(row) == *id));
    }
}

/// Filter and sort.
impl<T: Send + 'static> ListPipeline<T> {
    #[must_use]
    pub fn filter_state(&self) -> &FilterState { &self.filter_state }

    /// Changing the query goes back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filter_state.query != query {
            self.filter_state.query = query;
            self.page_state.reset();
        }
    }

    /// Changing the facet selection goes back to page 1.
    pub fn set_facet(&mut self, facet: FacetSelection) {
        if self.filter_state.facet != facet {
            self.filter_state.facet = facet;
            self.page_state.reset();
        }
    }

    #[must_use]
    pub fn sort_descriptor(&self) -> &SortDescriptor { &self.sort_descriptor }

    /// The page is kept as is.
    pub fn set_sort_descriptor(&mut self, descriptor: SortDescriptor) {
        self.sort_descriptor = descriptor;
    }

    /// Header click: same column flips direction, another column sorts ascending.
    /// Returns `false` (and does nothing) for unknown or unsortable columns.
    pub fn toggle_sort(&mut self, key: &ColumnKey) -> bool {
        match find_column(&self.config.columns, key) {
            Some(column) if column.sortable => {
                self.sort_descriptor = self.sort_descriptor.toggled(key);
                true
            }
            _ => false,
        }
    }

    /// Filtered then sorted rows, before pagination.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<&T> {
        let mut rows = filter_rows(
            &self.rows,
            &self.config.columns,
            self.config.status_facet.as_ref(),
            &self.filter_state,
            self.config.custom_filter.as_ref(),
        );
        sort_rows(
            &mut rows,
            &self.config.columns,
            &self.sort_descriptor,
            self.config.custom_sort.as_ref(),
        );
        rows
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        filter_rows(
            &self.rows,
            &self.config.columns,
            self.config.status_facet.as_ref(),
            &self.filter_state,
            self.config.custom_filter.as_ref(),
        )
        .len()
    }
}

/// Visible columns.
impl<T: Send + 'static> ListPipeline<T> {
    /// Columns to render, in declaration order.
    #[must_use]
    pub fn visible_columns(&self) -> InlineVec<&Column<T>> {
        self.visible_columns.select(&self.config.columns)
    }

    #[must_use]
    pub fn visible_column_keys(&self) -> &VisibleColumns { &self.visible_columns }

    pub fn set_visible_columns(&mut self, visible_columns: VisibleColumns) {
        self.visible_columns = visible_columns;
    }

    pub fn toggle_column_visibility(&mut self, key: &ColumnKey) {
        self.visible_columns.toggle(key, &self.config.columns);
    }
}

/// Paging.
impl<T: Send + 'static> ListPipeline<T> {
    #[must_use]
    pub fn page_state(&self) -> PageState { self.page_state }

    #[must_use]
    pub fn page(&self) -> usize { self.page_state.page }

    #[must_use]
    pub fn rows_per_page(&self) -> usize { self.page_state.rows_per_page }

    /// Always 1 when pagination is disabled.
    #[must_use]
    pub fn pages(&self) -> usize {
        if self.config.enable_pagination {
            self.page_state.pages(self.filtered_count())
        } else {
            1
        }
    }

    /// Not clamped. A page past the end renders as an empty page.
    pub fn set_page(&mut self, page: usize) { self.page_state.page = page; }

    /// 0 is treated as 1. Goes back to page 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.page_state = PageState::new(rows_per_page);
    }

    /// No-op on the last page. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.config.enable_pagination {
            return false;
        }
        let count = self.filtered_count();
        self.page_state.next(count)
    }

    /// No-op on page 1. Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        if !self.config.enable_pagination {
            return false;
        }
        self.page_state.previous()
    }

    /// The rows the view renders right now: filtered, sorted, then paged.
    #[must_use]
    pub fn page_items(&self) -> Vec<&T> {
        let rows = self.sorted_rows();
        paginate(&rows, &self.page_state, self.config.enable_pagination).to_vec()
    }
}

/// Selection.
impl<T: Send + 'static> ListPipeline<T> {
    #[must_use]
    pub fn selection(&self) -> &Selection { &self.selection }

    /// Returns `true` if the row is selected after the toggle.
    pub fn toggle_selected(&mut self, id: ItemId) -> bool { self.selection.toggle(id) }

    /// Selects every row on the current page.
    pub fn select_page(&mut self) {
        let ids: Vec<ItemId> = self
            .page_items()
            .into_iter()
            .map(|row| self.identity_of(row))
            .collect();
        self.selection.select_all(ids);
    }

    pub fn clear_selection(&mut self) { self.selection.clear(); }

    /// Selected rows, in selection order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.find(id))
            .collect()
    }
}
