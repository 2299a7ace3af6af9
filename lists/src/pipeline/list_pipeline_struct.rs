// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use tokio::sync::watch;

use crate::{AuthToken, CollectionSource, Column, CustomFilterFn, CustomSortFn,
            FilterState, IdentityFn, ItemId, LoadState, PageState, PipelineError,
            Selection, SelectionMode, SortDescriptor, StatusFacet, VisibleColumns};

/// Static configuration of a pipeline. Set once through [`ListPipelineBuilder`].
pub struct PipelineConfig<T> {
    pub columns: Vec<Column<T>>,
    pub identity: IdentityFn<T>,
    pub status_facet: Option<StatusFacet<T>>,
    pub custom_filter: Option<CustomFilterFn<T>>,
    pub custom_sort: Option<CustomSortFn<T>>,
    pub enable_pagination: bool,
}

impl<T> Debug for PipelineConfig<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("columns", &self.columns)
            .field("status_facet", &self.status_facet)
            .field("custom_filter", &self.custom_filter.is_some())
            .field("custom_sort", &self.custom_sort.is_some())
            .field("enable_pagination", &self.enable_pagination)
            .finish_non_exhaustive()
    }
}

/// Client side controller for one list view. See the [module docs](crate::pipeline).
///
/// The pipeline is the single source of truth for what the view renders, but it only
/// holds a cache of the authoritative remote collection. Rows change only through:
/// 1. a full fetch ([`ListPipeline::load`], [`ListPipeline::set_token`]),
/// 2. a confirmed delete ([`ListPipeline::remove`]),
/// 3. an explicit [`ListPipeline::set_data`] or [`ListPipeline::upsert`] after a create
///    or update round trip with the backend.
pub struct ListPipeline<T: Send> {
    pub(crate) config: PipelineConfig<T>,
    pub(crate) source: Arc<dyn CollectionSource<T>>,
    pub(crate) token: Option<AuthToken>,
    pub(crate) rows: Vec<T>,
    pub(crate) filter_state: FilterState,
    pub(crate) sort_descriptor: SortDescriptor,
    pub(crate) visible_columns: VisibleColumns,
    pub(crate) page_state: PageState,
    pub(crate) selection: Selection,
    pub(crate) load_state: watch::Sender<LoadState>,
    pub(crate) last_error: Option<PipelineError>,
}

impl<T: Send> Debug for ListPipeline<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPipeline")
            .field("columns", &self.config.columns)
            .field("token", &self.token)
            .field("rows", &self.rows.len())
            .field("filter_state", &self.filter_state)
            .field("sort_descriptor", &self.sort_descriptor)
            .field("visible_columns", &self.visible_columns)
            .field("page_state", &self.page_state)
            .field("selection", &self.selection)
            .field("load_state", &*self.load_state.borrow())
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> ListPipeline<T> {
    /// Starts building a pipeline over `source`. `identity` maps each row to the
    /// [`ItemId`] used for selection and removal.
    pub fn builder(
        source: impl CollectionSource<T> + 'static,
        identity: impl Fn(&T) -> ItemId + Send + Sync + 'static,
    ) -> ListPipelineBuilder<T> {
        ListPipelineBuilder {
            source: Arc::new(source),
            identity: Arc::new(identity),
            columns: vec![],
            initial_sort: None,
            page_state: PageState::default(),
            enable_pagination: true,
            status_facet: None,
            custom_filter: None,
            custom_sort: None,
            visible_columns: VisibleColumns::All,
            selection_mode: SelectionMode::default(),
            token: None,
        }
    }
}

pub struct ListPipelineBuilder<T: Send> {
    source: Arc<dyn CollectionSource<T>>,
    identity: IdentityFn<T>,
    columns: Vec<Column<T>>,
    initial_sort: Option<SortDescriptor>,
    page_state: PageState,
    enable_pagination: bool,
    status_facet: Option<StatusFacet<T>>,
    custom_filter: Option<CustomFilterFn<T>>,
    custom_sort: Option<CustomSortFn<T>>,
    visible_columns: VisibleColumns,
    selection_mode: SelectionMode,
    token: Option<AuthToken>,
}

impl<T: Send> Debug for ListPipelineBuilder<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPipelineBuilder")
            .field("columns", &self.columns)
            .field("initial_sort", &self.initial_sort)
            .field("page_state", &self.page_state)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> ListPipelineBuilder<T> {
    #[must_use]
    pub fn column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column<T>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Defaults to the first column, ascending.
    #[must_use]
    pub fn initial_sort(mut self, descriptor: SortDescriptor) -> Self {
        self.initial_sort = Some(descriptor);
        self
    }

    #[must_use]
    pub fn rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.page_state = PageState::new(rows_per_page);
        self
    }

    #[must_use]
    pub fn enable_pagination(mut self, enable: bool) -> Self {
        self.enable_pagination = enable;
        self
    }

    #[must_use]
    pub fn status_facet(mut self, facet: StatusFacet<T>) -> Self {
        self.status_facet = Some(facet);
        self
    }

    /// Replaces the default query and facet filter entirely.
    #[must_use]
    pub fn custom_filter(
        mut self,
        filter: impl for<'a> Fn(&'a [T], &FilterState) -> Vec<&'a T> + Send + Sync + 'static,
    ) -> Self {
        self.custom_filter = Some(Arc::new(filter));
        self
    }

    /// Replaces the default column sort entirely.
    #[must_use]
    pub fn custom_sort(
        mut self,
        sort: impl Fn(&mut [&T], &SortDescriptor) + Send + Sync + 'static,
    ) -> Self {
        self.custom_sort = Some(Arc::new(sort));
        self
    }

    #[must_use]
    pub fn visible_columns(mut self, visible_columns: VisibleColumns) -> Self {
        self.visible_columns = visible_columns;
        self
    }

    #[must_use]
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    #[must_use]
    pub fn token(mut self, token: Option<AuthToken>) -> Self {
        self.token = token;
        self
    }

    /// The pipeline starts [`LoadState::Idle`] and empty. Call
    /// [`ListPipeline::load`] to fetch.
    #[must_use]
    pub fn build(self) -> ListPipeline<T> {
        let sort_descriptor = self.initial_sort.unwrap_or_else(|| {
            self.columns
                .first()
                .map(|column| SortDescriptor::ascending(column.key.clone()))
                .unwrap_or_default()
        });

        let (load_state, _) = watch::channel(LoadState::Idle);

        ListPipeline {
            config: PipelineConfig {
                columns: self.columns,
                identity: self.identity,
                status_facet: self.status_facet,
                custom_filter: self.custom_filter,
                custom_sort: self.custom_sort,
                enable_pagination: self.enable_pagination,
            },
            source: self.source,
            token: self.token,
            rows: vec![],
            filter_state: FilterState::default(),
            sort_descriptor,
            visible_columns: self.visible_columns,
            page_state: self.page_state,
            selection: Selection::new(self.selection_mode),
            load_state,
            last_error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnKey, SortDirection, test_fixtures::{ScriptedSource, member_columns,
                                                          member_identity}};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let pipeline = ListPipeline::builder(ScriptedSource::default(), member_identity)
            .columns(member_columns())
            .build();

        assert_eq!(*pipeline.load_state.borrow(), LoadState::Idle);
        assert_eq!(pipeline.sort_descriptor, SortDescriptor::ascending("id"));
        assert_eq!(pipeline.page_state, PageState::default());
        assert!(pipeline.rows.is_empty());
        assert!(pipeline.config.enable_pagination);
        assert!(pipeline.last_error.is_none());
    }

    #[test]
    fn test_overrides() {
        let pipeline = ListPipeline::builder(ScriptedSource::default(), member_identity)
            .columns(member_columns())
            .initial_sort(SortDescriptor::descending("points"))
            .rows_per_page(0)
            .enable_pagination(false)
            .selection_mode(SelectionMode::Single)
            .token(Some(AuthToken::new("jwt")))
            .build();

        assert_eq!(pipeline.sort_descriptor.column, ColumnKey::from("points"));
        assert_eq!(pipeline.sort_descriptor.direction, SortDirection::Descending);
        assert_eq!(pipeline.page_state.rows_per_page, 1);
        assert!(!pipeline.config.enable_pagination);
        assert_eq!(pipeline.selection.mode(), SelectionMode::Single);
        assert_eq!(pipeline.token, Some(AuthToken::new("jwt")));
    }

    #[test]
    fn test_no_columns_sorts_by_nothing() {
        let pipeline =
            ListPipeline::builder(ScriptedSource::default(), member_identity).build();
        assert_eq!(pipeline.sort_descriptor, SortDescriptor::default());
    }
}
