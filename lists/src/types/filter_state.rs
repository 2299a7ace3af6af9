// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeSet,
          fmt::{Debug, Formatter},
          sync::Arc};

/// Which values of the status facet are allowed through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetSelection {
    /// No restriction.
    #[default]
    All,
    /// Only rows whose status is in this set.
    Only(BTreeSet<String>),
}

impl FacetSelection {
    pub fn only(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Only(values.into_iter().map(Into::into).collect())
    }
}

/// Free text query plus the status facet. The query is matched case insensitively as a
/// substring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub facet: FacetSelection,
}

impl FilterState {
    #[must_use]
    pub fn has_query(&self) -> bool { !self.query.is_empty() }
}

/// Derives a row's status, eg: a `blocked: bool` field becomes `"blocked"` or
/// `"active"`.
pub type StatusFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// A categorical filter dimension, distinct from free text search.
pub struct StatusFacet<T> {
    status: StatusFn<T>,
    known_values: BTreeSet<String>,
}

impl<T> StatusFacet<T> {
    pub fn new(
        status: impl Fn(&T) -> String + Send + Sync + 'static,
        known_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            status: Arc::new(status),
            known_values: known_values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn status_of(&self, row: &T) -> String { (self.status)(row) }

    #[must_use]
    pub fn known_values(&self) -> &BTreeSet<String> { &self.known_values }

    /// Selecting every known value is the same as selecting [`FacetSelection::All`], so
    /// the UI doesn't need an explicit "select all" sentinel.
    #[must_use]
    pub fn is_noop(&self, selection: &FacetSelection) -> bool {
        match selection {
            FacetSelection::All => true,
            FacetSelection::Only(values) => values == &self.known_values,
        }
    }

    pub fn admits(&self, selection: &FacetSelection, row: &T) -> bool {
        match selection {
            FacetSelection::All => true,
            FacetSelection::Only(values) => values.contains(&self.status_of(row)),
        }
    }
}

impl<T> Clone for StatusFacet<T> {
    fn clone(&self) -> Self {
        Self {
            status: Arc::clone(&self.status),
            known_values: self.known_values.clone(),
        }
    }
}

impl<T> Debug for StatusFacet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusFacet")
            .field("known_values", &self.known_values)
            .finish_non_exhaustive()
    }
}
