// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display, Formatter},
          sync::Arc};

use crate::CellValue;

/// Unique, stable identifier of a column. Sort descriptors and visible column sets
/// refer to columns by key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColumnKey(pub String);

impl ColumnKey {
    pub fn new(key: impl Into<String>) -> Self { Self(key.into()) }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for ColumnKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl From<&str> for ColumnKey {
    fn from(key: &str) -> Self { Self::new(key) }
}

impl From<String> for ColumnKey {
    fn from(key: String) -> Self { Self(key) }
}

/// Reads a column's value out of a row. This replaces dynamic field lookup: a column
/// can point at a flat field, a nested field, or something computed.
pub type ColumnAccessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Static column metadata supplied by the caller. It is never derived from the data.
pub struct Column<T> {
    pub key: ColumnKey,
    pub label: String,
    pub sortable: bool,
    accessor: ColumnAccessor<T>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<ColumnKey>,
        label: impl Into<String>,
        sortable: bool,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable,
            accessor: Arc::new(accessor),
        }
    }

    /// Value of this column for `row`.
    pub fn cell(&self, row: &T) -> CellValue { (self.accessor)(row) }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> Debug for Column<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Looks up a column by key.
pub fn find_column<'a, T>(columns: &'a [Column<T>], key: &ColumnKey) -> Option<&'a Column<T>> {
    columns.iter().find(|column| &column.key == key)
}
