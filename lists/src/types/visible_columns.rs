// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::BTreeSet;

use crate::{Column, ColumnKey, InlineVec};

/// Which columns the presentation renders. Independent of which columns exist in the
/// data, and of which columns the filter searches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VisibleColumns {
    #[default]
    All,
    Only(BTreeSet<ColumnKey>),
}

impl VisibleColumns {
    pub fn only(keys: impl IntoIterator<Item = impl Into<ColumnKey>>) -> Self {
        Self::Only(keys.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn is_visible(&self, key: &ColumnKey) -> bool {
        match self {
            VisibleColumns::All => true,
            VisibleColumns::Only(keys) => keys.contains(key),
        }
    }

    /// Shows or hides one column. Hiding a column while in [`VisibleColumns::All`]
    /// switches to an explicit set made of every other column.
    pub fn toggle<T>(&mut self, key: &ColumnKey, columns: &[Column<T>]) {
        let mut keys: BTreeSet<ColumnKey> = match self {
            VisibleColumns::All => columns.iter().map(|it| it.key.clone()).collect(),
            VisibleColumns::Only(keys) => keys.clone(),
        };
        if !keys.remove(key) {
            keys.insert(key.clone());
        }
        *self = VisibleColumns::Only(keys);
    }

    /// The visible subset of `columns`, in declaration order.
    pub fn select<'a, T>(&self, columns: &'a [Column<T>]) -> InlineVec<&'a Column<T>> {
        columns
            .iter()
            .filter(|column| self.is_visible(&column.key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::member_columns;
    use pretty_assertions::assert_eq;

    fn keys<T>(columns: &[&Column<T>]) -> Vec<String> {
        columns.iter().map(|it| it.key.to_string()).collect()
    }

    #[test]
    fn test_select_keeps_declaration_order() {
        let columns = member_columns();
        let visible = VisibleColumns::only(["status", "name"]);
        assert_eq!(keys(&visible.select(&columns)), vec!["name", "status"]);
    }

    #[test]
    fn test_all_selects_everything() {
        let columns = member_columns();
        assert_eq!(VisibleColumns::All.select(&columns).len(), columns.len());
    }

    #[test]
    fn test_toggle_from_all_hides_one() {
        let columns = member_columns();
        let mut visible = VisibleColumns::All;
        visible.toggle(&"points".into(), &columns);
        assert!(!visible.is_visible(&"points".into()));
        assert!(visible.is_visible(&"name".into()));

        visible.toggle(&"points".into(), &columns);
        assert!(visible.is_visible(&"points".into()));
    }
}
