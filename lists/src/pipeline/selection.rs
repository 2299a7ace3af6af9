// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Selecting a row replaces the previous selection.
    Single,
    #[default]
    Multiple,
}

/// Selected rows, tracked by [`ItemId`] rather than by position so a selection
/// survives re-sorting, filtering and paging. Ids are kept in the order they were
/// selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    mode: SelectionMode,
    ids: Vec<ItemId>,
}

impl Selection {
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ids: vec![],
        }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode { self.mode }

    #[must_use]
    pub fn ids(&self) -> &[ItemId] { &self.ids }

    #[must_use]
    pub fn len(&self) -> usize { self.ids.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool { self.ids.contains(id) }

    pub fn select(&mut self, id: ItemId) {
        if self.contains(&id) {
            return;
        }
        if self.mode == SelectionMode::Single {
            self.ids.clear();
        }
        self.ids.push(id);
    }

    pub fn deselect(&mut self, id: &ItemId) { self.ids.retain(|it| it != id); }

    /// Returns `true` if the row is selected after the toggle.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.contains(&id) {
            self.deselect(&id);
            false
        } else {
            self.select(id);
            true
        }
    }

    /// In [`SelectionMode::Single`] only the last id ends up selected.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        for id in ids {
            self.select(id);
        }
    }

    pub fn clear(&mut self) { self.ids.clear(); }

    pub fn retain(&mut self, keep: impl FnMut(&ItemId) -> bool) { self.ids.retain(keep); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_multiple_keeps_order_and_dedupes() {
        let mut it = Selection::new(SelectionMode::Multiple);
        it.select(ItemId::Numeric(3));
        it.select(ItemId::Numeric(1));
        it.select(ItemId::Numeric(3));
        assert_eq!(it.ids(), &[ItemId::Numeric(3), ItemId::Numeric(1)]);
    }

    #[test]
    fn test_single_replaces() {
        let mut it = Selection::new(SelectionMode::Single);
        it.select_all([ItemId::Numeric(1), ItemId::Numeric(2)]);
        assert_eq!(it.ids(), &[ItemId::Numeric(2)]);
    }

    #[test]
    fn test_toggle() {
        let mut it = Selection::default();
        assert!(it.toggle(ItemId::Numeric(1)));
        assert!(it.contains(&ItemId::Numeric(1)));
        assert!(!it.toggle(ItemId::Numeric(1)));
        assert!(it.is_empty());
    }
}
