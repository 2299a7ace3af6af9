// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::ColumnKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// The single active sort: which column, which way. There is no multi column sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortDescriptor {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn ascending(column: impl Into<ColumnKey>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<ColumnKey>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// What a click on a column header does: the active column flips direction, any
    /// other column becomes active in ascending order.
    #[must_use]
    pub fn toggled(&self, column: &ColumnKey) -> Self {
        if &self.column == column {
            Self {
                column: column.clone(),
                direction: self.direction.flip(),
            }
        } else {
            Self::ascending(column.clone())
        }
    }
}
