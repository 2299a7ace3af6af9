// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering, sync::Arc};

use crate::{CellValue, Column, SortDescriptor, SortDirection, find_column};

/// Replaces the whole sort stage, eg: to order by a computed or nested value that no
/// column exposes. It reorders the rows in place.
pub type CustomSortFn<T> = Arc<dyn Fn(&mut [&T], &SortDescriptor) + Send + Sync>;

/// Runs the sort stage: the custom sort if one is given, otherwise [`default_sort`].
pub fn sort_rows<T>(
    rows: &mut Vec<&T>,
    columns: &[Column<T>],
    descriptor: &SortDescriptor,
    custom: Option<&CustomSortFn<T>>,
) {
    match custom {
        Some(custom_sort) => custom_sort(rows.as_mut_slice(), descriptor),
        None => default_sort(rows, columns, descriptor),
    }
}

/// Stable sort by the descriptor's column, using [`compare_cells`].
///
/// If the descriptor names a column that doesn't exist, every operand is
/// [`CellValue::Empty`] and the order is left as is.
pub fn default_sort<T>(
    rows: &mut Vec<&T>,
    columns: &[Column<T>],
    descriptor: &SortDescriptor,
) {
    let Some(column) = find_column(columns, &descriptor.column) else {
        return;
    };

    // Read each cell once, then sort the (cell, row) pairs. `sort_by` is stable.
    let mut keyed: Vec<(CellValue, &T)> =
        rows.iter().map(|row| (column.cell(row), *row)).collect();
    keyed.sort_by(|(lhs, _), (rhs, _)| compare_cells(lhs, rhs, descriptor.direction));

    rows.clear();
    rows.extend(keyed.into_iter().map(|(_, row)| row));
}

/// Empty cells go after every non-empty cell in both directions. Everything else is
/// ordered by [`CellValue::compare_present`], reversed for
/// [`SortDirection::Descending`].
#[must_use]
pub fn compare_cells(lhs: &CellValue, rhs: &CellValue, direction: SortDirection) -> Ordering {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let it = lhs.compare_present(rhs);
            match direction {
                SortDirection::Ascending => it,
                SortDirection::Descending => it.reverse(),
            }
        }
    }
}
