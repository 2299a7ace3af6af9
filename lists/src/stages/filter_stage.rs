// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{Column, FilterState, StatusFacet};

/// Total replacement for the filter stage. When configured it fully supersedes the
/// default query and facet logic; the two are never composed.
pub type CustomFilterFn<T> =
    Arc<dyn for<'a> Fn(&'a [T], &FilterState) -> Vec<&'a T> + Send + Sync>;

/// Runs the filter stage: the custom filter if one is given, otherwise
/// [`default_filter`].
pub fn filter_rows<'a, T>(
    rows: &'a [T],
    columns: &[Column<T>],
    facet: Option<&StatusFacet<T>>,
    filter: &FilterState,
    custom: Option<&CustomFilterFn<T>>,
) -> Vec<&'a T> {
    match custom {
        Some(custom_filter) => custom_filter(rows, filter),
        None => default_filter(rows, columns, facet, filter),
    }
}

/// A row passes when:
/// 1. the query is empty, or the lowercase search text of any column's cell contains
///    the lowercase query, and
/// 2. there is no facet, the facet selection is a no-op, or the row's status is in the
///    selection.
pub fn default_filter<'a, T: 'a>(
    rows: impl IntoIterator<Item = &'a T>,
    columns: &[Column<T>],
    facet: Option<&StatusFacet<T>>,
    filter: &FilterState,
) -> Vec<&'a T> {
    let needle = filter.query.to_lowercase();

    // Skip per row facet work when every known status is selected.
    let active_facet = facet.filter(|it| !it.is_noop(&filter.facet));

    rows.into_iter()
        .filter(|row| needle.is_empty() || matches_query(*row, columns, &needle))
        .filter(|row| active_facet.is_none_or(|it| it.admits(&filter.facet, row)))
        .collect()
}

/// `needle` must already be lowercase.
pub fn matches_query<T>(row: &T, columns: &[Column<T>], needle: &str) -> bool {
    columns
        .iter()
        .any(|column| column.cell(row).search_text().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FacetSelection,
                test_fixtures::{Member, ids, member_columns, members, status_facet}};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn query(it: &str) -> FilterState {
        FilterState {
            query: it.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let rows = members();
        let it = default_filter(&rows, &member_columns(), None, &query(""));
        assert_eq!(it.len(), rows.len());
    }

    #[test_case("zet", vec![1])]
    #[test_case("ZET", vec![1])]
    #[test_case("a", vec![1, 2, 3, 4])]
    #[test_case("chess", vec![2, 4])]
    #[test_case("1200", vec![3])]
    #[test_case("nothing-matches", vec![])]
    fn test_substring_across_all_columns(needle: &str, expected: Vec<u64>) {
        let rows = members();
        let it = default_filter(&rows, &member_columns(), None, &query(needle));
        assert_eq!(ids(&it), expected);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = members();
        let columns = member_columns();
        let filter = query("chess");
        let once = default_filter(&rows, &columns, None, &filter);
        let twice = default_filter(once.iter().copied(), &columns, None, &filter);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_facet_narrows_and_full_set_is_noop() {
        let rows = members();
        let columns = member_columns();
        let facet = status_facet();

        let blocked = FilterState {
            facet: FacetSelection::only(["blocked"]),
            ..Default::default()
        };
        let it = default_filter(&rows, &columns, Some(&facet), &blocked);
        assert_eq!(ids(&it), vec![3]);

        let everything = FilterState {
            facet: FacetSelection::only(["blocked", "active"]),
            ..Default::default()
        };
        let it = default_filter(&rows, &columns, Some(&facet), &everything);
        assert_eq!(it.len(), rows.len());
    }

    #[test]
    fn test_query_and_facet_combine() {
        let rows = members();
        let filter = FilterState {
            query: "chess".into(),
            facet: FacetSelection::only(["active"]),
        };
        let it = default_filter(&rows, &member_columns(), Some(&status_facet()), &filter);
        assert_eq!(ids(&it), vec![2, 4]);
    }

    #[test]
    fn test_custom_filter_supersedes_default() {
        let rows = members();
        let custom: CustomFilterFn<Member> = Arc::new(only_high_scorers);
        // The query would match nothing by default, but the custom filter ignores it.
        let it = filter_rows(
            &rows,
            &member_columns(),
            None,
            &query("nothing-matches"),
            Some(&custom),
        );
        assert_eq!(ids(&it), vec![3, 4]);
    }

    fn only_high_scorers<'a>(rows: &'a [Member], _filter: &FilterState) -> Vec<&'a Member> {
        rows.iter().filter(|it| it.points.unwrap_or(0) >= 500).collect()
    }

    #[test]
    fn test_source_is_not_mutated() {
        let rows = members();
        let before = rows.clone();
        let _unused = default_filter(&rows, &member_columns(), None, &query("zet"));
        assert_eq!(rows, before);
    }
}
