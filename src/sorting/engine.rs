use std::cmp::Ordering;

use crate::criteria::{SortCriteria, SortDirection};
use crate::data::{CellValue, RowAccess};

/// Return a copy of `data` ordered by `criteria`, most significant first.
///
/// The sort is stable and the input is never modified. Empty criteria give
/// back the rows in their original order.
pub fn sort<R>(data: &[R], criteria: &SortCriteria) -> Vec<R>
where
    R: RowAccess + Clone,
{
    sort_indices(data, criteria)
        .into_iter()
        .map(|i| data[i].clone())
        .collect()
}

/// Same ordering as [`sort`], as a permutation: `result[view_pos]` is the
/// index of that row in `data`.
pub fn sort_indices<R>(data: &[R], criteria: &SortCriteria) -> Vec<usize>
where
    R: RowAccess,
{
    let mut order: Vec<usize> = (0..data.len()).collect();
    if criteria.is_empty() {
        return order;
    }

    tracing::debug!(
        rows = data.len(),
        criteria = criteria.len(),
        "Sorting rows"
    );

    // `sort_by` is stable: rows equal on every criterion keep input order.
    order.sort_by(|&a, &b| compare_rows(&data[a], &data[b], criteria));
    order
}

/// Compare two rows criterion by criterion; the first non-equal result wins.
pub fn compare_rows<R>(a: &R, b: &R, criteria: &SortCriteria) -> Ordering
where
    R: RowAccess + ?Sized,
{
    for criterion in criteria {
        let ordering = compare_cells(
            a.cell(&criterion.column_id),
            b.cell(&criterion.column_id),
            criterion.direction,
        );
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Compare two cells under one direction.
///
/// Missing cells sort after present ones in both directions. Only the
/// comparison between two present values is reversed for descending.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(a.natural_cmp(b)),
    }
}
