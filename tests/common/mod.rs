//! Shared fixtures for sortgrid integration tests.

#![allow(dead_code, unused_imports)]

use sortgrid::{CellValue, ColumnId, Row, RowAccess, SortCriteria, SortCriterion};

/// Build array-shaped rows from optional integers; `None` is a missing cell.
pub fn rows(data: &[&[Option<i64>]]) -> Vec<Row> {
    data.iter()
        .map(|cells| Row::positional(cells.iter().copied()))
        .collect()
}

/// Build array-shaped rows from plain integers.
pub fn int_rows(data: &[&[i64]]) -> Vec<Row> {
    data.iter()
        .map(|cells| Row::positional(cells.iter().copied()))
        .collect()
}

/// The two-column grid used by the priority tests.
pub fn grid() -> Vec<Row> {
    int_rows(&[
        &[1, 3],
        &[2, 3],
        &[0, 0],
        &[0, 3],
        &[0, 1],
        &[2, 1],
        &[1, 0],
        &[1, 1],
        &[2, 0],
    ])
}

/// Single column with gaps at positions 1, 3 and 6.
pub fn sparse_column() -> Vec<Row> {
    rows(&[
        &[Some(1)],
        &[None],
        &[Some(3)],
        &[None],
        &[Some(4)],
        &[Some(2)],
        &[None],
    ])
}

/// Read one column back as `Option<f64>`, `None` for missing cells.
pub fn column(rows: &[Row], column: impl Into<ColumnId>) -> Vec<Option<f64>> {
    let column = column.into();
    rows.iter()
        .map(|row| row.cell(&column).as_f64())
        .collect()
}

pub fn criteria(items: Vec<SortCriterion>) -> SortCriteria {
    SortCriteria::try_from(items).expect("criteria fixture has duplicate columns")
}

pub fn columns_of(criteria: &SortCriteria) -> Vec<ColumnId> {
    criteria.iter().map(|c| c.column_id.clone()).collect()
}
