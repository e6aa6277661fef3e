mod common;

use common::{column, criteria, grid, int_rows, rows, sparse_column};
use sortgrid::{
    sort, sort_indices, CellValue, ColumnId, Row, RowAccess, SortCriteria, SortCriterion,
};

#[test]
fn sorts_single_column_descending() {
    let data = int_rows(&[&[1], &[3], &[4], &[2]]);
    let sorted = sort(&data, &SortCriteria::single(SortCriterion::descending(0)));

    assert_eq!(sorted.len(), data.len());
    assert_eq!(
        column(&sorted, 0),
        vec![Some(4.0), Some(3.0), Some(2.0), Some(1.0)]
    );
}

#[test]
fn missing_sorts_last_when_descending() {
    let sorted = sort(
        &sparse_column(),
        &SortCriteria::single(SortCriterion::descending(0)),
    );
    assert_eq!(
        column(&sorted, 0),
        vec![Some(4.0), Some(3.0), Some(2.0), Some(1.0), None, None, None]
    );
}

#[test]
fn missing_sorts_last_when_ascending() {
    let sorted = sort(
        &sparse_column(),
        &SortCriteria::single(SortCriterion::ascending(0)),
    );
    assert_eq!(
        column(&sorted, 0),
        vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), None, None, None]
    );
}

#[test]
fn null_and_absent_cells_are_the_same_missing() {
    // Row 1 holds an explicit null, row 3 is too short to have column 1.
    let data: Vec<Row> = serde_json::from_str(r#"[[0, 2], [1, null], [2, 1], [3]]"#).unwrap();

    for c in [SortCriterion::ascending(1), SortCriterion::descending(1)] {
        let order = sort_indices(&data, &SortCriteria::single(c));
        assert_eq!(&order[2..], &[1, 3], "missing rows keep input order at the bottom");
    }
}

#[test]
fn respects_priority_descending_then_descending() {
    let sorted = sort(
        &grid(),
        &criteria(vec![SortCriterion::descending(0), SortCriterion::descending(1)]),
    );

    assert_eq!(sorted.len(), 9);
    assert_eq!(&sorted[..3], &int_rows(&[&[2, 3], &[2, 1], &[2, 0]])[..]);
}

#[test]
fn respects_priority_descending_then_ascending() {
    let sorted = sort(
        &grid(),
        &criteria(vec![SortCriterion::descending(1), SortCriterion::ascending(0)]),
    );

    assert_eq!(&sorted[..3], &int_rows(&[&[0, 3], &[1, 3], &[2, 3]])[..]);
}

#[test]
fn empty_criteria_returns_input_unchanged() {
    let data = grid();
    assert_eq!(sort(&data, &SortCriteria::new()), data);
}

#[test]
fn output_is_a_permutation_of_input() {
    let data = rows(&[
        &[Some(2), None],
        &[Some(2), Some(1)],
        &[None, Some(1)],
        &[Some(0), Some(0)],
        &[Some(2), None],
    ]);
    let order = sort_indices(
        &data,
        &criteria(vec![SortCriterion::descending(0), SortCriterion::ascending(1)]),
    );

    let mut seen = order.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..data.len()).collect::<Vec<_>>());
    assert_eq!(order, vec![1, 0, 4, 3, 2]);
}

#[test]
fn ties_keep_input_order() {
    let data = int_rows(&[&[1, 0], &[0, 1], &[1, 2], &[0, 3], &[1, 4]]);
    let sorted = sort(&data, &SortCriteria::single(SortCriterion::ascending(0)));
    assert_eq!(
        column(&sorted, 1),
        vec![Some(1.0), Some(3.0), Some(0.0), Some(2.0), Some(4.0)]
    );
}

#[test]
fn input_is_not_mutated() {
    let data = sparse_column();
    let before = data.clone();
    let _ = sort(&data, &SortCriteria::single(SortCriterion::descending(0)));
    assert_eq!(data, before);
}

#[test]
fn keyed_rows_sort_by_string_column() {
    let data = vec![
        Row::keyed([("name", CellValue::from("pear")), ("qty", CellValue::from(3))]),
        Row::keyed([("name", CellValue::from("apple"))]),
        Row::keyed([("name", CellValue::from("fig")), ("qty", CellValue::from(7))]),
    ];
    let sorted = sort(&data, &SortCriteria::single(SortCriterion::descending("qty")));

    let names: Vec<_> = sorted
        .iter()
        .map(|r| r.cell(&ColumnId::from("name")).clone())
        .collect();
    assert_eq!(
        names,
        vec![
            CellValue::from("fig"),
            CellValue::from("pear"),
            CellValue::from("apple")
        ]
    );
}

#[test]
fn mixed_types_do_not_fail() {
    let data: Vec<Row> =
        serde_json::from_str(r#"[["b"], [2], [true], [null], ["a"], [1], [[1, 2]]]"#).unwrap();
    let order = sort_indices(&data, &SortCriteria::single(SortCriterion::ascending(0)));

    assert_eq!(order, vec![2, 5, 1, 4, 0, 6, 3]);
}

#[test]
fn large_integers_keep_value_and_order() {
    let data: Vec<Row> = serde_json::from_str(
        "[[9007199254740993], [12345678901234567890], [1.5], [9007199254740992]]",
    )
    .unwrap();

    assert_eq!(
        serde_json::to_string(&sort(&data, &SortCriteria::new())).unwrap(),
        "[[9007199254740993],[12345678901234567890],[1.5],[9007199254740992]]"
    );

    let order = sort_indices(&data, &SortCriteria::single(SortCriterion::descending(0)));
    assert_eq!(order, vec![1, 0, 3, 2]);
}
