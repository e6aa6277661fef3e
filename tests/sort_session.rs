mod common;

use std::thread;

use common::{column, criteria, grid, sparse_column};
use sortgrid::{ColumnId, SortCriteria, SortCriterion, SortMode, SortSession, SortToggle, ToggleDirection};

#[test]
fn new_session_has_no_criteria_and_keeps_order() {
    let session = SortSession::new(SortMode::Multi);
    assert!(session.criteria().is_empty());
    assert_eq!(session.sort(&grid()), grid());
}

#[test]
fn toggles_flow_into_sort() {
    let session = SortSession::new(SortMode::Multi);
    session.toggle(SortToggle::new(0, ToggleDirection::Descending));
    session.toggle(SortToggle::new(1, ToggleDirection::Descending));

    let sorted = session.sort(&grid());
    assert_eq!(column(&sorted[..3], 1), vec![Some(3.0), Some(1.0), Some(0.0)]);
    assert_eq!(column(&sorted[..3], 0), vec![Some(2.0), Some(2.0), Some(2.0)]);
}

#[test]
fn single_mode_click_replaces_column() {
    let session = SortSession::new(SortMode::Single);
    session.click_header(0usize);
    let after = session.click_header(1usize);
    assert_eq!(after, SortCriteria::single(SortCriterion::ascending(1)));
}

#[test]
fn clicks_cycle_and_clear() {
    let session = SortSession::new(SortMode::Multi);
    session.click_header("qty");
    assert_eq!(
        session.criteria().direction_of(&ColumnId::from("qty")),
        ToggleDirection::Ascending
    );
    session.click_header("qty");
    assert_eq!(
        session.criteria().direction_of(&ColumnId::from("qty")),
        ToggleDirection::Descending
    );
    session.click_header("price");
    assert_eq!(session.clear(), SortCriteria::new());
}

#[test]
fn sort_indices_reflects_current_criteria() {
    let session = SortSession::with_criteria(
        SortMode::Multi,
        SortCriteria::single(SortCriterion::descending(0)),
    );
    assert_eq!(session.sort_indices(&sparse_column()), vec![4, 2, 5, 0, 1, 3, 6]);
}

#[test]
fn concurrent_toggles_are_all_applied() {
    let session = SortSession::new(SortMode::Multi);

    let handles: Vec<_> = (0..8usize)
        .map(|col| {
            let session = session.clone();
            thread::spawn(move || {
                session.toggle(SortToggle::new(col, ToggleDirection::Ascending));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut columns: Vec<_> = session.criteria().iter().map(|c| c.column_id.clone()).collect();
    columns.sort();
    assert_eq!(columns, (0..8usize).map(ColumnId::Index).collect::<Vec<_>>());
}

#[test]
fn multi_mode_keeps_persisted_criteria() {
    let persisted = criteria(vec![SortCriterion::ascending(1), SortCriterion::descending(0)]);
    let session = SortSession::with_criteria(SortMode::Multi, persisted.clone());
    assert_eq!(session.mode(), SortMode::Multi);
    assert_eq!(session.criteria(), persisted);
}

#[test]
fn replaying_recorded_clicks_rebuilds_criteria() {
    use sortgrid::criteria::{MultiSortReducer, SortIntent};
    use sortgrid::mvi::Reducer;

    let clicks = ["b", "a", "b", "c", "a", "a"].map(|c| SortIntent::Cycle {
        column_id: ColumnId::from(c),
    });
    let replayed = MultiSortReducer::reduce_all(SortCriteria::new(), clicks.clone());

    let session = SortSession::new(SortMode::Multi);
    for click in clicks {
        session.dispatch(click);
    }

    assert_eq!(replayed, session.criteria());
    assert_eq!(
        replayed,
        criteria(vec![SortCriterion::descending("b"), SortCriterion::ascending("c")])
    );
}
