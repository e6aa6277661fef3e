use super::intent::SortIntent;
use super::mode::SortMode;
use super::types::SortCriteria;
use crate::mvi::Reducer;

/// Reducer for tables that sort by one column at a time.
pub struct SingleSortReducer;

impl Reducer for SingleSortReducer {
    type State = SortCriteria;
    type Intent = SortIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        SortMode::Single.reduce(&state, intent)
    }
}

/// Reducer for tables that sort by several columns.
pub struct MultiSortReducer;

impl Reducer for MultiSortReducer {
    type State = SortCriteria;
    type Intent = SortIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        SortMode::Multi.reduce(&state, intent)
    }
}
