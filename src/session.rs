//! Sort state for one table over its lifetime.
//!
//! Holds the mode and the current criteria behind a lock so the header
//! handlers and the render path can share one session.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::criteria::{
    MultiSortReducer, SingleSortReducer, SortCriteria, SortIntent, SortMode, SortToggle,
};
use crate::data::{ColumnId, RowAccess};
use crate::mvi::Reducer;
use crate::sorting;

/// Shared, thread-safe sort state for a table.
///
/// Cloning is cheap and every clone sees the same criteria.
#[derive(Debug, Clone)]
pub struct SortSession {
    mode: SortMode,
    criteria: Arc<RwLock<SortCriteria>>,
}

impl SortSession {
    /// Start a session with no active criteria.
    pub fn new(mode: SortMode) -> Self {
        Self::with_criteria(mode, SortCriteria::new())
    }

    /// Start a session from previously persisted criteria.
    ///
    /// In single mode only the primary criterion is kept.
    pub fn with_criteria(mode: SortMode, criteria: SortCriteria) -> Self {
        let criteria = if mode == SortMode::Single && criteria.len() > 1 {
            tracing::warn!(
                dropped = criteria.len() - 1,
                "Single-mode session keeps only the primary sort column"
            );
            SortCriteria::single(criteria.as_slice()[0].clone())
        } else {
            criteria
        };
        Self {
            mode,
            criteria: Arc::new(RwLock::new(criteria)),
        }
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    /// Snapshot of the current criteria.
    pub fn criteria(&self) -> SortCriteria {
        self.criteria.read().clone()
    }

    /// Run `intent` through the mode's reducer and store the result.
    ///
    /// The write lock is held across the reduce, so concurrent clicks are
    /// applied one after another rather than lost.
    pub fn dispatch(&self, intent: SortIntent) -> SortCriteria {
        let mut guard = self.criteria.write();
        let current = std::mem::take(&mut *guard);
        let next = match self.mode {
            SortMode::Single => SingleSortReducer::reduce(current, intent),
            SortMode::Multi => MultiSortReducer::reduce(current, intent),
        };
        *guard = next.clone();
        next
    }

    pub fn toggle(&self, toggle: SortToggle) -> SortCriteria {
        self.dispatch(SortIntent::Toggle(toggle))
    }

    pub fn click_header(&self, column: impl Into<ColumnId>) -> SortCriteria {
        self.dispatch(SortIntent::Cycle {
            column_id: column.into(),
        })
    }

    pub fn clear(&self) -> SortCriteria {
        self.dispatch(SortIntent::Clear)
    }

    /// Order `data` by the current criteria.
    pub fn sort<R>(&self, data: &[R]) -> Vec<R>
    where
        R: RowAccess + Clone,
    {
        sorting::sort(data, &self.criteria.read())
    }

    pub fn sort_indices<R>(&self, data: &[R]) -> Vec<usize>
    where
        R: RowAccess,
    {
        sorting::sort_indices(data, &self.criteria.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::SortCriterion;

    #[test]
    fn single_mode_trims_persisted_criteria() {
        let persisted = SortCriteria::try_from(vec![
            SortCriterion::ascending(0),
            SortCriterion::descending(1),
        ])
        .unwrap();
        let session = SortSession::with_criteria(SortMode::Single, persisted);
        assert_eq!(
            session.criteria(),
            SortCriteria::single(SortCriterion::ascending(0))
        );
    }

    #[test]
    fn clones_share_state() {
        let session = SortSession::new(SortMode::Multi);
        let other = session.clone();
        other.click_header(3usize);
        assert_eq!(
            session.criteria(),
            SortCriteria::single(SortCriterion::ascending(3))
        );
    }
}
