use super::types::SortToggle;
use crate::data::ColumnId;
use crate::mvi::Intent;

/// Header interactions that change the active sort criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortIntent {
    /// Set a column to an explicit direction (`None` removes it).
    Toggle(SortToggle),
    /// Plain header click: advance the column one step through
    /// none → asc → desc → none.
    Cycle { column_id: ColumnId },
    /// Drop every criterion.
    Clear,
}

impl Intent for SortIntent {}
