use thiserror::Error;

use crate::data::ColumnId;

/// Errors raised when building or parsing sort criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("Column '{column}' appears more than once in sort criteria")]
    DuplicateColumn { column: ColumnId },

    #[error("Unknown sort direction '{value}' (expected asc, desc or none)")]
    InvalidDirection { value: String },

    #[error("Invalid sort criterion '{spec}' (expected COLUMN:DIRECTION)")]
    InvalidSpec { spec: String },

    #[error("Unknown sort mode '{value}' (expected single or multi)")]
    InvalidMode { value: String },
}
