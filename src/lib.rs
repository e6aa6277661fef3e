//! Row ordering for interactive tables.
//!
//! - [`sorting`]: stable multi-key sort with missing values always last
//! - [`criteria`]: the active sort criteria and the single/multi-mode
//!   reducers that update them when a header is toggled
//! - [`session`]: shared per-table sort state built on both

pub mod cli;
pub mod config;
pub mod criteria;
pub mod data;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod sorting;

pub use criteria::{
    SortCriteria, SortCriterion, SortDirection, SortMode, SortToggle, ToggleDirection,
};
pub use data::{CellValue, ColumnId, Row, RowAccess};
pub use session::SortSession;
pub use sorting::{sort, sort_indices};
