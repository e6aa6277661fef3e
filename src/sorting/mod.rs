//! Stable multi-key row ordering.

mod engine;

pub use engine::{compare_cells, compare_rows, sort, sort_indices};
