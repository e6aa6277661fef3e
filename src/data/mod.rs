//! Dataset model: cells, rows and column identifiers.

mod column;
mod row;
mod value;

pub use column::ColumnId;
pub use row::{Row, RowAccess};
pub use value::CellValue;
