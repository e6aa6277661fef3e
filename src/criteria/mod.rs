//! Active sort criteria and the reducers that update them on header toggles.
//!
//! Two reducer variants exist, chosen by [`SortMode`]:
//! - [`single::update_settings`]: one column at a time
//! - [`multi::update_settings`]: several columns, prioritised by insertion

mod direction;
mod error;
mod intent;
mod mode;
pub mod multi;
mod reducer;
pub mod single;
mod types;

pub use direction::{SortDirection, ToggleDirection};
pub use error::CriteriaError;
pub use intent::SortIntent;
pub use mode::{header_click, SortMode};
pub use reducer::{MultiSortReducer, SingleSortReducer};
pub use types::{SortCriteria, SortCriterion, SortToggle};
