use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CriteriaError;
use super::intent::SortIntent;
use super::types::{SortCriteria, SortToggle};
use super::{multi, single};
use crate::data::ColumnId;

/// Which reducer a table uses for header toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Single,
    Multi,
}

impl SortMode {
    pub fn update_settings(self, current: &SortCriteria, toggled: SortToggle) -> SortCriteria {
        match self {
            SortMode::Single => single::update_settings(current, toggled),
            SortMode::Multi => multi::update_settings(current, toggled),
        }
    }

    pub fn reduce(self, current: &SortCriteria, intent: SortIntent) -> SortCriteria {
        match intent {
            SortIntent::Toggle(toggled) => self.update_settings(current, toggled),
            SortIntent::Cycle { column_id } => header_click(self, current, column_id),
            SortIntent::Clear => SortCriteria::new(),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Single => write!(f, "single"),
            SortMode::Multi => write!(f, "multi"),
        }
    }
}

impl FromStr for SortMode {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(SortMode::Single),
            "multi" => Ok(SortMode::Multi),
            _ => Err(CriteriaError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Advance `column` one step through none → asc → desc → none and apply
/// the result with `mode`'s reducer.
pub fn header_click(
    mode: SortMode,
    current: &SortCriteria,
    column: impl Into<ColumnId>,
) -> SortCriteria {
    let column_id = column.into();
    let direction = current.direction_of(&column_id).next();
    mode.update_settings(current, SortToggle::new(column_id, direction))
}
