use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CriteriaError;

/// Direction of a stored sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<ToggleDirection>()?.as_sort() {
            Some(direction) => Ok(direction),
            None => Err(CriteriaError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// Direction requested by a header toggle.
///
/// `None` means "stop sorting by this column". It is accepted by the
/// reducers and never stored in [`super::SortCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToggleDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl ToggleDirection {
    /// Next direction in the header-click cycle: none → asc → desc → none.
    pub fn next(self) -> Self {
        match self {
            ToggleDirection::None => ToggleDirection::Ascending,
            ToggleDirection::Ascending => ToggleDirection::Descending,
            ToggleDirection::Descending => ToggleDirection::None,
        }
    }

    pub fn as_sort(self) -> Option<SortDirection> {
        match self {
            ToggleDirection::Ascending => Some(SortDirection::Ascending),
            ToggleDirection::Descending => Some(SortDirection::Descending),
            ToggleDirection::None => None,
        }
    }
}

impl From<SortDirection> for ToggleDirection {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => ToggleDirection::Ascending,
            SortDirection::Descending => ToggleDirection::Descending,
        }
    }
}

impl From<Option<SortDirection>> for ToggleDirection {
    fn from(direction: Option<SortDirection>) -> Self {
        direction.map_or(ToggleDirection::None, Into::into)
    }
}

impl FromStr for ToggleDirection {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(ToggleDirection::Ascending),
            "desc" | "descending" => Ok(ToggleDirection::Descending),
            "none" | "off" => Ok(ToggleDirection::None),
            _ => Err(CriteriaError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}
