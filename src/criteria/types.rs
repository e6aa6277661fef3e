use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::direction::{SortDirection, ToggleDirection};
use super::error::CriteriaError;
use crate::data::ColumnId;
use crate::mvi::UiState;

/// One stored sort rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortCriterion {
    pub column_id: ColumnId,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(column_id: impl Into<ColumnId>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    pub fn ascending(column_id: impl Into<ColumnId>) -> Self {
        Self::new(column_id, SortDirection::Ascending)
    }

    pub fn descending(column_id: impl Into<ColumnId>) -> Self {
        Self::new(column_id, SortDirection::Descending)
    }
}

/// Parses `COLUMN:DIRECTION`, e.g. `0:desc` or `price:asc`.
impl FromStr for SortCriterion {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((column, direction)) = s.rsplit_once(':') else {
            return Err(CriteriaError::InvalidSpec {
                spec: s.to_string(),
            });
        };
        if column.is_empty() {
            return Err(CriteriaError::InvalidSpec {
                spec: s.to_string(),
            });
        }
        let column_id = match column.parse::<ColumnId>() {
            Ok(id) => id,
            Err(never) => match never {},
        };
        Ok(Self {
            column_id,
            direction: direction.parse()?,
        })
    }
}

/// A header toggle: the column the user touched and the direction it should
/// now have.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortToggle {
    pub column_id: ColumnId,
    pub direction: ToggleDirection,
}

impl SortToggle {
    pub fn new(column_id: impl Into<ColumnId>, direction: ToggleDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    /// Toggle that removes `column_id` from the criteria.
    pub fn remove(column_id: impl Into<ColumnId>) -> Self {
        Self::new(column_id, ToggleDirection::None)
    }
}

impl From<SortCriterion> for SortToggle {
    fn from(criterion: SortCriterion) -> Self {
        Self {
            column_id: criterion.column_id,
            direction: criterion.direction.into(),
        }
    }
}

/// Ordered list of active sort rules, most significant first.
///
/// Column ids are unique. The list only changes through the single- and
/// multi-mode reducers; deserializing a list with a repeated column fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SortCriterion>", into = "Vec<SortCriterion>")]
pub struct SortCriteria(Vec<SortCriterion>);

impl UiState for SortCriteria {}

impl SortCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(criterion: SortCriterion) -> Self {
        Self(vec![criterion])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortCriterion> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SortCriterion] {
        &self.0
    }

    /// Position of `column` in the priority order.
    pub fn position(&self, column: &ColumnId) -> Option<usize> {
        self.0.iter().position(|c| &c.column_id == column)
    }

    pub fn get(&self, column: &ColumnId) -> Option<&SortCriterion> {
        self.0.iter().find(|c| &c.column_id == column)
    }

    /// Current direction of `column`, `None` when it is not a sort key.
    pub fn direction_of(&self, column: &ColumnId) -> ToggleDirection {
        self.get(column).map(|c| c.direction).into()
    }

    pub(crate) fn set_direction(&mut self, position: usize, direction: SortDirection) {
        if let Some(criterion) = self.0.get_mut(position) {
            criterion.direction = direction;
        }
    }

    /// Caller guarantees `criterion.column_id` is not already present.
    pub(crate) fn push_new(&mut self, criterion: SortCriterion) {
        debug_assert!(self.position(&criterion.column_id).is_none());
        self.0.push(criterion);
    }

    pub(crate) fn remove_at(&mut self, position: usize) -> SortCriterion {
        self.0.remove(position)
    }
}

impl TryFrom<Vec<SortCriterion>> for SortCriteria {
    type Error = CriteriaError;

    fn try_from(criteria: Vec<SortCriterion>) -> Result<Self, Self::Error> {
        for (i, criterion) in criteria.iter().enumerate() {
            if criteria[..i]
                .iter()
                .any(|earlier| earlier.column_id == criterion.column_id)
            {
                return Err(CriteriaError::DuplicateColumn {
                    column: criterion.column_id.clone(),
                });
            }
        }
        Ok(Self(criteria))
    }
}

impl From<SortCriteria> for Vec<SortCriterion> {
    fn from(criteria: SortCriteria) -> Self {
        criteria.0
    }
}

impl<'a> IntoIterator for &'a SortCriteria {
    type Item = &'a SortCriterion;
    type IntoIter = std::slice::Iter<'a, SortCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
