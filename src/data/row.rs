use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::column::ColumnId;
use super::value::CellValue;

static MISSING: CellValue = CellValue::Missing;

/// Read access to the cells of one row.
///
/// Lookups never fail: a column the row does not have reads as
/// [`CellValue::Missing`], so ragged rows sort like rows holding `null`.
pub trait RowAccess {
    fn cell(&self, column: &ColumnId) -> &CellValue;
}

/// One dataset row, either array-shaped or record-shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Row {
    Positional(Vec<CellValue>),
    Keyed(BTreeMap<String, CellValue>),
}

impl Row {
    pub fn positional<I, T>(cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        Row::Positional(cells.into_iter().map(Into::into).collect())
    }

    pub fn keyed<I, K, T>(cells: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<CellValue>,
    {
        Row::Keyed(
            cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl RowAccess for Row {
    fn cell(&self, column: &ColumnId) -> &CellValue {
        match self {
            Row::Positional(cells) => cells.as_slice().cell(column),
            Row::Keyed(cells) => cells.cell(column),
        }
    }
}

impl RowAccess for [CellValue] {
    fn cell(&self, column: &ColumnId) -> &CellValue {
        column
            .index()
            .and_then(|i| self.get(i))
            .unwrap_or(&MISSING)
    }
}

impl RowAccess for Vec<CellValue> {
    fn cell(&self, column: &ColumnId) -> &CellValue {
        self.as_slice().cell(column)
    }
}

impl RowAccess for BTreeMap<String, CellValue> {
    fn cell(&self, column: &ColumnId) -> &CellValue {
        let found = match column {
            ColumnId::Key(k) => self.get(k),
            ColumnId::Index(i) => self.get(&i.to_string()),
        };
        found.unwrap_or(&MISSING)
    }
}

impl From<Vec<CellValue>> for Row {
    fn from(cells: Vec<CellValue>) -> Self {
        Row::Positional(cells)
    }
}
