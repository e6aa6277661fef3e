use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Names a column: a position in array-shaped rows or a key in
/// record-shaped rows. Serialized as a bare JSON number or string.
///
/// A key written in canonical decimal form (`"0"`, `"12"`, not `"007"`)
/// names the same column as the matching index, both for row lookup and
/// for equality, hashing and ordering. `Key("0") == Index(0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnId {
    Index(usize),
    Key(String),
}

/// The column a [`ColumnId`] actually refers to.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Canonical<'a> {
    Index(usize),
    Key(&'a str),
}

/// Index named by `key` if it is a canonical decimal.
fn decimal_index(key: &str) -> Option<usize> {
    let index = key.parse::<usize>().ok()?;
    (index.to_string() == key).then_some(index)
}

impl ColumnId {
    /// Positional index this id addresses, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            ColumnId::Index(i) => Some(*i),
            ColumnId::Key(k) => decimal_index(k),
        }
    }

    fn canonical(&self) -> Canonical<'_> {
        match self {
            ColumnId::Index(i) => Canonical::Index(*i),
            ColumnId::Key(k) => match decimal_index(k) {
                Some(i) => Canonical::Index(i),
                None => Canonical::Key(k),
            },
        }
    }
}

impl PartialEq for ColumnId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ColumnId {}

impl Hash for ColumnId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for ColumnId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColumnId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnId::Index(i) => write!(f, "{}", i),
            ColumnId::Key(k) => write!(f, "{}", k),
        }
    }
}

/// Canonical decimal strings become [`ColumnId::Index`], anything else a key.
impl FromStr for ColumnId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match decimal_index(s) {
            Some(index) => ColumnId::Index(index),
            None => ColumnId::Key(s.to_string()),
        })
    }
}

impl From<usize> for ColumnId {
    fn from(index: usize) -> Self {
        ColumnId::Index(index)
    }
}

impl From<&str> for ColumnId {
    fn from(key: &str) -> Self {
        ColumnId::Key(key.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(key: String) -> Self {
        ColumnId::Key(key)
    }
}
