use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single, loosely typed table cell.
///
/// JSON `null`, an absent object key and an index past the end of a row all
/// read as [`CellValue::Missing`]. There is no separate "undefined".
///
/// JSON integers are kept as [`CellValue::Integer`] so values beyond 2^53
/// survive a sort unchanged; only numbers written with a fraction or
/// exponent become [`CellValue::Float`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum CellValue {
    #[default]
    Missing,
    Bool(bool),
    /// Any JSON integer: the full `i64` and `u64` ranges.
    Integer(i128),
    Float(f64),
    Text(String),
    /// Arrays and objects.
    Other(Value),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric value as `f64`, lossy for integers beyond 2^53.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Natural ordering between two present values.
    ///
    /// Integers and floats are compared exactly against each other; NaN
    /// sorts above every other number.
    ///
    /// Values of different kinds are NOT treated as equal: they are ordered
    /// by kind (bool < number < text < other). An "equal" fallback would make
    /// the comparison non-transitive, and `slice::sort_by` needs a total
    /// order. Two `Other` values are equal. Missing values are not handled
    /// here; see [`crate::sorting::compare_cells`].
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => cmp_floats(*a, *b),
            (Self::Integer(i), Self::Float(f)) => cmp_integer_float(*i, *f),
            (Self::Float(f), Self::Integer(i)) => cmp_integer_float(*i, *f).reverse(),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
            Self::Other(_) => 4,
        }
    }
}

/// Numeric order with `-0.0 == 0.0` and NaN above everything.
fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer with a float, without rounding the
/// integer to `f64`.
fn cmp_integer_float(i: i128, f: f64) -> Ordering {
    // 2^127; every float strictly inside (-2^127, 2^127) truncates exactly.
    let limit = i128::MAX as f64;
    if f.is_nan() || f >= limit {
        return Ordering::Less;
    }
    if f < -limit {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i128)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ordering => ordering,
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Integer(i128::from(u))
                } else {
                    match n.as_f64() {
                        Some(f) => Self::Float(f),
                        None => Self::Other(Value::Number(n)),
                    }
                }
            }
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl From<CellValue> for Value {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Missing => Value::Null,
            CellValue::Bool(b) => Value::Bool(b),
            CellValue::Integer(i) => {
                if let Ok(n) = i64::try_from(i) {
                    Value::from(n)
                } else if let Ok(n) = u64::try_from(i) {
                    Value::from(n)
                } else {
                    // Only reachable for integers built outside the JSON ranges.
                    Value::String(i.to_string())
                }
            }
            CellValue::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Text(s) => Value::String(s),
            CellValue::Other(v) => v,
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
