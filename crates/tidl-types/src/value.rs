//! Constant literal values.

use serde::{Deserialize, Serialize};

/// A constant literal as written in the IDL.
///
/// The map form doubles as a struct literal, in which case every key is a
/// [`ConstValue::Str`] naming a field. Map and list entries keep the order
/// they were written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstValue {
    Integer(i64),
    Double(f64),
    Str(String),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
}

impl ConstValue {
    pub fn str(s: impl Into<String>) -> Self {
        ConstValue::Str(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = ConstValue>) -> Self {
        ConstValue::List(items.into_iter().collect())
    }

    pub fn map(entries: impl IntoIterator<Item = (ConstValue, ConstValue)>) -> Self {
        ConstValue::Map(entries.into_iter().collect())
    }

    /// Short name of the literal form, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConstValue::Integer(_) => "integer",
            ConstValue::Double(_) => "double",
            ConstValue::Str(_) => "string",
            ConstValue::List(_) => "list",
            ConstValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for ConstValue {
    fn from(value: i64) -> Self {
        ConstValue::Integer(value)
    }
}

impl From<f64> for ConstValue {
    fn from(value: f64) -> Self {
        ConstValue::Double(value)
    }
}

impl From<&str> for ConstValue {
    fn from(value: &str) -> Self {
        ConstValue::Str(value.to_string())
    }
}
