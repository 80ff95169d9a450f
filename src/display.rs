//! The tree handed to the renderer.

use std::fmt;

use bytes::Bytes;
use indexmap::IndexMap;

use crate::bencode::Value;
use crate::render::{render, RenderOptions};

/// A metainfo value prepared for display.
///
/// Mirrors [`Value`] with one extra variant, [`DisplayValue::Text`], holding
/// text produced by redaction (size summaries, hex hashes). Byte strings that
/// were not redacted stay [`DisplayValue::Bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// An integer, shown as is.
    Integer(i64),
    /// A byte string, shown as a `b"..."` literal.
    Bytes(Bytes),
    /// Text written in place of redacted data, shown as a quoted string.
    Text(String),
    /// A list of values.
    List(Vec<DisplayValue>),
    /// A dictionary with byte-string keys, in file order.
    Dict(IndexMap<Bytes, DisplayValue>),
}

impl DisplayValue {
    /// Returns the integer value if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DisplayValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the byte string if this is a byte string.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            DisplayValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the text if this is redaction text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DisplayValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list if this is a list.
    pub fn as_list(&self) -> Option<&Vec<DisplayValue>> {
        match self {
            DisplayValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the dictionary if this is a dictionary.
    pub fn as_dict(&self) -> Option<&IndexMap<Bytes, DisplayValue>> {
        match self {
            DisplayValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&DisplayValue> {
        self.as_dict()?.get(key)
    }
}

impl From<Value> for DisplayValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(i) => DisplayValue::Integer(i),
            Value::Bytes(b) => DisplayValue::Bytes(b),
            Value::List(l) => DisplayValue::List(l.into_iter().map(DisplayValue::from).collect()),
            Value::Dict(d) => DisplayValue::Dict(
                d.into_iter()
                    .map(|(k, v)| (k, DisplayValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for DisplayValue {
    fn from(value: &Value) -> Self {
        DisplayValue::from(value.clone())
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderOptions::default()))
    }
}
