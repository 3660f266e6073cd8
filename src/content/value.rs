//! Decoded content values.
//!
//! Content documents only ever hold strings, lists and objects as far as the
//! engine is concerned. Numbers and booleans are kept as their JSON text.
//! `null` is kept as [`ContentValue::Null`]: a null map entry reads as an
//! absent key, a null list element is a shape error.

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Nested mapping of a decoded content object.
pub type ContentMap = BTreeMap<String, ContentValue>;

/// A decoded content value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValue {
    Null,
    String(String),
    List(Vec<ContentValue>),
    Map(ContentMap),
}

impl ContentValue {
    /// Convert a `serde_json` value.
    pub fn from_json(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => ContentValue::Null,
            JsonValue::Bool(b) => ContentValue::String(b.to_string()),
            JsonValue::Number(n) => ContentValue::String(n.to_string()),
            JsonValue::String(s) => ContentValue::String(s),
            JsonValue::Array(items) => {
                ContentValue::List(items.into_iter().map(ContentValue::from_json).collect())
            }
            JsonValue::Object(object) => ContentValue::Map(map_from_json(object)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ContentValue::Null)
    }

    /// Convert back into a `serde_json` value.
    pub fn to_json(&self) -> JsonValue {
        match self {
            ContentValue::Null => JsonValue::Null,
            ContentValue::String(s) => JsonValue::String(s.clone()),
            ContentValue::List(items) => {
                JsonValue::Array(items.iter().map(ContentValue::to_json).collect())
            }
            ContentValue::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// Shape name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentValue::Null => "null",
            ContentValue::String(_) => "string",
            ContentValue::List(_) => "list",
            ContentValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContentValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ContentValue]> {
        match self {
            ContentValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ContentMap> {
        match self {
            ContentValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

pub(crate) fn map_from_json(object: serde_json::Map<String, JsonValue>) -> ContentMap {
    object
        .into_iter()
        .map(|(key, value)| (key, ContentValue::from_json(value)))
        .collect()
}
