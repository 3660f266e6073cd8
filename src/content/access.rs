//! Typed access into decoded content maps.
//!
//! Every accessor distinguishes an absent key (`Ok(None)`) from a key that is
//! present with the wrong shape (`Err(ShapeError)`). A `null` entry counts as
//! absent. Callers decide whether absence is acceptable.

use super::value::{ContentMap, ContentValue};
use crate::error::ShapeError;

/// List of nested maps stored under `key`.
pub fn get_list<'a>(map: &'a ContentMap, key: &str) -> Result<Option<Vec<&'a ContentMap>>, ShapeError> {
    let Some(value) = lookup(map, key) else {
        return Ok(None);
    };
    let items = value.as_list().ok_or_else(|| shape_error(key, "list", value))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_map()
                .ok_or_else(|| shape_error(&format!("{}[{}]", key, index), "map", item))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Nested map stored under `key`.
pub fn get_map<'a>(map: &'a ContentMap, key: &str) -> Result<Option<&'a ContentMap>, ShapeError> {
    match lookup(map, key) {
        None => Ok(None),
        Some(value) => value
            .as_map()
            .map(Some)
            .ok_or_else(|| shape_error(key, "map", value)),
    }
}

/// String stored under `key`.
pub fn get_string<'a>(map: &'a ContentMap, key: &str) -> Result<Option<&'a str>, ShapeError> {
    match lookup(map, key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| shape_error(key, "string", value)),
    }
}

fn lookup<'a>(map: &'a ContentMap, key: &str) -> Option<&'a ContentValue> {
    map.get(key).filter(|value| !value.is_null())
}

fn shape_error(key: &str, expected: &'static str, found: &ContentValue) -> ShapeError {
    ShapeError {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}
