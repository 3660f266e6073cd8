//! Content Documents
//!
//! Decoded form of a content document plus typed access to its sections.
//! A document carries `selectionNodes` (mandatory), `conditionNodes`
//! (optional) and `meta.resultType` (optional).

pub mod access;
pub mod keys;
pub mod node;
pub mod value;

pub use node::{ConditionEntry, ConditionNode, SelectionNode};
pub use value::{ContentMap, ContentValue};

use crate::error::{LoadError, ShapeError};
use std::io::Read;
use std::path::Path;

/// A decoded content document. Never mutated after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContent {
    root: ContentMap,
}

impl RawContent {
    pub fn new(root: ContentMap) -> Self {
        Self { root }
    }

    /// Decode a JSON document held in memory.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let value = serde_json::from_str(json).map_err(|source| LoadError::ContentParsing {
            origin: None,
            source,
        })?;
        Self::from_json(value, None)
    }

    /// Decode a JSON document from a reader (UTF-8).
    pub fn from_reader<R: Read>(reader: R, origin: Option<&Path>) -> Result<Self, LoadError> {
        let value = serde_json::from_reader(reader).map_err(|source| {
            if source.is_io() {
                LoadError::Io(source.into())
            } else {
                LoadError::ContentParsing {
                    origin: origin.map(Path::to_path_buf),
                    source,
                }
            }
        })?;
        Self::from_json(value, origin)
    }

    /// Wrap an already-decoded `serde_json` value; the root must be an object.
    pub fn from_json(value: serde_json::Value, origin: Option<&Path>) -> Result<Self, LoadError> {
        match value {
            serde_json::Value::Object(object) => Ok(Self::new(value::map_from_json(object))),
            _ => Err(LoadError::NotAnObject {
                origin: origin.map(Path::to_path_buf),
            }),
        }
    }

    pub fn root(&self) -> &ContentMap {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Selection node wrappers in declaration order; empty when absent.
    pub fn selection_nodes(&self) -> Result<Vec<SelectionNode<'_>>, ShapeError> {
        access::get_list(&self.root, keys::SELECTION_NODES)?
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(position, wrapper)| SelectionNode::from_wrapper(wrapper, position))
            .collect()
    }

    /// Condition node wrappers in declaration order; empty when absent.
    pub fn condition_nodes(&self) -> Result<Vec<ConditionNode<'_>>, ShapeError> {
        access::get_list(&self.root, keys::CONDITION_NODES)?
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(position, wrapper)| ConditionNode::from_wrapper(wrapper, position))
            .collect()
    }

    /// `meta.resultType`, if declared.
    pub fn result_type(&self) -> Result<Option<&str>, ShapeError> {
        match access::get_map(&self.root, keys::META)? {
            Some(meta) => access::get_string(meta, keys::RESULT_TYPE),
            None => Ok(None),
        }
    }
}
