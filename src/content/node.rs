//! Borrowed views over selection and condition node wrappers.

use super::access::{get_list, get_map, get_string};
use super::keys;
use super::value::ContentMap;
use crate::error::ShapeError;

/// One `{keyName, operator, operand}` entry of a condition node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionEntry<'a> {
    pub key_name: Option<&'a str>,
    /// Carried for diagnostics only; matching is always equality.
    pub operator: Option<&'a str>,
    pub operand: Option<&'a str>,
}

impl<'a> ConditionEntry<'a> {
    pub fn from_map(map: &'a ContentMap) -> Result<Self, ShapeError> {
        Ok(Self {
            key_name: get_string(map, keys::KEY_NAME)?,
            operator: get_string(map, keys::OPERATOR)?,
            operand: get_string(map, keys::OPERAND)?,
        })
    }
}

/// A named bundle of condition entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionNode<'a> {
    pub condition_id: Option<&'a str>,
    pub conditions: Vec<ConditionEntry<'a>>,
}

impl<'a> ConditionNode<'a> {
    /// Read a `{ "node": { ... } }` wrapper.
    pub fn from_wrapper(wrapper: &'a ContentMap, position: usize) -> Result<Self, ShapeError> {
        let node = unwrap_node(wrapper, keys::CONDITION_NODES, position)?;
        let conditions = get_list(node, keys::CONDITIONS)?
            .unwrap_or_default()
            .into_iter()
            .map(ConditionEntry::from_map)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            condition_id: get_string(node, keys::CONDITION_ID)?,
            conditions,
        })
    }
}

/// A candidate output record plus its optional activating condition id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNode<'a> {
    pub condition_id: Option<&'a str>,
    pub fields: &'a ContentMap,
}

impl<'a> SelectionNode<'a> {
    /// Read a `{ "node": { ... } }` wrapper.
    pub fn from_wrapper(wrapper: &'a ContentMap, position: usize) -> Result<Self, ShapeError> {
        let node = unwrap_node(wrapper, keys::SELECTION_NODES, position)?;
        Ok(Self {
            condition_id: get_string(node, keys::CONDITION_ID)?,
            fields: node,
        })
    }

    /// Unconditional nodes carry no (or an empty) condition id.
    pub fn is_unconditional(&self) -> bool {
        self.condition_id.map_or(true, str::is_empty)
    }

    /// String value of `attribute`, if the node carries one.
    pub fn attribute(&self, attribute: &str) -> Result<Option<&'a str>, ShapeError> {
        get_string(self.fields, attribute)
    }
}

fn unwrap_node<'a>(
    wrapper: &'a ContentMap,
    section: &str,
    position: usize,
) -> Result<&'a ContentMap, ShapeError> {
    get_map(wrapper, keys::NODE)?.ok_or_else(|| ShapeError {
        key: format!("{}[{}].{}", section, position, keys::NODE),
        expected: "map",
        found: "nothing",
    })
}
