//! Core type aliases shared by the evaluator, the binder and the CLI.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Attribute names to extract from every selected node.
pub type AttributeSet = BTreeSet<String>;

/// Caller's current situation: condition key name -> required value.
pub type ConditionMap = HashMap<String, String>;

/// One projected selection node: attribute name -> value, `None` when the
/// node does not carry the attribute.
pub type ResultRecord = BTreeMap<String, Option<String>>;

/// Build an [`AttributeSet`] from string-like names.
pub fn attribute_set<I, S>(names: I) -> AttributeSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// Build a [`ConditionMap`] from key/value pairs.
pub fn condition_map<I, K, V>(pairs: I) -> ConditionMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
