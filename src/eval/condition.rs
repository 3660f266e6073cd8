//! Condition matching: which condition ids does the caller's situation satisfy?

use crate::content::{ConditionEntry, ConditionNode};
use crate::types::ConditionMap;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// How declared condition entries relate to keys missing from the caller's map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Only keys the caller supplied are compared; a declared key the caller
    /// did not supply never disqualifies a node.
    #[default]
    Partial,
    /// Every declared key must be supplied and equal.
    Strict,
}

/// Condition ids whose entries are all consistent with `conditions`, in
/// declaration order. Duplicate ids are kept as declared.
pub fn compute_satisfied_ids(
    condition_nodes: &[ConditionNode<'_>],
    conditions: &ConditionMap,
    policy: MatchPolicy,
) -> Vec<String> {
    let mut satisfied = Vec::new();

    for (position, node) in condition_nodes.iter().enumerate() {
        let Some(condition_id) = node.condition_id.filter(|id| !id.is_empty()) else {
            warn!(position, "Condition node has no conditionId; skipping");
            continue;
        };

        if is_satisfied(&node.conditions, conditions, policy) {
            trace!(condition_id, "Condition satisfied");
            satisfied.push(condition_id.to_string());
        } else {
            trace!(condition_id, "Condition not satisfied");
        }
    }

    satisfied
}

/// True when no entry conflicts with the caller's map under `policy`.
pub fn is_satisfied(
    entries: &[ConditionEntry<'_>],
    conditions: &ConditionMap,
    policy: MatchPolicy,
) -> bool {
    entries.iter().all(|entry| {
        // An entry without a key name constrains nothing.
        let Some(key) = entry.key_name else {
            return true;
        };
        match (conditions.get(key), policy) {
            (Some(value), _) => entry.operand == Some(value.as_str()),
            (None, MatchPolicy::Partial) => true,
            (None, MatchPolicy::Strict) => false,
        }
    })
}
