//! Selection filtering and attribute projection.

use crate::content::SelectionNode;
use crate::error::ShapeError;
use crate::types::{AttributeSet, ResultRecord};
use tracing::trace;

/// Keep unconditional nodes and nodes whose id is satisfied, projecting the
/// requested attributes of each. Absent attributes map to `None`.
pub fn filter_and_project(
    selection_nodes: &[SelectionNode<'_>],
    attributes: &AttributeSet,
    satisfied_ids: &[String],
) -> Result<Vec<ResultRecord>, ShapeError> {
    let mut records = Vec::new();

    for node in selection_nodes {
        if !is_selectable(node, satisfied_ids) {
            continue;
        }
        records.push(project(node, attributes)?);
    }

    trace!(
        selected = records.len(),
        total = selection_nodes.len(),
        "Selection filtered"
    );
    Ok(records)
}

/// Unconditional, or tagged with a satisfied condition id.
pub fn is_selectable(node: &SelectionNode<'_>, satisfied_ids: &[String]) -> bool {
    match node.condition_id {
        None | Some("") => true,
        Some(id) => satisfied_ids.iter().any(|satisfied| satisfied == id),
    }
}

fn project(node: &SelectionNode<'_>, attributes: &AttributeSet) -> Result<ResultRecord, ShapeError> {
    attributes
        .iter()
        .map(|attribute| {
            let value = node.attribute(attribute)?.map(str::to_string);
            Ok::<_, ShapeError>((attribute.clone(), value))
        })
        .collect()
}
