//! CLI presentation: render result records and content summaries.

use crate::content::RawContent;
use crate::error::{ContentError, ShapeError};
use crate::types::ResultRecord;

const ABSENT: &str = "(absent)";

/// Records as a pretty JSON array; absent attributes render as `null`.
pub fn format_records_json(records: &[ResultRecord]) -> Result<String, ContentError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// One block per record, attributes in name order.
pub fn format_records_text(records: &[ResultRecord]) -> String {
    if records.is_empty() {
        return "No records selected".to_string();
    }

    let mut output = format!("Selected records: {}\n", records.len());
    for (index, record) in records.iter().enumerate() {
        output.push_str(&format!("\n[{}]\n", index));
        for (attribute, value) in record {
            output.push_str(&format!(
                "  {}: {}\n",
                attribute,
                value.as_deref().unwrap_or(ABSENT)
            ));
        }
    }
    output.trim_end().to_string()
}

/// Section summary of a content document.
pub fn format_inspect_text(content: &RawContent) -> Result<String, ShapeError> {
    let selection = content.selection_nodes()?;
    let condition = content.condition_nodes()?;
    let unconditional = selection.iter().filter(|n| n.is_unconditional()).count();

    let mut output = format!(
        "resultType: {}\n",
        content.result_type()?.unwrap_or("(none)")
    );
    output.push_str(&format!(
        "selectionNodes: {} ({} unconditional)\n",
        selection.len(),
        unconditional
    ));
    output.push_str(&format!("conditionNodes: {}\n", condition.len()));

    for node in &condition {
        let id = node.condition_id.unwrap_or("(no id)");
        let clauses: Vec<String> = node
            .conditions
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}",
                    entry.key_name.unwrap_or("?"),
                    entry.operator.unwrap_or("="),
                    entry.operand.unwrap_or(ABSENT)
                )
            })
            .collect();
        output.push_str(&format!("  {}: {}\n", id, clauses.join(", ")));
    }
    Ok(output.trim_end().to_string())
}
