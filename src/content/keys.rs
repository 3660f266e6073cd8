//! Well-known key names in content documents.

pub const SELECTION_NODES: &str = "selectionNodes";
pub const CONDITION_NODES: &str = "conditionNodes";
pub const NODE: &str = "node";
pub const CONDITION_ID: &str = "conditionId";
pub const CONDITIONS: &str = "conditions";
pub const KEY_NAME: &str = "keyName";
pub const OPERATOR: &str = "operator";
pub const OPERAND: &str = "operand";
pub const META: &str = "meta";
pub const RESULT_TYPE: &str = "resultType";

/// File extension of content documents.
pub const CONTENT_EXTENSION: &str = "json";
