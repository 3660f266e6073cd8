//! Record Binding
//!
//! Turns flat result records into caller-defined types. A [`RecordSchema`]
//! declares the fields of the target type and, where they differ, the
//! content attribute each field reads from. Binding renames attributes to
//! field names and hands the record to `serde`.

use crate::error::BindError;
use crate::types::{AttributeSet, ResultRecord};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One field of the target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub field: String,
    pub attribute: String,
}

/// Declarative field list of a target record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSchema {
    result_type: Option<String>,
    fields: Vec<FieldBinding>,
}

impl RecordSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field read from the attribute of the same name.
    pub fn field(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.renamed(name.clone(), name)
    }

    /// Field read from a differently named attribute.
    pub fn renamed(mut self, field: impl Into<String>, attribute: impl Into<String>) -> Self {
        let field = field.into();
        let attribute = attribute.into();
        self.fields.retain(|binding| binding.field != field);
        self.fields.push(FieldBinding { field, attribute });
        self
    }

    /// Name the content's `meta.resultType` must carry, if it declares one.
    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = Some(result_type.into());
        self
    }

    pub fn result_type(&self) -> Option<&str> {
        self.result_type.as_deref()
    }

    pub fn fields(&self) -> &[FieldBinding] {
        &self.fields
    }

    /// Attribute names to request from the evaluator.
    pub fn attributes(&self) -> AttributeSet {
        self.fields
            .iter()
            .map(|binding| binding.attribute.clone())
            .collect()
    }

    /// Reject content whose declared result type differs from the schema's.
    pub fn check_result_type(&self, declared: Option<&str>) -> Result<(), BindError> {
        match (self.result_type.as_deref(), declared) {
            (Some(expected), Some(found)) if expected != found => {
                Err(BindError::ResultTypeMismatch {
                    expected: expected.to_string(),
                    found: found.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Rename one record's attributes to field names. Absent values become `null`.
    pub fn to_fields(&self, record: &ResultRecord) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|binding| {
                let value = record
                    .get(&binding.attribute)
                    .cloned()
                    .flatten()
                    .map_or(Value::Null, Value::String);
                (binding.field.clone(), value)
            })
            .collect()
    }

    /// Bind every record to `T`, preserving order.
    pub fn bind<T: DeserializeOwned>(&self, records: &[ResultRecord]) -> Result<Vec<T>, BindError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(Value::Object(self.to_fields(record)))
                    .map_err(|source| BindError::Deserialize { index, source })
            })
            .collect()
    }
}
