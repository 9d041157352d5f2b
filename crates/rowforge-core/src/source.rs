use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::SOURCE_VERSION;
use crate::descriptor::FieldDescriptor;

/// One table record handed to rule dispatch: a name plus ordered fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TableSource {
    pub name: String,
    /// Field descriptors in declared column order.
    pub fields: Vec<FieldDescriptor>,
    /// Optional model type name for collaborators that map rows onto models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl TableSource {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
            model: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Top-level source document describing every table to resolve.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SourceSet {
    /// Contract version for this source format.
    pub source_version: String,
    /// Tables in resolution order.
    pub tables: Vec<TableSource>,
}

impl SourceSet {
    pub fn new(tables: Vec<TableSource>) -> Self {
        Self {
            source_version: SOURCE_VERSION.to_string(),
            tables,
        }
    }
}
