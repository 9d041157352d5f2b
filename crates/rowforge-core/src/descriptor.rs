use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared type of a source field, as reported by the reflection collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    Boolean,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Other,
}

/// Matchable metadata for one column of a source table.
///
/// Descriptors are produced by a reflection collaborator and treated as
/// immutable input by the rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    /// Declared length for text-like fields, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default = "default_nullable")]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_auto_increment: bool,
}

impl FieldDescriptor {
    /// Descriptor with the given name and kind; flags start cleared and
    /// nullability defaults to true, matching relational column defaults.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            length: None,
            is_nullable: true,
            is_primary_key: false,
            is_unique: false,
            is_auto_increment: false,
        }
    }
}

fn default_nullable() -> bool {
    true
}
