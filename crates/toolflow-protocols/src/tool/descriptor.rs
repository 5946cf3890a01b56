//! Tool descriptor types.

use serde::{Deserialize, Serialize};

/// Description of a callable tool as advertised to the model.
///
/// `name` is unique within a registry snapshot. The schema is plain JSON
/// Schema; vendor-specific shaping happens in the provider adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique tool name.
    pub name: String,

    /// Description of what the tool does.
    pub description: String,

    /// JSON Schema for the arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<serde_json::Value>,
}

impl ToolDescriptor {
    /// Create a new tool descriptor.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: None,
        }
    }

    /// Set the input schema.
    pub fn with_input_schema(mut self, schema: serde_json::Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// The schema to advertise: the declared one, or the empty-object
    /// schema when the tool takes no arguments.
    pub fn schema_or_empty(&self) -> serde_json::Value {
        self.input_schema.clone().unwrap_or_else(empty_input_schema)
    }
}

/// Schema for a tool that accepts no arguments.
pub fn empty_input_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}
