//! Integer addition tool.

use async_trait::async_trait;
use serde::Deserialize;

use toolflow_protocols::ToolDescriptor;
use toolflow_protocols::error::BackendError;
use toolflow_protocols::tool::ToolReply;

use crate::tool::{LocalTool, ToolEnv};

/// Parameters for the add tool.
#[derive(Debug, Deserialize)]
struct AddParams {
    /// First addend.
    a: i64,
    /// Second addend.
    b: i64,
}

/// Demo tool: adds two integers and returns the sum as text.
///
/// Registered disabled; `hello_tool` switches it on.
pub struct AddTool {
    descriptor: ToolDescriptor,
}

impl AddTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "a": {
                    "type": "integer",
                    "description": "First addend"
                },
                "b": {
                    "type": "integer",
                    "description": "Second addend"
                }
            },
            "required": ["a", "b"]
        });

        Self {
            descriptor: ToolDescriptor::new("add", "Adds two integers together.")
                .with_input_schema(schema),
        }
    }
}

impl Default for AddTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalTool for AddTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn call(
        &self,
        arguments: serde_json::Value,
        _env: ToolEnv,
    ) -> Result<ToolReply, BackendError> {
        let params: AddParams = serde_json::from_value(arguments)
            .map_err(|e| BackendError::InvalidArguments(e.to_string()))?;

        let sum = params
            .a
            .checked_add(params.b)
            .ok_or_else(|| BackendError::Failed("integer overflow".to_string()))?;

        Ok(ToolReply::text(sum.to_string()))
    }
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
