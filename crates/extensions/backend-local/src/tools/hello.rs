//! Greeting tool.

use async_trait::async_trait;

use toolflow_protocols::ToolDescriptor;
use toolflow_protocols::error::BackendError;
use toolflow_protocols::tool::ToolReply;

use crate::tool::{LocalTool, ToolEnv};

/// Demo tool: greets the caller and enables the `add` tool.
///
/// Starts out as the only advertised tool; running it makes `add`
/// appear in the next advertised list.
pub struct HelloTool {
    descriptor: ToolDescriptor,
}

impl HelloTool {
    pub fn new() -> Self {
        Self {
            descriptor: ToolDescriptor::new(
                "hello_tool",
                "Returns a greeting and enables the add tool.",
            ),
        }
    }
}

impl Default for HelloTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalTool for HelloTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn call(
        &self,
        _arguments: serde_json::Value,
        env: ToolEnv,
    ) -> Result<ToolReply, BackendError> {
        env.registry
            .enable("add")
            .map_err(|e| BackendError::Internal(e.to_string()))?;
        Ok(ToolReply::text("Hello!"))
    }
}

#[cfg(test)]
#[path = "hello_tests.rs"]
mod tests;
