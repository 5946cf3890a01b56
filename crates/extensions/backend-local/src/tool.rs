//! Local tool trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use toolflow_core::ToolRegistry;
use toolflow_protocols::ToolDescriptor;
use toolflow_protocols::error::BackendError;
use toolflow_protocols::tool::ToolReply;

/// Environment handed to a tool body for one invocation.
///
/// Carries the registry shared with the owning backend, so a tool can
/// enable or disable other tools as a side effect of running.
#[derive(Clone)]
pub struct ToolEnv {
    /// Registry backing the advertised tool list.
    pub registry: Arc<ToolRegistry>,

    /// Correlation ID for tracing.
    pub correlation_id: String,
}

impl ToolEnv {
    /// Create a new tool environment.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            correlation_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// An in-process tool hosted by the local backend.
///
/// Implementations parse their own arguments; the backend only checks
/// the descriptor's required properties before calling.
#[async_trait]
pub trait LocalTool: Send + Sync {
    /// The descriptor advertised for this tool.
    fn descriptor(&self) -> &ToolDescriptor;

    /// Run the tool body.
    async fn call(
        &self,
        arguments: serde_json::Value,
        env: ToolEnv,
    ) -> Result<ToolReply, BackendError>;
}
