//! Tool backend trait definition.

use async_trait::async_trait;
use tokio::sync::watch;

use super::{ToolDescriptor, ToolReply};
use crate::error::BackendError;

/// A backend that hosts callable tools.
///
/// The transport behind it (in-process, subprocess, network) is not this
/// crate's concern; the orchestrator only consumes this surface.
#[async_trait]
pub trait ToolBackend: Send + Sync {
    /// Returns the backend ID.
    fn id(&self) -> &str;

    /// List the currently advertised (enabled) tools.
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BackendError>;

    /// Invoke a tool by name.
    ///
    /// Unknown and disabled tools fail with [`BackendError::UnknownTool`].
    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<ToolReply, BackendError>;

    /// Subscribe to tool-list changes.
    ///
    /// The value is a monotonic revision; a changed revision invalidates
    /// any cached descriptor list and requires a re-fetch before the
    /// next model request.
    fn changes(&self) -> watch::Receiver<u64>;
}
