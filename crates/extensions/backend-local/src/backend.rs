//! Local tool backend.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::debug;

use toolflow_core::ToolRegistry;
use toolflow_protocols::ToolDescriptor;
use toolflow_protocols::error::{BackendError, RegistryError};
use toolflow_protocols::tool::{ToolBackend, ToolReply};

use crate::tool::{LocalTool, ToolEnv};
use crate::tools::{AddTool, HelloTool};

/// In-process [`ToolBackend`] over a table of [`LocalTool`] handlers.
///
/// The registry is the truth for what is advertised: a handler whose
/// entry is disabled stays unreachable until something enables it, and
/// every registry mutation feeds the backend's change signal.
pub struct LocalToolBackend {
    id: String,
    registry: Arc<ToolRegistry>,
    handlers: DashMap<String, Arc<dyn LocalTool>>,
}

impl LocalToolBackend {
    /// Create an empty backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            registry: Arc::new(ToolRegistry::new()),
            handlers: DashMap::new(),
        }
    }

    /// Backend pre-loaded with the demo pair: `hello_tool` starts
    /// enabled, `add` starts disabled and appears once `hello_tool`
    /// has run.
    pub fn demo() -> Result<Self, RegistryError> {
        let backend = Self::new("local");
        backend.register(Arc::new(HelloTool::new()))?;
        backend.register_disabled(Arc::new(AddTool::new()))?;
        Ok(backend)
    }

    /// Handle to the registry backing the advertised list.
    pub fn registry(&self) -> Arc<ToolRegistry> {
        self.registry.clone()
    }

    /// Register a tool, enabled.
    pub fn register(&self, tool: Arc<dyn LocalTool>) -> Result<(), RegistryError> {
        self.registry.register(tool.descriptor().clone())?;
        self.handlers.insert(tool.descriptor().name.clone(), tool);
        Ok(())
    }

    /// Register a tool in the disabled state.
    pub fn register_disabled(&self, tool: Arc<dyn LocalTool>) -> Result<(), RegistryError> {
        self.registry.register_disabled(tool.descriptor().clone())?;
        self.handlers.insert(tool.descriptor().name.clone(), tool);
        Ok(())
    }
}

/// Check `arguments` for the required properties the schema declares.
fn check_required(
    descriptor: &ToolDescriptor,
    arguments: &serde_json::Value,
) -> Result<(), BackendError> {
    let Some(required) = descriptor
        .input_schema
        .as_ref()
        .and_then(|schema| schema.get("required"))
        .and_then(|required| required.as_array())
    else {
        return Ok(());
    };
    for property in required.iter().filter_map(|p| p.as_str()) {
        if arguments.get(property).is_none() {
            return Err(BackendError::InvalidArguments(format!(
                "missing required property `{property}`"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl ToolBackend for LocalToolBackend {
    fn id(&self) -> &str {
        &self.id
    }

    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BackendError> {
        Ok(self.registry.enabled_tools())
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<ToolReply, BackendError> {
        // Disabled tools are not advertised, so calling one looks the
        // same as calling a tool that was never registered.
        if !self.registry.is_enabled(name) {
            return Err(BackendError::UnknownTool(name.to_string()));
        }
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| BackendError::UnknownTool(name.to_string()))?;
        check_required(&descriptor, &arguments)?;

        let handler = self
            .handlers
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                BackendError::Internal(format!("no handler registered for tool '{name}'"))
            })?;

        let env = ToolEnv::new(self.registry.clone());
        debug!(tool = %name, correlation = %env.correlation_id, "dispatching local tool");
        handler.call(arguments, env).await
    }

    fn changes(&self) -> watch::Receiver<u64> {
        self.registry.changes()
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
