//! Tool dispatch.
//!
//! Executes tool calls against a backend and folds every outcome,
//! success or failure, into a [`ToolCallResult`]. Nothing raised by a
//! tool escapes past this boundary; the loop feeds failures back to the
//! model as tool-result content.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use toolflow_protocols::error::BackendError;
use toolflow_protocols::tool::{FailureKind, ToolBackend, ToolCallResult};
use toolflow_protocols::types::ToolCallRequest;

/// How much failure detail tool results expose to the model.
///
/// Only internal and transport errors are maskable; unknown-tool,
/// invalid-argument, timeout, and declared failures read the same under
/// both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskingPolicy {
    /// Full error text in tool results.
    #[default]
    Unmasked,

    /// Internal detail replaced with a generic message.
    Masked,
}

/// Dispatcher for tool calls within one conversation.
pub struct ToolDispatcher {
    backend: Arc<dyn ToolBackend>,
    masking: MaskingPolicy,
    timeout: Option<Duration>,
}

impl ToolDispatcher {
    pub fn new(backend: Arc<dyn ToolBackend>) -> Self {
        Self {
            backend,
            masking: MaskingPolicy::default(),
            timeout: None,
        }
    }

    /// Set the masking policy.
    pub fn with_masking(mut self, masking: MaskingPolicy) -> Self {
        self.masking = masking;
        self
    }

    /// Set a per-call execution timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute one tool call.
    ///
    /// Never fails: backend errors become failure outcomes.
    pub async fn dispatch(&self, call: &ToolCallRequest) -> ToolCallResult {
        debug!("Dispatching tool call {} ({})", call.name, call.id);

        let invocation = self.backend.call_tool(&call.name, call.arguments.clone());
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, invocation).await {
                Ok(outcome) => outcome,
                Err(_) => Err(BackendError::Timeout(limit.as_secs())),
            },
            None => invocation.await,
        };

        match outcome {
            Ok(reply) => {
                debug!("Tool {} succeeded: {} chars", call.name, reply.content.len());
                ToolCallResult::success(&call.id, &call.name, reply)
            }
            Err(err) => {
                warn!("Tool {} failed: {}", call.name, err);
                let (kind, message) = self.describe_failure(&call.name, err);
                ToolCallResult::failure(&call.id, &call.name, kind, message)
            }
        }
    }

    /// Execute a batch of tool calls concurrently.
    ///
    /// Results come back in request order regardless of completion
    /// order; the loop appends them to the conversation as-is.
    pub async fn dispatch_all(&self, calls: &[ToolCallRequest]) -> Vec<ToolCallResult> {
        join_all(calls.iter().map(|call| self.dispatch(call))).await
    }

    fn describe_failure(&self, tool_name: &str, err: BackendError) -> (FailureKind, String) {
        match err {
            BackendError::UnknownTool(_) => (FailureKind::UnknownTool, err.to_string()),
            BackendError::InvalidArguments(_) => (FailureKind::InvalidArguments, err.to_string()),
            // Declared failures and dispatcher-made timeouts are meant
            // for the caller's eyes; masking does not touch them.
            BackendError::Failed(message) => (FailureKind::Execution, message),
            BackendError::Timeout(_) => (FailureKind::Execution, err.to_string()),
            BackendError::Internal(_) | BackendError::Unavailable(_) => {
                let message = match self.masking {
                    MaskingPolicy::Unmasked => err.to_string(),
                    MaskingPolicy::Masked => format!("Error executing tool '{}'", tool_name),
                };
                (FailureKind::Execution, message)
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
