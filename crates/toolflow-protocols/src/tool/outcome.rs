//! Tool invocation result types.

use serde::{Deserialize, Serialize};

/// Success payload returned by a tool backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolReply {
    /// Text content of the reply.
    pub content: String,

    /// Structured output (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured: Option<serde_json::Value>,
}

impl ToolReply {
    /// Create a text reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            structured: None,
        }
    }

    /// Attach structured output.
    pub fn with_structured(mut self, structured: serde_json::Value) -> Self {
        self.structured = Some(structured);
        self
    }
}

/// Result of dispatching one tool call.
///
/// A dispatch never fails outright: failures are folded into the
/// outcome so the loop can feed them back to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    /// The tool-call request this result answers.
    pub request_id: String,

    /// Name of the tool that was invoked.
    pub tool_name: String,

    /// Success payload or failure descriptor.
    pub outcome: ToolOutcome,
}

impl ToolCallResult {
    /// Create a success result.
    pub fn success(
        request_id: impl Into<String>,
        tool_name: impl Into<String>,
        reply: ToolReply,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            tool_name: tool_name.into(),
            outcome: ToolOutcome::Success {
                content: reply.content,
                structured: reply.structured,
            },
        }
    }

    /// Create a failure result.
    pub fn failure(
        request_id: impl Into<String>,
        tool_name: impl Into<String>,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            tool_name: tool_name.into(),
            outcome: ToolOutcome::Failure {
                kind,
                message: message.into(),
            },
        }
    }

    /// Whether the invocation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ToolOutcome::Success { .. })
    }

    /// The text fed back to the model: reply content on success, the
    /// failure message otherwise.
    pub fn content(&self) -> &str {
        match &self.outcome {
            ToolOutcome::Success { content, .. } => content,
            ToolOutcome::Failure { message, .. } => message,
        }
    }
}

/// Outcome of a tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolOutcome {
    Success {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        structured: Option<serde_json::Value>,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

/// Classification of a tool invocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The requested tool is not advertised.
    UnknownTool,

    /// The arguments failed the tool's schema.
    InvalidArguments,

    /// The tool itself failed while executing.
    Execution,
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
