//! Normalized completion response types.

use serde::{Deserialize, Serialize};

use crate::types::{Message, MessageContent, StopReason, ToolCallRequest, Usage};

/// Normalized result of one model gateway call.
///
/// Both vendor response shapes reduce to this: ordered text fragments,
/// ordered tool-call requests, and a stop reason. Fragment order and
/// tool-call order follow the vendor's block order; tool-call order is
/// the request order the dispatcher must honor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Vendor ID for this completion.
    pub id: String,

    /// Model that produced it.
    pub model: String,

    /// Ordered text fragments.
    pub fragments: Vec<String>,

    /// Ordered tool-call requests (possibly empty).
    #[serde(default)]
    pub tool_calls: Vec<ToolCallRequest>,

    /// Reason the model stopped.
    pub stop_reason: StopReason,

    /// Token usage.
    pub usage: Usage,
}

impl ModelResponse {
    /// Full response text, fragments joined by newlines.
    pub fn text(&self) -> String {
        self.fragments.join("\n")
    }

    /// Whether the loop should dispatch tools before requesting again.
    pub fn wants_tools(&self) -> bool {
        self.stop_reason.is_tool_use() && !self.tool_calls.is_empty()
    }

    /// Build the assistant message to append for this response.
    pub fn assistant_message(&self) -> Message {
        Message::assistant_with_calls(
            MessageContent::from_fragments(self.fragments.clone()),
            self.tool_calls.clone(),
        )
    }
}
