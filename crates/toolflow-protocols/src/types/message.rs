//! Message types for conversations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::Metadata;
use super::content::MessageContent;

/// A message in a conversation.
///
/// Messages are immutable once appended to a conversation; every turn
/// produces new messages rather than editing old ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender.
    pub role: MessageRole,

    /// Content of the message.
    pub content: MessageContent,

    /// Tool calls requested in this message (assistant messages only).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tool_calls: Vec<ToolCallRequest>,

    /// Tool call ID this message answers (tool-result messages only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// Additional metadata.
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub metadata: Metadata,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
            metadata: HashMap::new(),
        }
    }

    /// Create an assistant message with plain text content.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
            metadata: HashMap::new(),
        }
    }

    /// Create an assistant message carrying tool-call requests.
    pub fn assistant_with_calls(content: MessageContent, tool_calls: Vec<ToolCallRequest>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content,
            tool_calls,
            tool_call_id: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a tool-result message answering one tool call.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::ToolResult,
            content: MessageContent::Text(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: Some(tool_call_id.into()),
            metadata: HashMap::new(),
        }
    }

    /// Whether this message requests any tool calls.
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    ToolResult,
}

/// A tool invocation requested by the model.
///
/// The `id` correlates the request with the tool result fed back on the
/// next round; vendors require it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

impl ToolCallRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
