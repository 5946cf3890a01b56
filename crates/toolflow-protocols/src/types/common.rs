//! Common utility types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata map type.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Stop reason for a completion.
///
/// The orchestration loop keeps dispatching only on `ToolUse`; every
/// other reason ends the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    StopSequence,
    MaxTokens,
    ToolUse,
}

impl StopReason {
    /// Whether the model stopped to call tools.
    pub fn is_tool_use(&self) -> bool {
        matches!(self, StopReason::ToolUse)
    }
}

/// Token usage reported for a completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    /// Fold another round's usage into this one (turn-level accounting).
    pub fn accumulate(&mut self, other: &Usage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
        self.total_tokens += other.total_tokens;
    }
}
