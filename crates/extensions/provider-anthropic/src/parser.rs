//! Anthropic-to-neutral response parsing.

use toolflow_protocols::gateway::ModelResponse;
use toolflow_protocols::types::{StopReason, ToolCallRequest, Usage};

use crate::api::{ApiResponse, ContentBlock};

/// Normalize a Messages API response.
///
/// Each text block becomes one fragment and each tool_use block one
/// request, both in block order. Tool-call order is the dispatch order
/// downstream, so it must survive parsing untouched.
pub fn parse_response(response: ApiResponse) -> ModelResponse {
    let mut fragments = Vec::new();
    let mut tool_calls = Vec::new();

    for block in response.content {
        match block {
            ContentBlock::Text { text } => fragments.push(text),
            ContentBlock::ToolUse { id, name, input } => {
                tool_calls.push(ToolCallRequest::new(id, name, input));
            }
            // tool_result never appears in responses; tolerate it anyway
            ContentBlock::ToolResult { .. } => {}
        }
    }

    ModelResponse {
        id: response.id,
        model: response.model,
        fragments,
        tool_calls,
        stop_reason: parse_stop_reason(&response.stop_reason),
        usage: Usage {
            prompt_tokens: response.usage.input_tokens,
            completion_tokens: response.usage.output_tokens,
            total_tokens: response.usage.input_tokens + response.usage.output_tokens,
        },
    }
}

/// Map the vendor stop-reason string.
pub fn parse_stop_reason(reason: &str) -> StopReason {
    match reason {
        "end_turn" => StopReason::EndTurn,
        "max_tokens" => StopReason::MaxTokens,
        "tool_use" => StopReason::ToolUse,
        "stop_sequence" => StopReason::StopSequence,
        _ => StopReason::EndTurn,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
