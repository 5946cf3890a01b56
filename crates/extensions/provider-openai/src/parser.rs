//! OpenAI-to-neutral response parsing.

use toolflow_protocols::error::GatewayError;
use toolflow_protocols::gateway::ModelResponse;
use toolflow_protocols::types::{StopReason, ToolCallRequest, Usage};

use crate::api::ApiResponse;

/// Normalize a Chat Completions response.
///
/// `function.arguments` arrives as a JSON-encoded string; one that does
/// not decode is a protocol error, not an empty argument set.
pub fn parse_response(response: ApiResponse) -> Result<ModelResponse, GatewayError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::Protocol("response contained no choices".to_string()))?;

    let mut tool_calls = Vec::with_capacity(choice.message.tool_calls.len());
    for call in choice.message.tool_calls {
        let arguments: serde_json::Value = serde_json::from_str(&call.function.arguments)
            .map_err(|e| {
                GatewayError::Protocol(format!(
                    "undecodable arguments for tool '{}': {}",
                    call.function.name, e
                ))
            })?;
        tool_calls.push(ToolCallRequest::new(call.id, call.function.name, arguments));
    }

    // At most one text block per choice
    let fragments = match choice.message.content {
        Some(text) if !text.is_empty() => vec![text],
        _ => Vec::new(),
    };

    Ok(ModelResponse {
        id: response.id,
        model: response.model,
        fragments,
        tool_calls,
        stop_reason: parse_finish_reason(choice.finish_reason.as_deref()),
        usage: response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default(),
    })
}

/// Map the vendor finish-reason string.
pub fn parse_finish_reason(reason: Option<&str>) -> StopReason {
    match reason {
        Some("tool_calls") => StopReason::ToolUse,
        Some("length") => StopReason::MaxTokens,
        _ => StopReason::EndTurn,
    }
}
