//! Neutral-to-OpenAI request shaping.

use toolflow_protocols::gateway::CompletionRequest;
use toolflow_protocols::tool::ToolDescriptor;
use toolflow_protocols::types::{Message, MessageRole};

use crate::api::{ApiMessage, ApiRequest, ApiTool, FunctionCall, FunctionDef, ToolCall};

/// Build the full Chat Completions request body. The system prompt is
/// prepended as a `system` message rather than a request field.
pub fn build_api_request(request: &CompletionRequest) -> ApiRequest {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    if let Some(ref system) = request.system {
        messages.push(ApiMessage {
            role: "system".to_string(),
            content: Some(system.clone()),
            tool_calls: None,
            tool_call_id: None,
        });
    }
    messages.extend(request.messages.iter().map(to_api_message));

    ApiRequest {
        model: request.model.clone(),
        messages,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        tools: to_api_tools(&request.tools),
    }
}

fn to_api_message(message: &Message) -> ApiMessage {
    let role = match message.role {
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
        MessageRole::ToolResult => "tool",
    };

    if message.has_tool_calls() {
        let tool_calls = message
            .tool_calls
            .iter()
            .map(|call| ToolCall {
                id: call.id.clone(),
                call_type: "function".to_string(),
                function: FunctionCall {
                    name: call.name.clone(),
                    // Replayed as the JSON-encoded string the API expects
                    arguments: call.arguments.to_string(),
                },
            })
            .collect();

        return ApiMessage {
            role: role.to_string(),
            content: Some(message.content.text()),
            tool_calls: Some(tool_calls),
            tool_call_id: None,
        };
    }

    if message.role == MessageRole::ToolResult {
        return ApiMessage {
            role: role.to_string(),
            content: Some(message.content.text()),
            tool_calls: None,
            tool_call_id: message.tool_call_id.clone(),
        };
    }

    ApiMessage {
        role: role.to_string(),
        content: Some(message.content.text()),
        tool_calls: None,
        tool_call_id: None,
    }
}

/// Convert tool descriptors to function-tool entries.
pub fn to_api_tools(descriptors: &[ToolDescriptor]) -> Vec<ApiTool> {
    descriptors
        .iter()
        .map(|d| ApiTool {
            tool_type: "function".to_string(),
            function: FunctionDef {
                name: d.name.clone(),
                description: d.description.clone(),
                parameters: d.schema_or_empty(),
            },
        })
        .collect()
}
