//! Neutral-to-Anthropic request shaping.

use toolflow_protocols::gateway::CompletionRequest;
use toolflow_protocols::tool::ToolDescriptor;
use toolflow_protocols::types::{Message, MessageRole};

use crate::api::{ApiContent, ApiMessage, ApiRequest, ApiTool, ContentBlock};

/// Generation budget when the request does not set one. The Messages API
/// requires max_tokens on every call.
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Build the full Messages API request body.
pub fn build_api_request(request: &CompletionRequest) -> ApiRequest {
    ApiRequest {
        model: request.model.clone(),
        messages: to_api_messages(&request.messages),
        system: request.system.clone(),
        max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        temperature: request.temperature,
        tools: to_api_tools(&request.tools),
    }
}

/// Convert conversation messages to Messages API form.
pub fn to_api_messages(messages: &[Message]) -> Vec<ApiMessage> {
    messages
        .iter()
        .map(|m| ApiMessage {
            role: match m.role {
                MessageRole::User => "user".to_string(),
                MessageRole::Assistant => "assistant".to_string(),
                // Tool results replay as user-role tool_result blocks.
                MessageRole::ToolResult => "user".to_string(),
            },
            content: to_api_content(m),
        })
        .collect()
}

/// Convert a single message's content.
fn to_api_content(message: &Message) -> ApiContent {
    if message.role == MessageRole::ToolResult {
        if let Some(ref tool_call_id) = message.tool_call_id {
            return ApiContent::Blocks(vec![ContentBlock::ToolResult {
                tool_use_id: tool_call_id.clone(),
                content: message.content.text(),
            }]);
        }
    }

    if message.has_tool_calls() {
        let mut blocks: Vec<ContentBlock> = vec![];
        let text = message.content.text();
        if !text.is_empty() {
            blocks.push(ContentBlock::Text { text });
        }
        for call in &message.tool_calls {
            blocks.push(ContentBlock::ToolUse {
                id: call.id.clone(),
                name: call.name.clone(),
                input: call.arguments.clone(),
            });
        }
        return ApiContent::Blocks(blocks);
    }

    ApiContent::Text(message.content.text())
}

/// Convert tool descriptors to Messages API tool entries.
pub fn to_api_tools(descriptors: &[ToolDescriptor]) -> Vec<ApiTool> {
    descriptors
        .iter()
        .map(|d| ApiTool {
            name: d.name.clone(),
            description: d.description.clone(),
            input_schema: d.schema_or_empty(),
        })
        .collect()
}

#[cfg(test)]
#[path = "converter_tests.rs"]
mod tests;
