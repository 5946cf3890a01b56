//! Anthropic Messages API wire types.

use serde::{Deserialize, Serialize};

/// Messages API request body.
#[derive(Debug, Serialize)]
pub struct ApiRequest {
    pub model: String,
    pub messages: Vec<ApiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ApiTool>,
}

/// API message format.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub role: String,
    pub content: ApiContent,
}

/// API content (string or block array).
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// Content block.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ToolUse { id: String, name: String, input: serde_json::Value },
    ToolResult { tool_use_id: String, content: String },
}

/// API tool definition.
#[derive(Debug, Serialize)]
pub struct ApiTool {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Messages API response body.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub id: String,
    pub model: String,
    pub content: Vec<ContentBlock>,
    pub stop_reason: String,
    pub usage: ApiUsage,
}

/// Token counts as the API reports them.
#[derive(Debug, Deserialize)]
pub struct ApiUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_serialization() {
        let request = ApiRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: ApiContent::Text("Hello".to_string()),
            }],
            system: Some("You are helpful".to_string()),
            max_tokens: 1000,
            temperature: Some(0.5),
            tools: vec![],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-20250514");
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["system"], "You are helpful");
        assert!(json["temperature"].as_f64().unwrap() > 0.49);
        assert!(json["temperature"].as_f64().unwrap() < 0.51);
    }

    #[test]
    fn test_api_request_skip_none_fields() {
        let request = ApiRequest {
            model: "claude-sonnet-4-20250514".to_string(),
            messages: vec![],
            system: None,
            max_tokens: 1000,
            temperature: None,
            tools: vec![],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
        // Empty tools should be skipped
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn test_api_content_text() {
        let content = ApiContent::Text("Hello world".to_string());
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json, "Hello world");
    }

    #[test]
    fn test_api_content_blocks() {
        let content = ApiContent::Blocks(vec![ContentBlock::Text {
            text: "Hello".to_string(),
        }]);
        let json = serde_json::to_value(&content).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "text");
        assert_eq!(json[0]["text"], "Hello");
    }

    #[test]
    fn test_content_block_tool_use() {
        let block = ContentBlock::ToolUse {
            id: "toolu_123".to_string(),
            name: "add".to_string(),
            input: serde_json::json!({"a": 5, "b": 3}),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "tool_use");
        assert_eq!(json["id"], "toolu_123");
        assert_eq!(json["name"], "add");
        assert_eq!(json["input"]["a"], 5);
    }

    #[test]
    fn test_content_block_tool_result() {
        let block = ContentBlock::ToolResult {
            tool_use_id: "toolu_123".to_string(),
            content: "8".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "tool_result");
        assert_eq!(json["tool_use_id"], "toolu_123");
        assert_eq!(json["content"], "8");
    }

    #[test]
    fn test_api_tool_serialization() {
        let tool = ApiTool {
            name: "add".to_string(),
            description: "Adds two integers together.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "a": {"type": "integer"},
                    "b": {"type": "integer"}
                },
                "required": ["a", "b"]
            }),
        };
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["name"], "add");
        assert_eq!(json["description"], "Adds two integers together.");
        assert_eq!(json["input_schema"]["type"], "object");
    }

    #[test]
    fn test_api_response_deserialization() {
        let json = serde_json::json!({
            "id": "msg_123",
            "model": "claude-sonnet-4-20250514",
            "content": [{"type": "text", "text": "Hello!"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        });

        let response: ApiResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.id, "msg_123");
        assert_eq!(response.model, "claude-sonnet-4-20250514");
        assert_eq!(response.content.len(), 1);
        assert_eq!(response.stop_reason, "end_turn");
        assert_eq!(response.usage.input_tokens, 10);
        assert_eq!(response.usage.output_tokens, 5);
    }

    #[test]
    fn test_api_response_ignores_extra_fields() {
        // The live API sends fields we do not model (type, role, ...)
        let json = serde_json::json!({
            "id": "msg_123",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "content": [],
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": {"input_tokens": 1, "output_tokens": 1, "cache_read_input_tokens": 0}
        });

        let response: ApiResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.id, "msg_123");
    }

    #[test]
    fn test_content_block_deserialization() {
        let json = serde_json::json!({
            "type": "tool_use",
            "id": "toolu_abc",
            "name": "hello_tool",
            "input": {}
        });

        let block: ContentBlock = serde_json::from_value(json).unwrap();
        match block {
            ContentBlock::ToolUse { id, name, input } => {
                assert_eq!(id, "toolu_abc");
                assert_eq!(name, "hello_tool");
                assert!(input.as_object().unwrap().is_empty());
            }
            _ => panic!("Expected ToolUse"),
        }
    }

    #[test]
    fn test_api_message_roundtrip() {
        let message = ApiMessage {
            role: "user".to_string(),
            content: ApiContent::Text("Hello".to_string()),
        };

        let json = serde_json::to_value(&message).unwrap();
        let parsed: ApiMessage = serde_json::from_value(json).unwrap();

        assert_eq!(parsed.role, "user");
        match parsed.content {
            ApiContent::Text(t) => assert_eq!(t, "Hello"),
            _ => panic!("Expected text content"),
        }
    }
}
