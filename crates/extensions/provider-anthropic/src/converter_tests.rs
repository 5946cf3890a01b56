    use super::*;
    use serde_json::json;
    use toolflow_protocols::types::{MessageContent, ToolCallRequest};

    #[test]
    fn test_user_message_is_text_content() {
        let converted = to_api_messages(&[Message::user("Hello")]);
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].role, "user");
        match &converted[0].content {
            ApiContent::Text(t) => assert_eq!(t, "Hello"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_assistant_message_role() {
        let converted = to_api_messages(&[Message::assistant("I can help you")]);
        assert_eq!(converted[0].role, "assistant");
    }

    #[test]
    fn test_tool_result_replays_as_user_role() {
        let msg = Message::tool_result("toolu_123", "8");
        let converted = to_api_messages(&[msg]);
        assert_eq!(converted[0].role, "user");
        match &converted[0].content {
            ApiContent::Blocks(blocks) => {
                assert_eq!(blocks.len(), 1);
                match &blocks[0] {
                    ContentBlock::ToolResult { tool_use_id, content } => {
                        assert_eq!(tool_use_id, "toolu_123");
                        assert_eq!(content, "8");
                    }
                    _ => panic!("Expected ToolResult block"),
                }
            }
            _ => panic!("Expected blocks content"),
        }
    }

    #[test]
    fn test_assistant_with_tool_calls_becomes_blocks() {
        let msg = Message::assistant_with_calls(
            MessageContent::Text("Let me add those.".to_string()),
            vec![ToolCallRequest::new("tc_1", "add", json!({"a": 5, "b": 3}))],
        );

        let converted = to_api_messages(&[msg]);
        match &converted[0].content {
            ApiContent::Blocks(blocks) => {
                assert_eq!(blocks.len(), 2);
                match &blocks[0] {
                    ContentBlock::Text { text } => assert_eq!(text, "Let me add those."),
                    _ => panic!("Expected Text block first"),
                }
                match &blocks[1] {
                    ContentBlock::ToolUse { id, name, input } => {
                        assert_eq!(id, "tc_1");
                        assert_eq!(name, "add");
                        assert_eq!(input["a"], 5);
                    }
                    _ => panic!("Expected ToolUse block"),
                }
            }
            _ => panic!("Expected blocks content"),
        }
    }

    #[test]
    fn test_tool_calls_without_text_skip_empty_block() {
        let msg = Message::assistant_with_calls(
            MessageContent::Text(String::new()),
            vec![ToolCallRequest::new("tc_1", "hello_tool", json!({}))],
        );

        let converted = to_api_messages(&[msg]);
        match &converted[0].content {
            ApiContent::Blocks(blocks) => {
                assert_eq!(blocks.len(), 1);
                assert!(matches!(&blocks[0], ContentBlock::ToolUse { .. }));
            }
            _ => panic!("Expected blocks content"),
        }
    }

    #[test]
    fn test_fragmented_text_joins_in_replay() {
        let msg = Message::assistant_with_calls(
            MessageContent::Fragments(vec!["first".to_string(), "second".to_string()]),
            vec![],
        );

        let converted = to_api_messages(&[msg]);
        match &converted[0].content {
            ApiContent::Text(t) => assert_eq!(t, "first\nsecond"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_full_turn_replay_order() {
        let messages = vec![
            Message::user("Add 5 and 3"),
            Message::assistant_with_calls(
                MessageContent::Text("Let me add those.".to_string()),
                vec![ToolCallRequest::new("tc_1", "add", json!({"a": 5, "b": 3}))],
            ),
            Message::tool_result("tc_1", "8"),
        ];

        let converted = to_api_messages(&messages);
        assert_eq!(converted.len(), 3);
        assert_eq!(converted[0].role, "user");
        assert_eq!(converted[1].role, "assistant");
        assert_eq!(converted[2].role, "user");
    }

    #[test]
    fn test_to_api_tools_carries_schema() {
        let descriptor = ToolDescriptor::new("add", "Adds two integers together.")
            .with_input_schema(json!({
                "type": "object",
                "properties": {
                    "a": {"type": "integer"},
                    "b": {"type": "integer"}
                },
                "required": ["a", "b"]
            }));

        let tools = to_api_tools(&[descriptor]);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "add");
        assert_eq!(tools[0].description, "Adds two integers together.");
        assert!(tools[0].input_schema["properties"]["a"].is_object());
        assert_eq!(tools[0].input_schema["required"][0], "a");
    }

    #[test]
    fn test_to_api_tools_without_schema_gets_empty_object() {
        let descriptor = ToolDescriptor::new("hello_tool", "Says hello.");

        let tools = to_api_tools(&[descriptor]);
        assert_eq!(tools[0].input_schema["type"], "object");
        assert!(tools[0].input_schema["properties"]
            .as_object()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_build_api_request_defaults() {
        let request = CompletionRequest::new("claude-sonnet-4-20250514", vec![Message::user("Hi")]);

        let api_request = build_api_request(&request);
        assert_eq!(api_request.model, "claude-sonnet-4-20250514");
        assert_eq!(api_request.max_tokens, 1000);
        assert!(api_request.system.is_none());
        assert!(api_request.temperature.is_none());
        assert!(api_request.tools.is_empty());
    }

    #[test]
    fn test_build_api_request_carries_settings() {
        let request = CompletionRequest::new("claude-sonnet-4-20250514", vec![Message::user("Hi")])
            .with_system("You are a helpful assistant.")
            .with_max_tokens(2048)
            .with_temperature(0.7)
            .with_tools(vec![ToolDescriptor::new("add", "Adds.")]);

        let api_request = build_api_request(&request);
        assert_eq!(api_request.max_tokens, 2048);
        assert_eq!(api_request.temperature, Some(0.7));
        assert_eq!(
            api_request.system.as_deref(),
            Some("You are a helpful assistant.")
        );
        assert_eq!(api_request.tools.len(), 1);
    }
