    use super::*;
    use toolflow_protocols::types::Message;

    #[test]
    fn test_gateway_id() {
        let gateway = OpenAiGateway::new("test-key");
        assert_eq!(gateway.id(), "openai");
    }

    #[test]
    fn test_gateway_new_defaults() {
        let gateway = OpenAiGateway::new("my-api-key");
        assert_eq!(gateway.api_key, "my-api-key");
        assert_eq!(gateway.base_url, "https://api.openai.com/v1");
        assert_eq!(gateway.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_gateway_builder_overrides() {
        let gateway = OpenAiGateway::new("key")
            .with_base_url("http://localhost:11434/v1")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(gateway.base_url, "http://localhost:11434/v1");
        assert_eq!(gateway.timeout, Duration::from_secs(5));
    }

    mod http_tests {
        use super::*;
        use serde_json::json;
        use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

        fn gateway_for(server: &MockServer) -> OpenAiGateway {
            OpenAiGateway::new("test-key").with_base_url(server.uri())
        }

        #[tokio::test]
        async fn test_complete_success() {
            let mock_server = MockServer::start().await;

            let response_body = json!({
                "id": "chatcmpl-123",
                "model": "gpt-4o",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello back!"},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
            });

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .and(matchers::header("Authorization", "Bearer test-key"))
                .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
                .expect(1)
                .mount(&mock_server)
                .await;

            let gateway = gateway_for(&mock_server);
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Hello")]);

            let response = gateway.complete(request).await.unwrap();
            assert_eq!(response.text(), "Hello back!");
            assert_eq!(response.usage.prompt_tokens, 10);
            assert!(!response.wants_tools());
        }

        #[tokio::test]
        async fn test_complete_sends_system_as_message() {
            let mock_server = MockServer::start().await;

            let response_body = json!({
                "id": "chatcmpl-123",
                "model": "gpt-4o",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "ok"},
                    "finish_reason": "stop"
                }],
                "usage": null
            });

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .and(matchers::body_partial_json(json!({
                    "model": "gpt-4o",
                    "messages": [
                        {"role": "system", "content": "You are a helpful assistant."},
                        {"role": "user", "content": "Hello"}
                    ],
                    "tools": [{"type": "function", "function": {"name": "add"}}]
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
                .expect(1)
                .mount(&mock_server)
                .await;

            let gateway = gateway_for(&mock_server);
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Hello")])
                .with_system("You are a helpful assistant.")
                .with_tools(vec![toolflow_protocols::tool::ToolDescriptor::new(
                    "add",
                    "Adds two integers together.",
                )]);

            let result = gateway.complete(request).await;
            assert!(result.is_ok());
        }

        #[tokio::test]
        async fn test_complete_with_tool_calls() {
            let mock_server = MockServer::start().await;

            let response_body = json!({
                "id": "chatcmpl-456",
                "model": "gpt-4o",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "id": "call_123",
                            "type": "function",
                            "function": {"name": "add", "arguments": "{\"a\": 5, \"b\": 3}"}
                        }]
                    },
                    "finish_reason": "tool_calls"
                }],
                "usage": {"prompt_tokens": 20, "completion_tokens": 15, "total_tokens": 35}
            });

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
                .expect(1)
                .mount(&mock_server)
                .await;

            let gateway = gateway_for(&mock_server);
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Add 5 and 3")]);

            let response = gateway.complete(request).await.unwrap();
            assert!(response.wants_tools());
            assert_eq!(response.tool_calls.len(), 1);
            assert_eq!(response.tool_calls[0].id, "call_123");
            assert_eq!(response.tool_calls[0].name, "add");
            assert_eq!(response.tool_calls[0].arguments["b"], 3);
        }

        #[tokio::test]
        async fn test_complete_malformed_arguments_is_protocol_error() {
            let mock_server = MockServer::start().await;

            let response_body = json!({
                "id": "chatcmpl-456",
                "model": "gpt-4o",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "id": "call_123",
                            "type": "function",
                            "function": {"name": "add", "arguments": "{\"a\": 5,"}
                        }]
                    },
                    "finish_reason": "tool_calls"
                }],
                "usage": null
            });

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
                .expect(1)
                .mount(&mock_server)
                .await;

            let gateway = gateway_for(&mock_server);
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Add 5 and 3")]);

            let result = gateway.complete(request).await;
            assert!(matches!(result, Err(GatewayError::Protocol(_))));
        }

        #[tokio::test]
        async fn test_complete_auth_error() {
            let mock_server = MockServer::start().await;

            let error_body =
                r#"{"error": {"message": "Invalid API key", "type": "invalid_request_error"}}"#;

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .respond_with(ResponseTemplate::new(401).set_body_string(error_body))
                .expect(1)
                .mount(&mock_server)
                .await;

            let gateway = OpenAiGateway::new("bad-key").with_base_url(mock_server.uri());
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Hello")]);

            match gateway.complete(request).await.unwrap_err() {
                GatewayError::AuthenticationFailed(message) => {
                    assert!(message.contains("Invalid API key"));
                }
                other => panic!("Expected AuthenticationFailed, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_complete_rate_limited() {
            let mock_server = MockServer::start().await;

            let error_body =
                r#"{"error": {"message": "Rate limit exceeded", "type": "rate_limit_error"}}"#;

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .respond_with(
                    ResponseTemplate::new(429)
                        .insert_header("retry-after", "7")
                        .set_body_string(error_body),
                )
                .expect(1)
                .mount(&mock_server)
                .await;

            let gateway = gateway_for(&mock_server);
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Hello")]);

            match gateway.complete(request).await.unwrap_err() {
                GatewayError::RateLimited {
                    retry_after_seconds,
                } => assert_eq!(retry_after_seconds, 7),
                other => panic!("Expected RateLimited, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_complete_server_error() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
                .expect(1)
                .mount(&mock_server)
                .await;

            let gateway = gateway_for(&mock_server);
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Hello")]);

            match gateway.complete(request).await.unwrap_err() {
                GatewayError::Api { status, message } => {
                    assert_eq!(status, 500);
                    assert!(message.contains("Internal Server Error"));
                }
                other => panic!("Expected Api, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_empty_conversation_rejected_before_send() {
            let mock_server = MockServer::start().await;

            let gateway = gateway_for(&mock_server);
            let request = CompletionRequest::new("gpt-4o", vec![]);

            let result = gateway.complete(request).await;
            assert!(matches!(result, Err(GatewayError::InvalidRequest(_))));
        }

        #[tokio::test]
        async fn test_complete_timeout() {
            let mock_server = MockServer::start().await;

            Mock::given(matchers::method("POST"))
                .and(matchers::path("/chat/completions"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(&json!({
                            "id": "chatcmpl-123",
                            "model": "gpt-4o",
                            "choices": [],
                            "usage": null
                        }))
                        .set_delay(Duration::from_millis(200)),
                )
                .mount(&mock_server)
                .await;

            let gateway = gateway_for(&mock_server).with_timeout(Duration::from_millis(50));
            let request = CompletionRequest::new("gpt-4o", vec![Message::user("Hello")]);

            let result = gateway.complete(request).await;
            assert!(matches!(result, Err(GatewayError::Timeout(_))));
        }
    }
