//! OpenAI Chat Completions gateway implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use toolflow_protocols::error::GatewayError;
use toolflow_protocols::gateway::{CompletionRequest, ModelGateway, ModelResponse};

use crate::api::{ApiRequest, ApiResponse};
use crate::converter::build_api_request;
use crate::parser::parse_response;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Model gateway backed by the OpenAI Chat Completions API.
///
/// The base URL is configurable, which also covers OpenAI-compatible
/// servers.
pub struct OpenAiGateway {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OpenAiGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn send_request(&self, api_request: &ApiRequest) -> Result<reqwest::Response, GatewayError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(api_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout(self.timeout.as_secs())
                } else {
                    GatewayError::Unavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            let body = response.text().await.unwrap_or_default();
            // Error body shape: {"error": {"message": "...", "type": "..."}}
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(String::from))
                .unwrap_or(body);
            return Err(GatewayError::from_api_response(status, message, retry_after));
        }

        Ok(response)
    }
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    fn id(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<ModelResponse, GatewayError> {
        if request.messages.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "conversation is empty".to_string(),
            ));
        }

        let api_request = build_api_request(&request);
        debug!(
            "OpenAI request: model={} messages={} tools={}",
            api_request.model,
            api_request.messages.len(),
            api_request.tools.len()
        );

        let response = self.send_request(&api_request).await?;
        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Protocol(e.to_string()))?;
        parse_response(api_response)
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
