//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub dispatcher: DispatcherConfig,

    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    #[serde(default)]
    pub trace: TraceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chat loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Provider ID to route completions through.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model name; falls back to the provider's default model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// System prompt sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// Max tokens per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Max tool-call rounds per turn; 0 disables the cap.
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: u32,

    /// Model request timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Per-tool-call timeout; 0 disables it.
    #[serde(default = "default_tool_timeout")]
    pub tool_timeout_seconds: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: None,
            system_prompt: None,
            max_tokens: default_max_tokens(),
            temperature: None,
            max_tool_rounds: default_max_tool_rounds(),
            request_timeout_seconds: default_request_timeout(),
            tool_timeout_seconds: default_tool_timeout(),
        }
    }
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_max_tool_rounds() -> u32 {
    8
}

fn default_request_timeout() -> u64 {
    60
}

fn default_tool_timeout() -> u64 {
    30
}

/// Tool dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Hide internal tool error detail from the model.
    #[serde(default)]
    pub mask_errors: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self { mask_errors: false }
    }
}

/// Provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key; `${ENV_VAR}` references are expanded at load time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override the API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Model used when `chat.model` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

/// Trace output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Print each tool call and its result as it happens.
    #[serde(default = "default_show_tool_calls")]
    pub show_tool_calls: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            show_tool_calls: default_show_tool_calls(),
        }
    }
}

fn default_show_tool_calls() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs to a rolling file under `dir`.
    #[serde(default)]
    pub file_enabled: bool,

    /// Log directory for the rolling file appender.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}
