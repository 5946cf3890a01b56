//! Anthropic Messages API gateway for ToolFlow.

mod api;
mod converter;
mod gateway;
mod parser;

pub use gateway::AnthropicGateway;
