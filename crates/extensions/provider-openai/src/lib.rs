//! OpenAI Chat Completions gateway for ToolFlow.

mod api;
mod converter;
mod gateway;
mod parser;

pub use gateway::OpenAiGateway;
