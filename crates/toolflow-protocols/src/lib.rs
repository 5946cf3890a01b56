//! # ToolFlow Protocols
//!
//! Shared protocol definitions for the toolflow orchestrator.
//! Contains only types, traits, and errors - no implementations.
//!
//! ## Core Traits
//!
//! - [`ModelGateway`] - Trait for model backend integrations
//! - [`ToolBackend`] - Trait for tool backend integrations

pub mod error;
pub mod gateway;
pub mod tool;
pub mod types;

// Re-export core types and traits
pub use gateway::{CompletionRequest, ModelGateway, ModelResponse};
pub use tool::{
    AbortSignal, FailureKind, ToolBackend, ToolCallResult, ToolDescriptor, ToolOutcome, ToolReply,
};
pub use error::{BackendError, GatewayError, RegistryError, TurnError};
pub use types::*;
