//! Model gateway trait definition.

use async_trait::async_trait;

use super::{CompletionRequest, ModelResponse};
use crate::error::GatewayError;

/// Core trait for model backends.
///
/// One call, one outbound request, one normalized response. The gateway
/// never touches the conversation; the caller decides what to append.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Returns the gateway ID.
    fn id(&self) -> &str;

    /// Generate a completion.
    async fn complete(&self, request: CompletionRequest) -> Result<ModelResponse, GatewayError>;
}
