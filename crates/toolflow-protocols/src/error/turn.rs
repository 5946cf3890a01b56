//! Turn-level errors surfaced by the orchestration loop.

use thiserror::Error;

use super::{BackendError, GatewayError};

/// Failures that escape a turn to the user-visible layer.
///
/// Tool-level problems never appear here; they are fed back into the
/// conversation as tool results instead.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("Model gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Tool backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Tool-call round limit exceeded after {0} rounds")]
    RoundLimitExceeded(u32),

    #[error("Turn aborted")]
    Aborted,

    #[error("Conversation is empty")]
    EmptyConversation,
}
