//! Tool backend errors.

use thiserror::Error;

/// Errors raised by tool backends.
///
/// The dispatcher absorbs all of these into tool-result failures; none
/// escape the orchestration loop. `Failed` carries a message the tool
/// author intends the caller to see; `Internal` carries detail that the
/// masking policy may hide.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("{0}")]
    Failed(String),

    #[error("{0}")]
    Internal(String),

    #[error("Tool call timed out after {0} seconds")]
    Timeout(u64),

    #[error("Tool backend unavailable: {0}")]
    Unavailable(String),
}
