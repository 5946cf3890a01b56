//! Tool registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Tool not registered: {0}")]
    NotFound(String),

    #[error("Tool already registered: {0}")]
    AlreadyRegistered(String),
}
