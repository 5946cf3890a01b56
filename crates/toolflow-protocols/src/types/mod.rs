//! Common types shared across the toolflow workspace.

mod message;
mod content;
mod common;

pub use message::*;
pub use content::*;
pub use common::*;
