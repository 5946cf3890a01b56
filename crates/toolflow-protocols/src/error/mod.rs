//! Error types for the toolflow protocol layer.

mod gateway;
mod backend;
mod registry;
mod turn;

pub use gateway::*;
pub use backend::*;
pub use registry::*;
pub use turn::*;
