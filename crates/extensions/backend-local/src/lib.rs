//! In-process tool backend for ToolFlow.
//!
//! Hosts [`LocalTool`] implementations behind the neutral `ToolBackend`
//! surface. The advertised tool list lives in a shared `ToolRegistry`,
//! and tool bodies receive a handle to it, so a tool can enable or
//! disable other tools mid-conversation.

mod backend;
mod tool;
mod tools;

pub use backend::LocalToolBackend;
pub use tool::{LocalTool, ToolEnv};
pub use tools::{AddTool, HelloTool};
