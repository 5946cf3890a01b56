//! Demo tool implementations.

mod hello;
mod add;

pub use hello::HelloTool;
pub use add::AddTool;
