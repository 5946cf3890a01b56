//! # ToolFlow Core
//!
//! The tool registry: the set of tools currently advertised to the
//! model, with per-tool enabled flags and a change-notification hook.

pub mod registry;

pub use registry::ToolRegistry;
