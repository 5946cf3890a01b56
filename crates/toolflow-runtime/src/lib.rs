//! # ToolFlow Runtime
//!
//! The tool-augmented conversation loop: conversation store, tool
//! dispatch, turn orchestration, and chat sessions.

pub mod conversation;
pub mod dispatcher;
pub mod observer;
pub mod orchestrator;
pub mod session;

pub use conversation::Conversation;
pub use dispatcher::{MaskingPolicy, ToolDispatcher};
pub use observer::{NoopObserver, TurnObserver};
pub use orchestrator::{Orchestrator, OrchestratorConfig, TurnOutcome};
pub use session::ChatSession;
