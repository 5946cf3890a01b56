//! Turn observation hooks.

use toolflow_protocols::tool::ToolCallResult;
use toolflow_protocols::types::ToolCallRequest;

/// Observer notified as a turn progresses.
///
/// All methods default to no-ops. Called synchronously from the
/// orchestration loop, so implementations should return quickly.
pub trait TurnObserver: Send + Sync {
    /// Assistant text produced in one round.
    fn on_assistant_text(&self, _text: &str) {}

    /// A tool call is about to be dispatched.
    fn on_tool_call(&self, _call: &ToolCallRequest) {}

    /// A dispatched tool call resolved.
    fn on_tool_result(&self, _result: &ToolCallResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
