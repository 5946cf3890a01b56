//! Orchestration loop.
//!
//! One user turn runs the gateway with the full conversation and the
//! currently advertised tools, appends the assistant message, executes
//! any requested tool calls, appends their results in request order,
//! and requests again until a response carries no tool calls. The tool
//! list is re-read every round so tools enabled or disabled mid-turn
//! are visible to the model's next decision.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use toolflow_core::registry::ToolRegistry;
use toolflow_protocols::error::TurnError;
use toolflow_protocols::gateway::{CompletionRequest, ModelGateway};
use toolflow_protocols::tool::{AbortSignal, ToolBackend, ToolDescriptor};
use toolflow_protocols::types::{Message, StopReason, Usage};

use crate::conversation::Conversation;
use crate::dispatcher::ToolDispatcher;
use crate::observer::{NoopObserver, TurnObserver};

/// Configuration for the orchestration loop.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Model name sent with every request.
    pub model: String,

    /// System prompt, if any.
    pub system_prompt: Option<String>,

    /// Token budget per completion.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Cap on tool-call rounds per turn. `0` disables the cap.
    pub max_tool_rounds: u32,
}

impl OrchestratorConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: None,
            max_tokens: Some(1000),
            temperature: None,
            max_tool_rounds: 8,
        }
    }

    /// Set the system prompt.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Set the per-completion token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the tool-call round cap. `0` disables it.
    pub fn with_max_tool_rounds(mut self, max_tool_rounds: u32) -> Self {
        self.max_tool_rounds = max_tool_rounds;
        self
    }
}

/// What a completed turn returns to the caller.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Final assistant text.
    pub final_text: String,

    /// Gateway calls made: 1 plus the number of tool-call rounds.
    pub rounds: u32,

    /// Token usage aggregated across rounds.
    pub usage: Usage,
}

/// Drives one conversation, strictly sequentially.
///
/// Owns a registry mirroring what the backend advertises; the backend's
/// change signal invalidates it. Gateway errors escape as turn failures
/// with the conversation left intact for retry; tool failures never
/// escape, they are fed back to the model as tool-result content.
pub struct Orchestrator {
    gateway: Arc<dyn ModelGateway>,
    backend: Arc<dyn ToolBackend>,
    registry: ToolRegistry,
    dispatcher: ToolDispatcher,
    config: OrchestratorConfig,
    observer: Arc<dyn TurnObserver>,
    changes_rx: watch::Receiver<u64>,
}

impl Orchestrator {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        backend: Arc<dyn ToolBackend>,
        dispatcher: ToolDispatcher,
        config: OrchestratorConfig,
    ) -> Self {
        let changes_rx = backend.changes();
        Self {
            gateway,
            backend,
            registry: ToolRegistry::new(),
            dispatcher,
            config,
            observer: Arc::new(NoopObserver),
            changes_rx,
        }
    }

    /// Set the turn observer.
    pub fn with_observer(mut self, observer: Arc<dyn TurnObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Fetch the backend's advertised tools into the registry.
    ///
    /// Sessions call this once at startup; afterwards the loop
    /// re-fetches whenever the backend signals a change.
    pub async fn sync_tools(&self) -> Result<(), TurnError> {
        let descriptors = self.backend.list_tools().await?;
        info!(
            "Synced {} tools from backend '{}'",
            descriptors.len(),
            self.backend.id()
        );
        if let Err(err) = self.registry.replace(descriptors) {
            warn!("Synced tool list rejected: {}", err);
        }
        Ok(())
    }

    /// Currently advertised tools.
    pub fn tools(&self) -> Vec<ToolDescriptor> {
        self.registry.enabled_tools()
    }

    /// Run one user turn: append the input and drive rounds until the
    /// model answers without tool calls.
    pub async fn run_turn(
        &mut self,
        conversation: &mut Conversation,
        input: impl Into<String>,
        abort: &AbortSignal,
    ) -> Result<TurnOutcome, TurnError> {
        conversation.push(Message::user(input));
        self.drive(conversation, abort).await
    }

    /// Drive rounds on the conversation as it stands, without appending
    /// input. Retry path after a failed turn.
    pub async fn resume_turn(
        &mut self,
        conversation: &mut Conversation,
        abort: &AbortSignal,
    ) -> Result<TurnOutcome, TurnError> {
        if conversation.is_empty() {
            return Err(TurnError::EmptyConversation);
        }
        self.drive(conversation, abort).await
    }

    async fn drive(
        &mut self,
        conversation: &mut Conversation,
        abort: &AbortSignal,
    ) -> Result<TurnOutcome, TurnError> {
        let mut rounds = 0u32;
        let mut usage = Usage::default();

        loop {
            if abort.is_aborted() {
                info!("Turn aborted after {} rounds", rounds);
                return Err(TurnError::Aborted);
            }

            self.refresh_tools_if_changed().await;

            rounds += 1;
            let request = self.build_request(conversation.messages());
            debug!(
                "Requesting round {} with {} tools, {} messages",
                rounds,
                request.tools.len(),
                request.messages.len()
            );

            let response = self.gateway.complete(request).await?;
            usage.accumulate(&response.usage);
            conversation.push(response.assistant_message());

            let text = response.text();
            if !text.is_empty() {
                self.observer.on_assistant_text(&text);
            }

            if !response.wants_tools() {
                if response.stop_reason == StopReason::MaxTokens {
                    warn!("Completion truncated at the token limit");
                }
                info!("Turn complete in {} rounds", rounds);
                return Ok(TurnOutcome {
                    final_text: text,
                    rounds,
                    usage,
                });
            }

            let cap = self.config.max_tool_rounds;
            if cap > 0 && rounds > cap {
                warn!("Model still wants tools after {} tool-call rounds", cap);
                return Err(TurnError::RoundLimitExceeded(cap));
            }

            for call in &response.tool_calls {
                self.observer.on_tool_call(call);
            }
            let results = self.dispatcher.dispatch_all(&response.tool_calls).await;
            for result in results {
                self.observer.on_tool_result(&result);
                conversation.push(Message::tool_result(&result.request_id, result.content()));
            }
        }
    }

    async fn refresh_tools_if_changed(&mut self) {
        match self.changes_rx.has_changed() {
            Ok(true) => {
                self.changes_rx.mark_unchanged();
                self.refresh_tools().await;
            }
            Ok(false) => {}
            // Sender dropped: the backend is gone. Keep the current
            // snapshot; the next call_tool will surface the failure.
            Err(_) => {}
        }
    }

    async fn refresh_tools(&self) {
        match self.backend.list_tools().await {
            Ok(descriptors) => {
                debug!("Tool list refreshed: {} tools", descriptors.len());
                if let Err(err) = self.registry.replace(descriptors) {
                    warn!(
                        "Refreshed tool list rejected: {}; keeping current snapshot",
                        err
                    );
                }
            }
            Err(err) => {
                warn!("Tool list refresh failed: {}; keeping current snapshot", err);
            }
        }
    }

    fn build_request(&self, messages: &[Message]) -> CompletionRequest {
        let mut request = CompletionRequest::new(self.config.model.clone(), messages.to_vec())
            .with_tools(self.registry.enabled_tools());

        if let Some(ref system) = self.config.system_prompt {
            request = request.with_system(system.clone());
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }

        request
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
