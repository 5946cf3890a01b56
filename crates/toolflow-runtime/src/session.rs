//! Chat sessions.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use toolflow_protocols::error::TurnError;
use toolflow_protocols::tool::{AbortSignal, ToolDescriptor};

use crate::conversation::Conversation;
use crate::orchestrator::{Orchestrator, TurnOutcome};

/// One interactive conversation: an orchestrator paired with the
/// conversation it owns, under a session id for log correlation.
pub struct ChatSession {
    id: String,
    created_at: DateTime<Utc>,
    orchestrator: Orchestrator,
    conversation: Conversation,
}

impl ChatSession {
    /// Create a session and perform the initial tool fetch.
    pub async fn start(orchestrator: Orchestrator) -> Result<Self, TurnError> {
        orchestrator.sync_tools().await?;
        let session = Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            orchestrator,
            conversation: Conversation::new(),
        };
        info!("Chat session {} started", session.id);
        Ok(session)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Tools currently advertised to the model.
    pub fn tools(&self) -> Vec<ToolDescriptor> {
        self.orchestrator.tools()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Run one user turn.
    pub async fn send(
        &mut self,
        input: impl Into<String>,
        abort: &AbortSignal,
    ) -> Result<TurnOutcome, TurnError> {
        self.orchestrator
            .run_turn(&mut self.conversation, input, abort)
            .await
    }

    /// Retry the current turn after a failure, without re-appending
    /// input.
    pub async fn retry(&mut self, abort: &AbortSignal) -> Result<TurnOutcome, TurnError> {
        self.orchestrator
            .resume_turn(&mut self.conversation, abort)
            .await
    }
}
