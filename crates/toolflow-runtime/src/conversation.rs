//! Conversation store.

use toolflow_protocols::types::{Message, MessageRole};

/// The ordered log of messages replayed to the model on every request.
///
/// Append-only: messages are never removed or edited once pushed. Owned
/// by exactly one session and never shared across conversations.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Count messages with the given role.
    pub fn count_role(&self, role: MessageRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}
