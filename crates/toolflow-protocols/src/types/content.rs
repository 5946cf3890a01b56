//! Message content types.

use serde::{Deserialize, Serialize};

/// Content of a message.
///
/// Model responses may carry several ordered text fragments (one per
/// vendor content block); `Fragments` preserves their boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Fragments(Vec<String>),
}

impl MessageContent {
    /// Get the full text of the message, fragments joined by newlines.
    pub fn text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Fragments(fragments) => fragments.join("\n"),
        }
    }

    /// Create content from an ordered fragment list, collapsing the
    /// trivial cases.
    pub fn from_fragments(mut fragments: Vec<String>) -> Self {
        match fragments.len() {
            0 => MessageContent::Text(String::new()),
            1 => MessageContent::Text(fragments.remove(0)),
            _ => MessageContent::Fragments(fragments),
        }
    }

    /// Whether the content is empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            MessageContent::Text(text) => text.is_empty(),
            MessageContent::Fragments(fragments) => fragments.iter().all(|f| f.is_empty()),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}
