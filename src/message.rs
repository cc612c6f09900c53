use serde::{Deserialize, Serialize};

/// Which way a message travels relative to the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// A message received from a remote speaker.
    Incoming,
    /// A message typed by the local user.
    Outgoing,
}

/// Optional per-message metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageExtra {
    /// Text shown to the user instead of [`ChatMessage::text`], if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

/// One entry in the host's chat history.
///
/// The host owns the history; this crate only mutates records in place.
/// `text` is the authoritative content that downstream logic (context
/// building, search, export) operates on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<MessageExtra>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: None,
        }
    }

    /// The text shown to the user: the display override if present, else `text`.
    pub fn display_text(&self) -> &str {
        self.extra
            .as_ref()
            .and_then(|extra| extra.display_text.as_deref())
            .unwrap_or(&self.text)
    }

    /// Applies an incoming translation.
    ///
    /// Display-only: `text` keeps the original language so downstream logic
    /// still sees what the speaker wrote.
    pub fn apply_incoming(&mut self, translated: String) {
        self.extra.get_or_insert_with(MessageExtra::default).display_text = Some(translated);
    }

    /// Applies an outgoing translation.
    ///
    /// `text` becomes the translation (that is what gets transmitted) and the
    /// pre-translation original is kept as the display override so the user
    /// can see what they actually typed.
    pub fn apply_outgoing(&mut self, translated: String) {
        let original = std::mem::replace(&mut self.text, translated);
        self.extra.get_or_insert_with(MessageExtra::default).display_text = Some(original);
    }
}
