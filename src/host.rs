use crate::message::{ChatMessage, Direction};
use crate::ui::Style;

/// Index of a message in the host-owned chat history.
pub type MessageId = usize;

/// Message-lifecycle events delivered by the host's event bus.
///
/// The host adapter maps whatever its real event system emits onto these two
/// variants and forwards them to the interceptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEvent {
    /// A character (incoming) message finished rendering.
    IncomingRendered(MessageId),
    /// A user (outgoing) message finished rendering.
    OutgoingRendered(MessageId),
}

impl MessageEvent {
    pub const fn id(self) -> MessageId {
        match self {
            Self::IncomingRendered(id) | Self::OutgoingRendered(id) => id,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::IncomingRendered(_) => Direction::Incoming,
            Self::OutgoingRendered(_) => Direction::Outgoing,
        }
    }
}

/// The narrow surface of the embedding chat application this crate depends
/// on. The core never touches the host's concrete event bus or store.
pub trait ChatHost {
    /// Resolves a message id to a mutable record.
    ///
    /// Returns `None` when the message no longer exists (deleted or swiped
    /// away while a translation was in flight); callers treat that as a
    /// silent no-op.
    fn message_mut(&mut self, id: MessageId) -> Option<&mut ChatMessage>;

    /// Expands host macros (speaker name, persona, ...) in message text.
    /// Incoming text goes through this before translation so the variables
    /// are captured in the source language.
    fn substitute_params(&self, text: &str) -> String;

    /// Asks the host to redraw the message's visual block. Idempotent; safe
    /// to invoke more than once for the same message.
    fn refresh_message(&mut self, id: MessageId);

    /// Surfaces a non-fatal, user-visible translation error.
    fn notify_error(&self, message: &str) {
        eprintln!("{} {message}", Style::error("Translation error:"));
    }
}
