//! The interception controller.
//!
//! One [`Interceptor::handle_event`] call covers the full life of a message
//! event: read a settings snapshot, check eligibility, dispatch to the
//! translation backend, and apply the result (or the original text, on
//! failure) back onto the message. Errors never escape into the host's
//! event-dispatch machinery.

use std::sync::{Arc, RwLock};

use crate::config::TranslateSettings;
use crate::host::{ChatHost, MessageEvent, MessageId};
use crate::message::Direction;
use crate::translation::{CredentialLookup, Translator};

/// Terminal state of one intercepted message event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Auto-translation was off for this direction; the message is untouched.
    Skipped,
    /// Translation succeeded and was applied.
    Applied,
    /// Translation failed; the original text was applied as the translation
    /// and the error was surfaced as a notice.
    AppliedFallback,
    /// The message no longer existed when the controller went to mutate it.
    Gone,
}

/// Orchestrates settings, translation dispatch, and message mutation for
/// message-lifecycle events.
pub struct Interceptor<T, C> {
    translator: T,
    settings: Arc<RwLock<TranslateSettings>>,
    credentials: C,
}

impl<T: Translator, C: CredentialLookup> Interceptor<T, C> {
    pub fn new(
        translator: T,
        settings: Arc<RwLock<TranslateSettings>>,
        credentials: C,
    ) -> Self {
        Self {
            translator,
            settings,
            credentials,
        }
    }

    /// The shared settings handle, for the settings UI to read and write.
    pub fn settings(&self) -> Arc<RwLock<TranslateSettings>> {
        Arc::clone(&self.settings)
    }

    pub const fn translator(&self) -> &T {
        &self.translator
    }

    /// Handles one message-rendered event from the host bus.
    ///
    /// Ineligible messages are left byte-for-byte unmodified.
    pub async fn handle_event(&self, host: &mut impl ChatHost, event: MessageEvent) -> Outcome {
        let snapshot = self.snapshot();
        if !snapshot.auto_mode.translates(event.direction()) {
            return Outcome::Skipped;
        }
        self.dispatch(host, event.id(), event.direction(), &snapshot)
            .await
    }

    /// Translates one message regardless of the auto-mode policy (the manual
    /// "translate this message" action).
    pub async fn translate_message(
        &self,
        host: &mut impl ChatHost,
        id: MessageId,
        direction: Direction,
    ) -> Outcome {
        let snapshot = self.snapshot();
        self.dispatch(host, id, direction, &snapshot).await
    }

    /// Settings may change while a call is in flight; everything after this
    /// point uses the value read at dispatch time, never a re-read.
    fn snapshot(&self) -> TranslateSettings {
        match self.settings.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn dispatch(
        &self,
        host: &mut impl ChatHost,
        id: MessageId,
        direction: Direction,
        snapshot: &TranslateSettings,
    ) -> Outcome {
        let raw = match host.message_mut(id) {
            Some(message) => message.text.clone(),
            None => return Outcome::Gone,
        };

        // Incoming text has host macros expanded before translation so
        // variables like the speaker name are captured, not translated away.
        let source = match direction {
            Direction::Incoming => host.substitute_params(&raw),
            Direction::Outgoing => raw,
        };

        let result = self
            .translator
            .translate(&source, snapshot, &self.credentials)
            .await;

        let (translated, outcome) = match result {
            Ok(translated) => (translated, Outcome::Applied),
            Err(error) => {
                host.notify_error(&error.to_string());
                (source, Outcome::AppliedFallback)
            }
        };

        // The message may have been deleted while the remote call was in
        // flight; a stale id resolves to nothing and we drop the result.
        let Some(message) = host.message_mut(id) else {
            return Outcome::Gone;
        };

        match direction {
            Direction::Incoming => message.apply_incoming(translated),
            Direction::Outgoing => message.apply_outgoing(translated),
        }

        host.refresh_message(id);
        outcome
    }
}
