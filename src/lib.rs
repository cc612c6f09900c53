//! # llm-translate - LLM chat translation adapter
//!
//! `llm-translate` sits between a chat application and an LLM translation
//! backend. It watches message-lifecycle events, sends eligible message text
//! to a configurable provider, and writes the translated result back onto the
//! message record without losing the original.
//!
//! ## How it fits together
//!
//! The host application implements [`host::ChatHost`] (message lookup, macro
//! substitution, re-render, notices) and forwards its two message events as
//! [`host::MessageEvent`] values to an [`intercept::Interceptor`]. The
//! interceptor reads a settings snapshot, calls the translation backend via
//! [`translation::TranslationClient`], and applies the result with the
//! mutation primitives on [`message::ChatMessage`].
//!
//! Incoming messages are translated for display only: the authoritative
//! `text` keeps the original language and the translation lands in the
//! display override. Outgoing messages are translated for transmission:
//! `text` becomes the translation and the display override keeps what the
//! user actually typed.
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/llm-translate/settings.toml`:
//!
//! ```toml
//! provider = "openai"
//! submodel = "gpt-4o-mini"
//! auto_mode = "responses"
//! target_language = "Japanese"
//! ```

/// Provider catalog, translation settings, and settings persistence.
pub mod config;

/// Traits implemented by the embedding chat application.
pub mod host;

/// The interception controller: eligibility, dispatch, apply, fallback.
pub mod intercept;

/// Chat message records and display-text mutation.
pub mod message;

/// Prompt building and the HTTP translation client.
pub mod translation;

/// Terminal styling for user-visible notices.
pub mod ui;
