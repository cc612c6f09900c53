use serde::{Deserialize, Serialize};
use std::fmt;

use super::providers::{Provider, submodels_for};
use crate::message::Direction;
use crate::translation::DEFAULT_PROMPT_TEMPLATE;

/// Which message directions are translated automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoMode {
    /// No automatic translation.
    #[default]
    None,
    /// Translate incoming (character) messages.
    Responses,
    /// Translate outgoing (user) messages.
    Inputs,
    /// Translate both directions.
    Both,
}

impl AutoMode {
    /// Whether this mode auto-translates messages in `direction`.
    pub const fn translates(self, direction: Direction) -> bool {
        match (self, direction) {
            (Self::Both, _)
            | (Self::Responses, Direction::Incoming)
            | (Self::Inputs, Direction::Outgoing) => true,
            _ => false,
        }
    }
}

/// Translation settings, one instance per application session.
///
/// Every field carries a serde default so a partial persisted file merges
/// additively: present keys win, absent keys take defaults. Deserializing
/// the same input twice yields the same value, so the merge is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateSettings {
    /// Selected translation backend.
    pub provider: Provider,
    /// Selected model id; must belong to `provider`'s submodel list.
    pub submodel: String,
    /// Automatic translation policy.
    pub auto_mode: AutoMode,
    /// Prompt template with `{target_language}` and `{text}` placeholders.
    pub translation_prompt: String,
    /// Desired output language name or code.
    pub target_language: String,
}

impl Default for TranslateSettings {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            submodel: submodels_for(Provider::OpenAi)[0].id.to_string(),
            auto_mode: AutoMode::None,
            translation_prompt: DEFAULT_PROMPT_TEMPLATE.to_string(),
            target_language: "English".to_string(),
        }
    }
}

impl TranslateSettings {
    /// Switches the provider, resetting `submodel` to the first entry of the
    /// new provider's list.
    pub fn set_provider(&mut self, key: &str) -> Result<Provider, SettingsError> {
        let provider = Provider::from_key(key)
            .ok_or_else(|| SettingsError::InvalidProvider(key.to_string()))?;
        self.provider = provider;
        self.submodel = submodels_for(provider)[0].id.to_string();
        Ok(provider)
    }

    /// Selects a submodel of the current provider.
    pub fn set_submodel(&mut self, id: &str) -> Result<(), SettingsError> {
        if submodels_for(self.provider)
            .iter()
            .any(|submodel| submodel.id == id)
        {
            self.submodel = id.to_string();
            Ok(())
        } else {
            Err(SettingsError::InvalidSubmodel {
                submodel: id.to_string(),
                provider: self.provider,
            })
        }
    }

    /// Restores the provider/submodel invariant after deserializing persisted
    /// input: a submodel that is not in the provider's list resets to the
    /// first entry. Idempotent.
    pub fn sanitize(&mut self) {
        let submodels = submodels_for(self.provider);
        if !submodels.iter().any(|s| s.id == self.submodel) {
            self.submodel = submodels[0].id.to_string();
        }
    }
}

/// Configuration misuse; surfaced to the caller rather than swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The provider key is not a recognized vendor.
    InvalidProvider(String),
    /// The submodel id is not in the current provider's list.
    InvalidSubmodel { submodel: String, provider: Provider },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProvider(key) => {
                let known: Vec<&str> = Provider::ALL.iter().map(|p| p.key()).collect();
                write!(
                    f,
                    "Unknown provider '{key}'\n\nAvailable providers: {}",
                    known.join(", ")
                )
            }
            Self::InvalidSubmodel { submodel, provider } => {
                let available: Vec<&str> = submodels_for(*provider)
                    .iter()
                    .map(|s| s.id)
                    .collect();
                write!(
                    f,
                    "Model '{submodel}' is not available for provider '{}'\n\nAvailable models: {}",
                    provider.key(),
                    available.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for SettingsError {}
