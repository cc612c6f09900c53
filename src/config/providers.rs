use serde::{Deserialize, Serialize};

/// A supported translation backend vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Claude,
    Cohere,
    Google,
}

impl Provider {
    /// All supported providers, in display order.
    pub const ALL: [Self; 4] = [Self::OpenAi, Self::Claude, Self::Cohere, Self::Google];

    /// The stable string key used in settings files and wire requests.
    pub const fn key(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Claude => "claude",
            Self::Cohere => "cohere",
            Self::Google => "google",
        }
    }

    /// Parses a settings/UI key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.key() == key)
    }

    /// Environment variable holding this provider's API key.
    pub const fn secret_env_var(self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Claude => "ANTHROPIC_API_KEY",
            Self::Cohere => "COHERE_API_KEY",
            Self::Google => "GEMINI_API_KEY",
        }
    }
}

/// A specific model variant offered by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submodel {
    /// Human-readable name for selector UIs.
    pub display_name: &'static str,
    /// Identifier sent to the backend as the `model` field.
    pub id: &'static str,
}

const OPENAI_SUBMODELS: &[Submodel] = &[
    Submodel {
        display_name: "GPT-4o Mini",
        id: "gpt-4o-mini",
    },
    Submodel {
        display_name: "GPT-4o",
        id: "gpt-4o",
    },
    Submodel {
        display_name: "GPT-4 Turbo",
        id: "gpt-4-turbo",
    },
];

const CLAUDE_SUBMODELS: &[Submodel] = &[
    Submodel {
        display_name: "Claude 3.5 Sonnet",
        id: "claude-3-5-sonnet-20241022",
    },
    Submodel {
        display_name: "Claude 3.5 Haiku",
        id: "claude-3-5-haiku-20241022",
    },
    Submodel {
        display_name: "Claude 3 Opus",
        id: "claude-3-opus-20240229",
    },
];

const COHERE_SUBMODELS: &[Submodel] = &[
    Submodel {
        display_name: "Command R+",
        id: "command-r-plus",
    },
    Submodel {
        display_name: "Command R",
        id: "command-r",
    },
    Submodel {
        display_name: "Aya Expanse 32B",
        id: "c4ai-aya-expanse-32b",
    },
];

const GOOGLE_SUBMODELS: &[Submodel] = &[
    Submodel {
        display_name: "Gemini 1.5 Pro",
        id: "gemini-1.5-pro",
    },
    Submodel {
        display_name: "Gemini 1.5 Flash",
        id: "gemini-1.5-flash",
    },
    Submodel {
        display_name: "Gemini 2.0 Flash",
        id: "gemini-2.0-flash",
    },
];

/// Ordered submodel list for a provider. Non-empty for every variant; the
/// first entry is the default selected when switching to that provider.
pub const fn submodels_for(provider: Provider) -> &'static [Submodel] {
    match provider {
        Provider::OpenAi => OPENAI_SUBMODELS,
        Provider::Claude => CLAUDE_SUBMODELS,
        Provider::Cohere => COHERE_SUBMODELS,
        Provider::Google => GOOGLE_SUBMODELS,
    }
}
