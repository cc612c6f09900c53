use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::prompt::build_prompt;
use crate::config::{Provider, TranslateSettings};

/// Resolves the API key for a provider.
///
/// Keyed lookups let the host keep secrets wherever it already keeps them
/// (secret store, keychain, environment). Lookups are shared across
/// concurrent translations, hence the `Send + Sync` bound.
pub trait CredentialLookup: Send + Sync {
    fn secret_for(&self, provider: Provider) -> Option<String>;
}

/// Reads API keys from per-provider environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialLookup for EnvCredentials {
    fn secret_for(&self, provider: Provider) -> Option<String> {
        std::env::var(provider.secret_env_var())
            .ok()
            .filter(|key| !key.is_empty())
    }
}

/// A fixed in-memory credential map.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    secrets: HashMap<Provider, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, provider: Provider, secret: impl Into<String>) -> Self {
        self.secrets.insert(provider, secret.into());
        self
    }
}

impl CredentialLookup for StaticCredentials {
    fn secret_for(&self, provider: Provider) -> Option<String> {
        self.secrets.get(&provider).cloned()
    }
}

#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    provider: &'static str,
    model: &'a str,
    prompt: String,
    text: &'a str,
    target_language: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    translation: Option<String>,
}

/// Why a translation attempt produced no translated text.
///
/// None of these are fatal: callers degrade to the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// No API key configured for the selected provider. The remote endpoint
    /// is never contacted in this case.
    MissingCredential(Provider),
    /// The remote call failed: network error or non-success status.
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// The response body was not `{"translation": "..."}`.
    MalformedResponse,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential(provider) => {
                write!(
                    f,
                    "No API key configured for provider '{}' (set {})",
                    provider.key(),
                    provider.secret_env_var()
                )
            }
            Self::Transport {
                status: Some(status),
                message,
            } => {
                write!(f, "Translation request failed with status {status}: {message}")
            }
            Self::Transport {
                status: None,
                message,
            } => {
                write!(f, "Translation request failed: {message}")
            }
            Self::MalformedResponse => {
                write!(f, "Translation response was missing the translated text")
            }
        }
    }
}

impl std::error::Error for TranslateError {}

/// A translation backend.
///
/// The interception controller depends on this seam rather than on the HTTP
/// client directly.
pub trait Translator {
    /// Translates `text` using a settings snapshot taken at dispatch time.
    fn translate(
        &self,
        text: &str,
        settings: &TranslateSettings,
        credentials: &dyn CredentialLookup,
    ) -> impl Future<Output = Result<String, TranslateError>> + Send;
}

/// HTTP client for the remote translation endpoint.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl Translator for TranslationClient {
    async fn translate(
        &self,
        text: &str,
        settings: &TranslateSettings,
        credentials: &dyn CredentialLookup,
    ) -> Result<String, TranslateError> {
        let Some(secret) = credentials.secret_for(settings.provider) else {
            return Err(TranslateError::MissingCredential(settings.provider));
        };

        let prompt = build_prompt(
            &settings.translation_prompt,
            &settings.target_language,
            text,
        );

        let request = TranslationRequest {
            provider: settings.provider.key(),
            model: &settings.submodel,
            prompt,
            text,
            target_language: &settings.target_language,
        };

        let url = format!("{}/api/translate", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {secret}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslateError::Transport {
                status: None,
                message: format!("failed to reach {url}: {e}"),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(TranslateError::Transport {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        parse_translation_body(&body)
    }
}

fn parse_translation_body(body: &str) -> Result<String, TranslateError> {
    let response: TranslationResponse =
        serde_json::from_str(body).map_err(|_| TranslateError::MalformedResponse)?;

    response.translation.ok_or(TranslateError::MalformedResponse)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_translation_body_success() {
        let body = "{\"translation\": \"Bonjour\"}";
        assert_eq!(parse_translation_body(body).unwrap(), "Bonjour");
    }

    #[test]
    fn test_parse_translation_body_missing_field() {
        assert_eq!(
            parse_translation_body("{}"),
            Err(TranslateError::MalformedResponse)
        );
        assert_eq!(
            parse_translation_body("{\"translation\": null}"),
            Err(TranslateError::MalformedResponse)
        );
    }

    #[test]
    fn test_parse_translation_body_not_json() {
        assert_eq!(
            parse_translation_body("internal server error"),
            Err(TranslateError::MalformedResponse)
        );
    }

    #[test]
    fn test_static_credentials_lookup() {
        let credentials =
            StaticCredentials::new().with_secret(Provider::Claude, "sk-ant-test");

        assert_eq!(
            credentials.secret_for(Provider::Claude),
            Some("sk-ant-test".to_string())
        );
        assert_eq!(credentials.secret_for(Provider::OpenAi), None);
    }

    #[test]
    #[serial]
    fn test_env_credentials_reads_provider_var() {
        // SAFETY: serialized test; only touches the provider's own env var
        unsafe {
            std::env::set_var("COHERE_API_KEY", "co-test-key");
        }

        assert_eq!(
            EnvCredentials.secret_for(Provider::Cohere),
            Some("co-test-key".to_string())
        );

        // SAFETY: cleanup
        unsafe {
            std::env::remove_var("COHERE_API_KEY");
        }

        assert_eq!(EnvCredentials.secret_for(Provider::Cohere), None);
    }

    #[test]
    #[serial]
    fn test_env_credentials_ignores_empty_var() {
        // SAFETY: serialized test; only touches the provider's own env var
        unsafe {
            std::env::set_var("GEMINI_API_KEY", "");
        }

        assert_eq!(EnvCredentials.secret_for(Provider::Google), None);

        // SAFETY: cleanup
        unsafe {
            std::env::remove_var("GEMINI_API_KEY");
        }
    }

    #[tokio::test]
    async fn test_missing_credential_skips_network() {
        // The endpoint is unreachable on purpose: if the client attempted a
        // request we would see a Transport error instead.
        let client = TranslationClient::new("http://127.0.0.1:9".to_string());
        let settings = TranslateSettings::default();

        let result = client
            .translate("Hello", &settings, &StaticCredentials::new())
            .await;

        assert_eq!(
            result,
            Err(TranslateError::MissingCredential(settings.provider))
        );
    }
}
