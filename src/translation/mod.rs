mod client;
mod prompt;

pub use client::{
    CredentialLookup, EnvCredentials, StaticCredentials, TranslateError, TranslationClient,
    Translator,
};
pub use prompt::{DEFAULT_PROMPT_TEMPLATE, build_prompt};
