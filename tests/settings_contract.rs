//! Settings contract tests.
//!
//! These tests verify the configuration invariants: every provider offers an
//! ordered, non-empty submodel list, switching provider resets the submodel,
//! and persisted settings merge additively and idempotently with defaults.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::sync::Arc;

use llm_translate::config::{
    AutoMode, Provider, SettingsError, SettingsManager, TranslateSettings, submodels_for,
};
use tempfile::TempDir;

#[test]
fn test_every_provider_has_ordered_submodels() {
    for provider in Provider::ALL {
        let submodels = submodels_for(provider);
        assert!(!submodels.is_empty());

        // Switching to the provider selects the first entry.
        let mut settings = TranslateSettings::default();
        settings.set_provider(provider.key()).unwrap();
        assert_eq!(settings.submodel, submodels[0].id);
    }
}

#[test]
fn test_set_submodel_validates_against_current_provider() {
    let mut settings = TranslateSettings::default();
    settings.set_provider("google").unwrap();

    assert!(settings.set_submodel("gemini-1.5-flash").is_ok());
    assert!(matches!(
        settings.set_submodel("command-r"),
        Err(SettingsError::InvalidSubmodel { .. })
    ));
    assert_eq!(settings.submodel, "gemini-1.5-flash");
}

#[test]
fn test_persisted_merge_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let manager = SettingsManager::with_path(temp_dir.path().join("settings.toml"));

    fs::write(manager.settings_path(), "auto_mode = \"inputs\"\n").unwrap();

    // load(load(partial)) == load(partial): saving what we loaded and
    // loading again must not change anything.
    let first = manager.load_or_default();
    manager.save(&first).unwrap();
    let second = manager.load_or_default();

    assert_eq!(first, second);
    assert_eq!(first.auto_mode, AutoMode::Inputs);
    assert_eq!(first.provider, TranslateSettings::default().provider);
}

#[test]
fn test_missing_settings_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let manager = SettingsManager::with_path(temp_dir.path().join("settings.toml"));

    assert_eq!(manager.load_or_default(), TranslateSettings::default());
}

#[tokio::test]
async fn test_debounced_saves_collapse_to_latest() {
    let temp_dir = TempDir::new().unwrap();
    let manager = Arc::new(SettingsManager::with_path(
        temp_dir.path().join("settings.toml"),
    ));

    for language in ["French", "German", "Korean"] {
        manager.save_debounced(TranslateSettings {
            target_language: language.to_string(),
            ..TranslateSettings::default()
        });
    }

    tokio::time::sleep(std::time::Duration::from_millis(800)).await;

    assert_eq!(manager.load_or_default().target_language, "Korean");
}
