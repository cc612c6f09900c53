use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use super::settings::TranslateSettings;
use crate::ui::Style;

/// How long a scheduled settings write may sit pending before hitting disk.
const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Manages loading and saving the translation settings file.
pub struct SettingsManager {
    settings_path: PathBuf,
    pending_save: Mutex<Option<JoinHandle<()>>>,
}

impl SettingsManager {
    /// Creates a manager backed by the default settings location.
    ///
    /// Settings are stored at `$XDG_CONFIG_HOME/llm-translate/settings.toml`
    /// or `~/.config/llm-translate/settings.toml` if `XDG_CONFIG_HOME` is
    /// not set.
    pub fn new() -> Result<Self> {
        let config_dir =
            dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(Self::with_path(
            config_dir.join("llm-translate").join("settings.toml"),
        ))
    }

    /// Creates a manager backed by an explicit path.
    pub const fn with_path(settings_path: PathBuf) -> Self {
        Self {
            settings_path,
            pending_save: Mutex::new(None),
        }
    }

    pub const fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    pub fn load(&self) -> Result<TranslateSettings> {
        let contents = fs::read_to_string(&self.settings_path).with_context(|| {
            format!(
                "Failed to read settings file: {}",
                self.settings_path.display()
            )
        })?;

        let mut settings: TranslateSettings =
            toml::from_str(&contents).context("Failed to parse settings file")?;
        settings.sanitize();

        Ok(settings)
    }

    /// Loads settings, falling back to defaults when the file is missing or
    /// unreadable. Partial files merge additively: present keys win, absent
    /// keys take defaults.
    pub fn load_or_default(&self) -> TranslateSettings {
        self.load().unwrap_or_default()
    }

    pub fn save(&self, settings: &TranslateSettings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;

        fs::write(&self.settings_path, contents).with_context(|| {
            format!(
                "Failed to write settings file: {}",
                self.settings_path.display()
            )
        })?;

        Ok(())
    }

    /// Schedules a fire-and-forget write of `settings`.
    ///
    /// A newer schedule supersedes a pending one, so rapid settings-UI
    /// changes collapse into a single write carrying the latest value. The
    /// write happens off the caller's path; failures surface as a stderr
    /// warning rather than an error.
    pub fn save_debounced(self: &Arc<Self>, settings: TranslateSettings) {
        let manager = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(SAVE_DEBOUNCE).await;
            if let Err(error) = manager.save(&settings) {
                eprintln!("{} {error:#}", Style::warning("Settings not saved:"));
            }
        });

        if let Ok(mut pending) = self.pending_save.lock()
            && let Some(previous) = pending.replace(handle)
        {
            previous.abort();
        }
    }
}
