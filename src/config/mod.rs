mod manager;
mod providers;
mod settings;

pub use manager::SettingsManager;
pub use providers::{Provider, Submodel, submodels_for};
pub use settings::{AutoMode, SettingsError, TranslateSettings};
