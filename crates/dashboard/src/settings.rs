//! Dashboard Settings

use asset_loader::AnimationConfig;
use serde::{Deserialize, Serialize};

/// Server and artifact settings.
///
/// Defaults point at the checked-in artifacts; an optional
/// `earlyguard.toml` next to the binary overrides them. There is no
/// CLI or environment-variable surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Serialized model weight bundle
    pub model_path: String,
    /// Ordered model-column list
    pub columns_path: String,
    /// Decorative background image
    pub background_path: String,
    /// Lottie animation sources
    pub animations: AnimationConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            model_path: "artifacts/dropout_model.json".to_string(),
            columns_path: "artifacts/model_columns.json".to_string(),
            background_path: "assets/background.jpg".to_string(),
            animations: AnimationConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings: defaults layered under an optional `earlyguard.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();
        let animations = &defaults.animations;

        config::Config::builder()
            .set_default("listen_addr", defaults.listen_addr.as_str())?
            .set_default("model_path", defaults.model_path.as_str())?
            .set_default("columns_path", defaults.columns_path.as_str())?
            .set_default("background_path", defaults.background_path.as_str())?
            .set_default("animations.education_url", animations.education_url.as_str())?
            .set_default("animations.success_url", animations.success_url.as_str())?
            .set_default("animations.warning_url", animations.warning_url.as_str())?
            .add_source(config::File::with_name("earlyguard").required(false))
            .build()?
            .try_deserialize()
    }
}
