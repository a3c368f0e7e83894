use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// The config selects the starting palette only; the runtime toggle state is
/// never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Starting theme mode: "light" or "dark"
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Whether to capture mouse events
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,

    /// Directory with palette override files (light.json / dark.json)
    #[serde(default)]
    pub themes_dir: Option<PathBuf>,
}

fn default_theme_name() -> String {
    "light".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            mouse_enabled: true,
            themes_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load (startup error otherwise). Without one,
    /// the user config file is used if present; a malformed user config is
    /// logged and ignored rather than aborting startup.
    pub fn load_or_default(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let Some(path) = user_config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        match Self::load_from_file(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("Ignoring user config {}: {:#}", path.display(), e);
                Ok(Self::default())
            }
        }
    }
}

/// User configuration file (~/.config/duotone/config.json)
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("duotone").join("config.json"))
}
