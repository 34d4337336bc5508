use std::path::{Path, PathBuf};

use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use status::{StatusConfig, StatusField};
pub use theme::Theme;

pub mod status;
pub mod theme;

/// File read from the configuration directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Prefix of environment variables overriding settings. Nested keys use `__`.
pub const ENV_PREFIX: &str = "TYPEPAD_";

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Shown dimmed while the pad is empty
    pub placeholder: String,
    /// Spaces inserted for <TAB>
    pub tab_width: usize,
    /// How long to wait for terminal events before redrawing
    pub poll_interval_ms: u64,
    pub status: StatusConfig,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: "Start typing here...".to_string(),
            tab_width: 4,
            poll_interval_ms: 50,
            status: StatusConfig::default(),
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),
}

#[derive(Debug, Default)]
pub struct Config {
    pub settings: Settings,
    /// Where the settings were looked up, if anywhere
    pub directory: Option<PathBuf>,
}

impl Config {
    pub fn get(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Check for toml file location
        let config_dir = override_path
            .or_else(|| {
                ProjectDirs::from("com", "TypePad", "TypePad")
                    .map(|dirs| dirs.config_dir().to_path_buf())
            })
            .ok_or(ConfigError::NoDirectory)?;

        Self::from_dir(&config_dir)
    }

    /// Loads settings from `config_dir`, layering defaults, the settings file and
    /// environment overrides.
    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        // Grab default configuration
        let mut settings = Figment::from(Serialized::defaults(Settings::default()));

        let settings_toml = config_dir.join(SETTINGS_FILE);
        if settings_toml.exists() {
            tracing::info!(path = %settings_toml.display(), "loading settings");
            settings = settings.merge(Toml::file(settings_toml));
        }

        let settings: Settings = settings
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        Ok(Self {
            settings,
            directory: Some(config_dir.to_path_buf()),
        })
    }
}
