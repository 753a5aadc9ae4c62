use std::path::Path;

use log::{warn, LevelFilter};

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
}

/// Defaults used when the driver creates a new game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub red_player_name: String,
    pub blue_player_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            red_player_name: "red".to_string(),
            blue_player_name: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// The configured level as a `log` filter. Case-insensitive.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level.trim().parse().map_err(|_| {
            ConfigError::Validation(
                "log.level must be one of off, error, warn, info, debug, trace".into(),
            )
        })
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.red_player_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.red_player_name must not be blank".into(),
            ));
        }
        if self.game.blue_player_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.blue_player_name must not be blank".into(),
            ));
        }
        self.log.level_filter()?;

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
