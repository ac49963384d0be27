use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub google: GoogleConfig,
    pub calendar: CalendarConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleConfig {
    pub client_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    pub id: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub default_view: String,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calview")
            .join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google: GoogleConfig {
                client_id: String::new(),
            },
            calendar: CalendarConfig {
                id: "primary".to_string(),
                time_zone: "America/Los_Angeles".to_string(),
            },
            ui: UiConfig {
                default_view: "month".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_targets_primary_calendar() {
        let config = Config::default();
        assert_eq!(config.calendar.id, "primary");
    }

    #[test]
    fn default_config_uses_pacific_time() {
        let config = Config::default();
        assert_eq!(config.calendar.time_zone, "America/Los_Angeles");
    }

    #[test]
    fn default_config_opens_month_view() {
        let config = Config::default();
        assert_eq!(config.ui.default_view, "month");
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [google]
            client_id = "test_client_id"

            [calendar]
            id = "work"
            time_zone = "Europe/Helsinki"

            [ui]
            default_view = "day"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.google.client_id, "test_client_id");
        assert_eq!(config.calendar.id, "work");
        assert_eq!(config.calendar.time_zone, "Europe/Helsinki");
        assert_eq!(config.ui.default_view, "day");
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn load_or_create_writes_defaults_on_first_run() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("calview").join("config.toml");

        let config = Config::load_or_create_at(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_or_create_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = Config::default();
        config.google.client_id = "persisted".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_or_create_at(&path).unwrap();

        assert_eq!(loaded.google.client_id, "persisted");
    }
}
