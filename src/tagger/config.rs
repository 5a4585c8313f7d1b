use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub const KEY_DATABASE_PATH: &str = "database-path";
pub const KEY_LOG_LEVEL: &str = "log-level";

/// Configuration for tagger, stored as `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Location of the tag database; the data directory default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Default log level for the CLI: one of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            log_level: default_log_level(),
        }
    }
}

impl TaggerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaggerError::Io)?;
        let config: TaggerConfig =
            serde_json::from_str(&content).map_err(TaggerError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TaggerError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TaggerError::Serialization)?;
        fs::write(config_path, content).map_err(TaggerError::Io)?;
        Ok(())
    }

    /// Display value for a user-facing key, `None` for unknown keys
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATABASE_PATH => Some(
                self.database_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            KEY_LOG_LEVEL => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATABASE_PATH => {
                self.database_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            KEY_LOG_LEVEL => {
                let level = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(TaggerError::Config(format!(
                        "Invalid log level '{}', expected one of: {}",
                        value,
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
                Ok(())
            }
            _ => Err(TaggerError::Config(format!("Unknown config key: {}", key))),
        }
    }

    /// Every key with its display value, in a stable order
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_DATABASE_PATH, KEY_LOG_LEVEL]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TaggerConfig::default();
        assert_eq!(config.database_path, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = TaggerConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, TaggerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = TaggerConfig::default();
        config.set(KEY_DATABASE_PATH, "/data/tags.json").unwrap();
        config.set(KEY_LOG_LEVEL, "DEBUG").unwrap();
        config.save(&dir).unwrap();

        let loaded = TaggerConfig::load(&dir).unwrap();
        assert_eq!(loaded.database_path, Some(PathBuf::from("/data/tags.json")));
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(
            TaggerConfig::load(temp.path()).unwrap(),
            TaggerConfig::default()
        );
    }

    #[test]
    fn test_get_and_list() {
        let config = TaggerConfig::default();
        assert_eq!(config.get(KEY_DATABASE_PATH).as_deref(), Some("(default)"));
        assert_eq!(config.get("color"), None);
        assert_eq!(
            config.list_all(),
            vec![
                (KEY_DATABASE_PATH, "(default)".to_string()),
                (KEY_LOG_LEVEL, "warn".to_string())
            ]
        );
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = TaggerConfig::default();
        assert!(matches!(
            config.set(KEY_LOG_LEVEL, "loud"),
            Err(TaggerError::Config(_))
        ));
        assert!(matches!(
            config.set("color", "red"),
            Err(TaggerError::Config(_))
        ));
        assert_eq!(config, TaggerConfig::default());
    }

    #[test]
    fn test_empty_database_path_resets() {
        let mut config = TaggerConfig::default();
        config.set(KEY_DATABASE_PATH, "/x.json").unwrap();
        config.set(KEY_DATABASE_PATH, "").unwrap();
        assert_eq!(config.database_path, None);
    }
}
