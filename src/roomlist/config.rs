use crate::error::{Result, RoomListError};
use crate::model::Category;
use crate::query::{SortKey, ALL_SELECTOR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CREDITS: u64 = 1250;

/// Lobby configuration, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LobbyConfig {
    /// Sort used by `list` when none is given
    #[serde(default)]
    pub default_sort: SortKey,

    /// Selector used by `list` when none is given
    #[serde(default = "default_selector")]
    pub default_selector: String,

    /// Sidebar category, drives the page header
    #[serde(default)]
    pub category: Category,

    /// Player credit balance shown in the header
    #[serde(default = "default_credits")]
    pub credits: u64,
}

fn default_selector() -> String {
    ALL_SELECTOR.to_string()
}

fn default_credits() -> u64 {
    DEFAULT_CREDITS
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            default_selector: default_selector(),
            category: Category::default(),
            credits: DEFAULT_CREDITS,
        }
    }
}

impl LobbyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RoomListError::Io)?;
        let config: LobbyConfig =
            serde_json::from_str(&content).map_err(RoomListError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RoomListError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RoomListError::Serialization)?;
        fs::write(config_path, content).map_err(RoomListError::Io)?;
        Ok(())
    }

    /// Reads a setting by its user-facing key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "sort" => Ok(self.default_sort.to_string()),
            "filter" => Ok(self.default_selector.clone()),
            "category" => Ok(self.category.key().to_string()),
            "credits" => Ok(self.credits.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Updates a setting by its user-facing key, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sort" => self.default_sort = value.parse()?,
            "filter" => {
                if value.trim().is_empty() {
                    return Err(RoomListError::InvalidArgument(
                        "Filter cannot be empty".to_string(),
                    ));
                }
                self.default_selector = value.to_string();
            }
            "category" => self.category = value.parse()?,
            "credits" => {
                self.credits = value.trim().parse().map_err(|_| {
                    RoomListError::InvalidArgument(format!("Invalid credits: {}", value))
                })?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["sort", "filter", "category", "credits"]
    }
}

fn unknown_key(key: &str) -> RoomListError {
    RoomListError::InvalidArgument(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        LobbyConfig::keys().join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LobbyConfig::default();
        assert_eq!(config.default_sort, SortKey::Popularity);
        assert_eq!(config.default_selector, "ALL");
        assert_eq!(config.credits, 1250);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LobbyConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, LobbyConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = LobbyConfig::default();
        config.set("sort", "rating").unwrap();
        config.set("credits", "4000").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = LobbyConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.default_sort, SortKey::Rating);
        assert_eq!(loaded.credits, 4000);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"default_sort":"newest"}"#).unwrap();

        let loaded = LobbyConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.default_sort, SortKey::Newest);
        assert_eq!(loaded.default_selector, "ALL");
        assert_eq!(loaded.category, Category::EscapeRoom);
    }

    #[test]
    fn test_get_and_set_validation() {
        let mut config = LobbyConfig::default();
        assert_eq!(config.get("category").unwrap(), "escape-room");

        config.set("category", "rpg").unwrap();
        assert_eq!(config.get("category").unwrap(), "rpg");

        assert!(config.set("sort", "alphabetical").is_err());
        assert!(config.set("credits", "-3").is_err());
        assert!(config.set("filter", " ").is_err());
        assert!(matches!(
            config.get("theme"),
            Err(RoomListError::InvalidArgument(_))
        ));
    }
}
