//! Configuration file parsing and serialization

use crate::constants;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The persisted alfred configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How alfred addresses the user
    #[serde(default = "default_name", deserialize_with = "non_empty_or_name")]
    pub name: String,
    /// Honorific used in replies
    #[serde(default = "default_title", deserialize_with = "non_empty_or_title")]
    pub title: String,
    /// Friendly repository name to absolute path
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repos: BTreeMap<String, String>,
}

fn default_name() -> String {
    constants::config::DEFAULT_NAME.to_string()
}

fn default_title() -> String {
    constants::config::DEFAULT_TITLE.to_string()
}

fn non_empty_or_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()).unwrap_or_else(default_name))
}

fn non_empty_or_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()).unwrap_or_else(default_title))
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let value: Option<BTreeMap<String, String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl Config {
    /// Create a configuration with the default name and title and no repositories
    pub fn new() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            repos: BTreeMap::new(),
        }
    }

    /// Parse a configuration from its JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let config = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save configuration to a file as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Get the path registered under a friendly name
    pub fn repository_path(&self, name: &str) -> Option<&str> {
        self.repos.get(name).map(String::as_str)
    }

    /// All registered friendly names in map order
    pub fn repository_names(&self) -> Vec<String> {
        self.repos.keys().cloned().collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.name, "Wayne");
        assert_eq!(config.title, "sir");
        assert!(config.repos.is_empty());
    }

    #[test]
    fn test_empty_and_null_fields_fall_back_to_defaults() {
        let config = Config::from_json(r#"{"name": "", "title": null, "repos": null}"#).unwrap();
        assert_eq!(config.name, "Wayne");
        assert_eq!(config.title, "sir");
        assert!(config.repos.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_present_fields() {
        let config =
            Config::from_json(r#"{"title": "ma'am", "repos": {"web": "/src/web"}}"#).unwrap();
        assert_eq!(config.name, "Wayne");
        assert_eq!(config.title, "ma'am");
        assert_eq!(config.repository_path("web"), Some("/src/web"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Config::from_json("{not json").is_err());
    }

    #[test]
    fn test_save_writes_two_space_indented_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("alfredConfig.json");

        let mut config = Config::new();
        config.repos.insert("api".to_string(), "/src/api".to_string());
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"name\": \"Wayne\""));
        assert!(content.contains("\n    \"api\": \"/src/api\""));

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let error = Config::load(&path).unwrap_err();
        assert!(error.to_string().contains("missing.json"));
    }

    #[test]
    fn test_repository_names_are_sorted() {
        let mut config = Config::new();
        config.repos.insert("b".to_string(), "/p/b".to_string());
        config.repos.insert("a".to_string(), "/p/a".to_string());

        assert_eq!(config.repository_names(), vec!["a", "b"]);
    }
}
