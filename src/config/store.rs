//! Persistent configuration store rooted at the settings directory
//!
//! Every mutation is a load-modify-save of the whole file. There is no file
//! locking: two alfred processes writing at once race and the last writer wins.

use super::{Config, migration};
use crate::constants;
use crate::prompt::Prompter;
use crate::setup;
use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

/// Result of deleting a repository by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The named repository was removed
    Removed,
    /// Every repository was removed
    AllRemoved,
    /// Nothing matched; the configuration was left untouched
    NotFound,
}

/// Access to the configuration file inside a settings directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    settings_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(settings_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_dir: settings_dir.into(),
        }
    }

    /// Store rooted at the user's home directory
    pub fn in_home_dir() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(Self::new(home))
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.settings_dir.join(constants::config::CONFIG_FILE_NAME)
    }

    pub fn exists(&self) -> bool {
        self.config_path().is_file()
    }

    /// Load the configuration, or `None` if the file does not exist yet
    pub fn load(&self) -> Result<Option<Config>> {
        if !self.exists() {
            return Ok(None);
        }
        Config::load(&self.config_path()).map(Some)
    }

    /// Load the configuration, falling back to defaults when there is none
    pub fn load_or_default(&self) -> Result<Config> {
        Ok(self.load()?.unwrap_or_default())
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        tracing::debug!(path = %self.config_path().display(), "saving configuration");
        config.save(&self.config_path())
    }

    /// Make sure a configuration exists and return it
    ///
    /// Tries to restore one from a previous version first, then falls back to
    /// the interactive setup wizard.
    pub fn initialize(&self, prompter: &mut dyn Prompter) -> Result<Config> {
        let config_path = self.config_path();
        tracing::debug!(path = %config_path.display(), "initializing configuration");

        if let Some(source) = migration::migrate_if_needed(
            &self.settings_dir,
            &config_path,
            constants::app::NAME,
            constants::app::VERSION,
        )? {
            println!(
                "Restored settings from {} to {}",
                source.display(),
                config_path.display()
            );
        }

        if let Some(config) = self.load()? {
            return Ok(config);
        }

        let config = setup::run_setup(prompter)?;
        self.save(&config)?;
        println!(
            "{}",
            format!("Configuration saved to {}", config_path.display()).green()
        );
        Ok(config)
    }

    /// Register a repository, overwriting any existing entry with the same name
    pub fn add_repo(&self, name: &str, path: &str) -> Result<Config> {
        let mut config = self.load_or_default()?;
        config.repos.insert(name.to_string(), path.to_string());
        self.save(&config)?;
        Ok(config)
    }

    /// Remove one repository, or all of them when `name` is `all`
    pub fn delete_repo(&self, name: &str) -> Result<DeleteOutcome> {
        let Some(mut config) = self.load()? else {
            return Ok(DeleteOutcome::NotFound);
        };

        let outcome = if name == constants::selector::ALL {
            config.repos.clear();
            DeleteOutcome::AllRemoved
        } else if config.repos.remove(name).is_some() {
            DeleteOutcome::Removed
        } else {
            return Ok(DeleteOutcome::NotFound);
        };

        self.save(&config)?;
        Ok(outcome)
    }

    /// Register discovered repository roots keyed by their directory name
    ///
    /// Names that are already registered keep their existing path. A root with
    /// no final component, such as `/`, is keyed by its full path. Returns the
    /// entries that were added, in discovery order.
    pub fn register_discovered(&self, roots: &[PathBuf]) -> Result<Vec<(String, String)>> {
        let mut config = self.load_or_default()?;
        let mut added = Vec::new();

        for root in roots {
            let path = root.to_string_lossy().to_string();
            let name = match root.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => path.clone(),
            };
            if config.repos.contains_key(&name) {
                tracing::debug!(name = %name, "repository already registered, skipping");
                continue;
            }
            config.repos.insert(name.clone(), path.clone());
            added.push((name, path));
        }

        self.save(&config)?;
        Ok(added)
    }

    /// Delete the configuration file
    pub fn reset(&self) -> Result<()> {
        let path = self.config_path();
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}
