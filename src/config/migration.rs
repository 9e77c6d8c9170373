//! Restoring the configuration file from a previous version's settings directory

use crate::constants;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// List directories in `settings_dir` named `<app_name>-<version>`, sorted by name
pub fn versioned_directories(settings_dir: &Path, app_name: &str) -> Result<Vec<PathBuf>> {
    let pattern = Regex::new(&format!(r"^{}-[0-9.]+$", regex::escape(app_name)))?;

    let mut directories = Vec::new();
    for entry in std::fs::read_dir(settings_dir)
        .with_context(|| format!("Failed to read {}", settings_dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && pattern.is_match(name)
        {
            directories.push(entry.path());
        }
    }

    directories.sort();
    Ok(directories)
}

/// Copy a configuration file from a legacy versioned directory if needed
///
/// Only acts when more than one versioned directory exists and there is no
/// configuration at `config_path` yet. The current version's directory is
/// skipped and the first legacy directory holding a configuration file wins.
/// Returns the file that was restored, if any.
pub fn migrate_if_needed(
    settings_dir: &Path,
    config_path: &Path,
    app_name: &str,
    current_version: &str,
) -> Result<Option<PathBuf>> {
    if config_path.exists() {
        return Ok(None);
    }

    let directories = versioned_directories(settings_dir, app_name)?;
    if directories.len() <= 1 {
        return Ok(None);
    }

    let current = format!("{app_name}-{current_version}");
    for dir in directories {
        if dir.file_name().and_then(|n| n.to_str()) == Some(current.as_str()) {
            continue;
        }

        let candidate = dir.join(constants::config::CONFIG_FILE_NAME);
        if candidate.is_file() {
            std::fs::copy(&candidate, config_path).with_context(|| {
                format!(
                    "Failed to restore {} to {}",
                    candidate.display(),
                    config_path.display()
                )
            })?;
            tracing::debug!(from = %candidate.display(), to = %config_path.display(), "restored settings");
            return Ok(Some(candidate));
        }
    }

    tracing::debug!("no previous configuration found to restore");
    Ok(None)
}
