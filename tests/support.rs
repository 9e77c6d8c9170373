//! Common test support utilities and fixtures

#![allow(dead_code)]

use alfred::Config;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A settings directory plus scratch space for repositories
pub struct Workspace {
    pub settings: TempDir,
    pub repos: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            settings: TempDir::new().expect("Failed to create settings directory"),
            repos: TempDir::new().expect("Failed to create repos directory"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.settings.path().join("alfredConfig.json")
    }

    /// Write a configuration registering `repos` as name -> path
    pub fn write_config(&self, repos: &[(&str, &Path)]) {
        let mut config = Config::new();
        for (name, path) in repos {
            config
                .repos
                .insert(name.to_string(), path.to_string_lossy().to_string());
        }
        config.save(&self.config_path()).expect("Failed to write config");
    }

    pub fn read_config(&self) -> Config {
        Config::load(&self.config_path()).expect("Failed to read config")
    }

    /// Create an empty directory under the repos scratch space
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.repos.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create a git repository with one staged file
    pub fn git_repo(&self, name: &str) -> PathBuf {
        let path = self.dir(name);
        git(&path, &["init", "--quiet"]);
        git(&path, &["config", "user.name", "Test User"]);
        git(&path, &["config", "user.email", "test@example.com"]);
        fs::write(path.join("README.md"), format!("# {name}\n")).expect("Failed to write file");
        git(&path, &["add", "README.md"]);
        path
    }

    /// The alfred binary pointed at this workspace's settings directory
    pub fn alfred(&self) -> Command {
        let mut cmd = Command::cargo_bin("alfred").expect("binary exists");
        cmd.env("ALFRED_SETTINGS_DIR", self.settings.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Run git in `dir`, panicking on failure, and return trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
