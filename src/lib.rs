//! Alfred - run the same git command across your registered repositories

pub mod commands;
pub mod config;
pub mod constants;
pub mod orchestrator;
pub mod prompt;
pub mod runner;
pub mod selector;
pub mod setup;
pub mod translator;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext, Outcome, UsageError};
pub use config::{Config, ConfigStore, DeleteOutcome};
pub use runner::{BatchReport, CommandRunner};
pub use translator::{GitOperation, Translation, translate};
