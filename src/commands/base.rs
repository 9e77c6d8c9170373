//! Base types and traits for the command pattern

use crate::config::{Config, ConfigStore};
use crate::prompt::Prompter;
use anyhow::Result;
use std::process::ExitCode;

/// Context passed to all commands containing shared configuration and I/O
pub struct CommandContext {
    /// Where the configuration lives
    pub store: ConfigStore,
    /// The configuration loaded at startup
    pub config: Config,
    /// Source of interactive answers
    pub prompter: Box<dyn Prompter>,
}

impl CommandContext {
    pub fn new(store: ConfigStore, config: Config, prompter: Box<dyn Prompter>) -> Self {
        Self {
            store,
            config,
            prompter,
        }
    }
}

/// How a command ended, mapped onto the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait(?Send)]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &mut CommandContext) -> Result<Outcome>;
}
