//! Dispatch of one invocation: management commands or the git pipeline
//!
//! Management keywords short-circuit. Anything else is translated into a
//! shell command and the remaining tokens select the repositories to run it in.

use crate::commands::validators::{UsageError, required_argument, token_at};
use crate::commands::{
    AddDirectoryCommand, AddRepoCommand, Command, CommandContext, DeleteRepoCommand, ListCommand,
    Outcome, ResetConfigCommand, RunCommand,
};
use crate::config::{Config, ConfigStore};
use crate::prompt::Prompter;
use crate::selector::select_repositories;
use crate::translator::{Translated, translate};
use anyhow::Result;
use colored::*;

/// What a single invocation asks alfred to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    ListRepos,
    AddRepo { name: String },
    DeleteRepo { name: String },
    AddDirectory { directory: String },
    ResetConfig,
    Run {
        translated: Translated,
        repos: Vec<String>,
    },
}

impl Invocation {
    pub fn into_command(self) -> Box<dyn Command> {
        match self {
            Invocation::ListRepos => Box::new(ListCommand),
            Invocation::AddRepo { name } => Box::new(AddRepoCommand { name }),
            Invocation::DeleteRepo { name } => Box::new(DeleteRepoCommand { name }),
            Invocation::AddDirectory { directory } => Box::new(AddDirectoryCommand { directory }),
            Invocation::ResetConfig => Box::new(ResetConfigCommand),
            Invocation::Run { translated, repos } => {
                Box::new(RunCommand::new(translated.command_line(), repos))
            }
        }
    }
}

/// Parse the argument list into an invocation
pub fn parse_invocation(tokens: &[String], config: &Config) -> Result<Invocation, UsageError> {
    let keyword = token_at(tokens, 0).ok_or(UsageError::MissingCommand)?;

    let invocation = match keyword {
        "list-repo" | "list-repos" | "listrepo" | "listrepos" | "lr" => Invocation::ListRepos,
        "add-repo" | "addrepo" | "ar" => Invocation::AddRepo {
            name: required_argument(tokens, keyword, "repo name")?.to_string(),
        },
        "delete-repo" | "deleterepo" | "deletrepo" | "dr" => Invocation::DeleteRepo {
            name: required_argument(tokens, keyword, "repo name")?.to_string(),
        },
        "repo-add-directory" | "rad" => Invocation::AddDirectory {
            directory: required_argument(tokens, keyword, "directory path")?.to_string(),
        },
        "reset-config" | "rc" => Invocation::ResetConfig,
        _ => {
            let translated = translate(tokens)?;
            let repos = select_repositories(&tokens[translated.consumed..], config)?;
            Invocation::Run { translated, repos }
        }
    };

    Ok(invocation)
}

/// Run one invocation end to end
///
/// Ensures a configuration exists (migrating or running setup on first use),
/// then executes the requested command. Usage errors are reported to the
/// user and turned into a failing outcome.
pub async fn run(
    tokens: &[String],
    store: ConfigStore,
    mut prompter: Box<dyn Prompter>,
) -> Result<Outcome> {
    let config = store.initialize(prompter.as_mut())?;

    let invocation = match parse_invocation(tokens, &config) {
        Ok(invocation) => invocation,
        Err(usage) => {
            tracing::debug!(?usage, "rejected invocation");
            eprintln!("{}", format!("{usage}, Master {}.", config.name).red());
            return Ok(Outcome::Failure);
        }
    };
    tracing::debug!(?invocation, "dispatching");

    let mut context = CommandContext::new(store, config, prompter);
    invocation.into_command().execute(&mut context).await
}
