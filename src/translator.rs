//! Translation of the command token into a shell command
//!
//! Known keywords map to git invocations. Any other token is passed through
//! untouched so that arbitrary commands can be run in every repository.

use crate::commands::validators::{UsageError, required_argument, token_at};

/// A git operation alfred knows how to spell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOperation {
    Pull,
    Push,
    Checkout { branch: String },
    CheckoutNew { branch: String },
    Commit { message: String },
    Status,
    CurrentBranch,
}

impl GitOperation {
    /// Shell command for this operation
    pub fn command_line(&self) -> String {
        match self {
            GitOperation::Pull => "git pull".to_string(),
            GitOperation::Push => "git push".to_string(),
            GitOperation::Checkout { branch } => format!("git checkout {branch}"),
            GitOperation::CheckoutNew { branch } => format!("git checkout -b {branch}"),
            GitOperation::Commit { message } => format!("git commit -m \"{message}\""),
            GitOperation::Status => "git status".to_string(),
            GitOperation::CurrentBranch => "git rev-parse --abbrev-ref HEAD".to_string(),
        }
    }
}

/// The command the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// A recognized git keyword
    Git(GitOperation),
    /// An unrecognized token, run verbatim through the shell
    Raw(String),
}

impl Translation {
    pub fn command_line(&self) -> String {
        match self {
            Translation::Git(operation) => operation.command_line(),
            Translation::Raw(command) => command.clone(),
        }
    }
}

/// A translation together with how many tokens it used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub translation: Translation,
    pub consumed: usize,
}

impl Translated {
    fn new(translation: Translation, consumed: usize) -> Self {
        Self {
            translation,
            consumed,
        }
    }

    pub fn command_line(&self) -> String {
        self.translation.command_line()
    }
}

/// Translate the leading tokens of `tokens` into a command
///
/// Everything after the returned `consumed` count is left for repository
/// selection.
pub fn translate(tokens: &[String]) -> Result<Translated, UsageError> {
    let keyword = token_at(tokens, 0).ok_or(UsageError::MissingCommand)?;

    let translated = match keyword {
        "pull" => Translated::new(Translation::Git(GitOperation::Pull), 1),
        "push" => Translated::new(Translation::Git(GitOperation::Push), 1),
        "checkout" => {
            let branch = required_argument(tokens, keyword, "branch name")?;
            Translated::new(
                Translation::Git(GitOperation::Checkout {
                    branch: branch.to_string(),
                }),
                2,
            )
        }
        "checkoutb" | "cb" => {
            let branch = required_argument(tokens, keyword, "branch name")?;
            Translated::new(
                Translation::Git(GitOperation::CheckoutNew {
                    branch: branch.to_string(),
                }),
                2,
            )
        }
        "commit" => {
            let message = required_argument(tokens, keyword, "commit message")?;
            Translated::new(
                Translation::Git(GitOperation::Commit {
                    message: message.to_string(),
                }),
                2,
            )
        }
        "status" => Translated::new(Translation::Git(GitOperation::Status), 1),
        "branches" | "branch" => Translated::new(Translation::Git(GitOperation::CurrentBranch), 1),
        raw => Translated::new(Translation::Raw(raw.to_string()), 1),
    };

    Ok(translated)
}
