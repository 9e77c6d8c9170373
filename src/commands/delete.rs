//! Delete-repo command implementation

use super::{Command, CommandContext, Outcome};
use crate::config::DeleteOutcome;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Remove a registered repository, or all of them
pub struct DeleteRepoCommand {
    pub name: String,
}

#[async_trait(?Send)]
impl Command for DeleteRepoCommand {
    async fn execute(&self, context: &mut CommandContext) -> Result<Outcome> {
        let title = context.config.title.clone();
        println!();

        match context.store.delete_repo(&self.name)? {
            DeleteOutcome::AllRemoved => {
                context.config.repos.clear();
                println!(
                    "{}",
                    format!("I've deleted all repositories successfully, {title}!").green()
                );
            }
            DeleteOutcome::Removed => {
                context.config.repos.remove(&self.name);
                println!(
                    "{}",
                    format!(
                        "I've deleted the {} repository successfully, {title}!",
                        self.name
                    )
                    .green()
                );
            }
            DeleteOutcome::NotFound => {
                println!(
                    "{}",
                    format!(
                        "Sorry, {title}, '{}' is not a repository that is currently in my list. \
                         If you'd *really* like to delete it, please add it first using the 'add-repo' command.",
                        self.name
                    )
                    .red()
                );
            }
        }
        println!();

        Ok(Outcome::Success)
    }
}
