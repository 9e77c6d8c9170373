//! Add-repo command implementation

use super::{Command, CommandContext, Outcome};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Register one repository, asking the user for its path
pub struct AddRepoCommand {
    pub name: String,
}

#[async_trait(?Send)]
impl Command for AddRepoCommand {
    async fn execute(&self, context: &mut CommandContext) -> Result<Outcome> {
        println!();
        let path = context.prompter.ask(&format!(
            "I can add the {} repo straight away, {}. Where is that repository? Please paste the full path.\n",
            self.name, context.config.title
        ))?;
        println!();

        context.config = context.store.add_repo(&self.name, &path)?;

        println!(
            "{}",
            format!(
                "I've added that repository successfully, {}!",
                context.config.title
            )
            .green()
        );
        println!();

        Ok(Outcome::Success)
    }
}
