//! Reset-config command implementation

use super::{Command, CommandContext, Outcome};
use anyhow::Result;
use async_trait::async_trait;

/// Delete the configuration file and run first-time setup again
pub struct ResetConfigCommand;

#[async_trait(?Send)]
impl Command for ResetConfigCommand {
    async fn execute(&self, context: &mut CommandContext) -> Result<Outcome> {
        context.store.reset()?;
        context.config = context.store.initialize(context.prompter.as_mut())?;
        Ok(Outcome::Success)
    }
}
