//! List command implementation

use super::{Command, CommandContext, Outcome};
use crate::utils::Logger;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// List command for displaying registered repositories and their locations
pub struct ListCommand;

#[async_trait(?Send)]
impl Command for ListCommand {
    async fn execute(&self, context: &mut CommandContext) -> Result<Outcome> {
        let config = &context.config;

        if config.repos.is_empty() {
            println!(
                "{}",
                format!(
                    "You have no repositories registered yet, Master {}.",
                    config.name
                )
                .yellow()
            );
            return Ok(Outcome::Success);
        }

        println!(
            "Here are your repos and their locations, Master {}:",
            config.name
        );
        println!();

        let logger = Logger;
        for (name, path) in &config.repos {
            logger.info(name, path);
        }
        println!();

        Ok(Outcome::Success)
    }
}
