//! Run command implementation

use super::{Command, CommandContext, Outcome};
use crate::runner::CommandRunner;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Run one shell command in each selected repository
#[derive(Debug)]
pub struct RunCommand {
    pub command: String,
    pub repos: Vec<String>,
}

impl RunCommand {
    pub fn new(command: String, repos: Vec<String>) -> Self {
        Self { command, repos }
    }
}

#[async_trait(?Send)]
impl Command for RunCommand {
    async fn execute(&self, context: &mut CommandContext) -> Result<Outcome> {
        let runner = CommandRunner::new();
        let mut stdout = std::io::stdout();
        let mut stderr = std::io::stderr();

        let report = runner
            .run_batch(
                &context.config,
                &self.repos,
                &self.command,
                &mut stdout,
                &mut stderr,
            )
            .await?;

        if report.is_success() {
            return Ok(Outcome::Success);
        }

        eprintln!(
            "{}",
            format!(
                "Completed with {} successful, {} failed: {}",
                report.succeeded.len(),
                report.failed.len(),
                report.failed.join(", ")
            )
            .yellow()
        );
        Ok(Outcome::Failure)
    }
}
