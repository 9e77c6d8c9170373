//! Repo-add-directory command implementation

use super::{Command, CommandContext, Outcome};
use crate::utils::{Logger, find_git_roots, resolve_scan_root};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Discover git repositories below a directory and register them by directory name
pub struct AddDirectoryCommand {
    pub directory: String,
}

#[async_trait(?Send)]
impl Command for AddDirectoryCommand {
    async fn execute(&self, context: &mut CommandContext) -> Result<Outcome> {
        let root = resolve_scan_root(&self.directory)?;
        println!();

        let discovered = find_git_roots(&root)?;
        let added = context.store.register_discovered(&discovered)?;

        if added.is_empty() {
            println!(
                "{}",
                format!(
                    "I found no new repositories in {}, {}.",
                    root.display(),
                    context.config.title
                )
                .yellow()
            );
        } else {
            println!(
                "{}",
                format!(
                    "I've added the following repositories successfully, {}",
                    context.config.title
                )
                .green()
            );
            println!();

            let logger = Logger;
            for (name, path) in &added {
                logger.info(name, path);
                context.config.repos.insert(name.clone(), path.clone());
            }
        }
        println!();

        Ok(Outcome::Success)
    }
}
