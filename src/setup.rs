//! First-run configuration wizard

use crate::config::Config;
use crate::constants;
use crate::prompt::Prompter;
use anyhow::Result;
use colored::*;

/// Whether an answer to a yes/no question means "yes"
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "yes" || answer == "y"
}

/// Collect name, title and repositories from the user
///
/// Keeps asking for repositories while the user answers "yes" or "y" to
/// adding more. Blank name and title fall back to the defaults.
pub fn run_setup(prompter: &mut dyn Prompter) -> Result<Config> {
    println!("{}", "Configuring Alfred...".green());

    let mut config = Config::new();

    let name = prompter.ask(&format!(
        "What's your name? (default: {}) ",
        constants::config::DEFAULT_NAME
    ))?;
    if !name.is_empty() {
        config.name = name;
    }

    let title = prompter.ask(&format!(
        "Your title? (default: {}) ",
        constants::config::DEFAULT_TITLE
    ))?;
    if !title.is_empty() {
        config.title = title;
    }

    loop {
        let repo_name = prompter.ask("Enter a 'friendly' name for your repository: ")?;
        let repo_path = prompter.ask("Enter the full path to this repository: ")?;
        tracing::debug!(name = %repo_name, path = %repo_path, "registering repository during setup");
        config.repos.insert(repo_name, repo_path);

        let more = prompter.ask("Add more repositories? (yes/no) ")?;
        if !is_affirmative(&more) {
            break;
        }
    }

    Ok(config)
}
