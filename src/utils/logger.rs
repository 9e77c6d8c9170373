//! Console output prefixed with the repository name

use colored::*;

/// Logger for per-repository messages with consistent formatting
///
/// Each line is prefixed with the repository name in yellow/bold so the
/// owner of a message stays obvious in long listings.
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, repo: &str, msg: &str) {
        println!("{}: {}", repo.yellow().bold(), msg);
    }
}
