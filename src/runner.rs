//! Command execution runner for operating across multiple repositories
//!
//! Repositories are processed one at a time: each command is awaited to
//! completion before the next repository starts, so output from different
//! repositories never interleaves. A failing repository is reported and the
//! batch moves on.

use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Exit code reported for a child that did not exit normally
pub const NO_EXIT_CODE: i32 = -1;

/// Short explanation of a shell exit code for failure messages
fn describe_exit_code(exit_code: i32) -> &'static str {
    match exit_code {
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "invalid argument to exit",
        130 => "script terminated by Control-C",
        131..=255 | NO_EXIT_CODE => "terminated by signal",
        _ => "error",
    }
}

/// Outcome of running one command across a set of repositories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run `command` through the shell in `repo_dir`, streaming its output
    ///
    /// Output chunks are forwarded to `stdout` and `stderr` as they arrive.
    /// Returns the exit code; a process killed by a signal reports [`NO_EXIT_CODE`].
    pub async fn run_command<O: Write, E: Write>(
        &self,
        repo_dir: &str,
        command: &str,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<i32> {
        if !Path::new(repo_dir).is_dir() {
            anyhow::bail!("Repository directory does not exist: {}", repo_dir);
        }

        tracing::debug!(dir = repo_dir, command, "spawning command");

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(repo_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run '{command}' in {repo_dir}"))?;

        let mut child_stdout = child.stdout.take().context("Failed to capture stdout")?;
        let mut child_stderr = child.stderr.take().context("Failed to capture stderr")?;

        let mut out_buf = [0u8; 8192];
        let mut err_buf = [0u8; 8192];
        let mut out_open = true;
        let mut err_open = true;

        while out_open || err_open {
            tokio::select! {
                read = child_stdout.read(&mut out_buf), if out_open => {
                    let n = read?;
                    if n == 0 {
                        out_open = false;
                    } else {
                        stdout.write_all(&out_buf[..n])?;
                        stdout.flush()?;
                    }
                }
                read = child_stderr.read(&mut err_buf), if err_open => {
                    let n = read?;
                    if n == 0 {
                        err_open = false;
                    } else {
                        stderr.write_all(&err_buf[..n])?;
                        stderr.flush()?;
                    }
                }
            }
        }

        let status = child.wait().await?;
        let exit_code = status.code().unwrap_or(NO_EXIT_CODE);
        tracing::debug!(
            exit_code,
            description = describe_exit_code(exit_code),
            "command finished"
        );

        Ok(exit_code)
    }

    /// Run `command` in every named repository, in order
    ///
    /// A name missing from the configuration, a missing directory, and a
    /// non-zero exit all count as a failure for that repository only.
    pub async fn run_batch<O: Write, E: Write>(
        &self,
        config: &Config,
        names: &[String],
        command: &str,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for name in names {
            writeln!(stdout, "{}", format!("Repo {name}:").yellow())?;

            let outcome = match config.repository_path(name) {
                Some(repo_dir) => self.run_command(repo_dir, command, stdout, stderr).await,
                None => Err(anyhow::anyhow!(
                    "No repository named '{name}' is registered"
                )),
            };

            match outcome {
                Ok(0) => report.succeeded.push(name.clone()),
                Ok(exit_code) => {
                    writeln!(
                        stderr,
                        "{}",
                        format!(
                            "Error executing command \"{command}\" in {name}, {}. Exit code {exit_code} ({})",
                            config.title,
                            describe_exit_code(exit_code)
                        )
                        .red()
                    )?;
                    report.failed.push(name.clone());
                }
                Err(e) => {
                    writeln!(
                        stderr,
                        "{}",
                        format!(
                            "Error executing command \"{command}\" in {name}, {}: {e:#}",
                            config.title
                        )
                        .red()
                    )?;
                    report.failed.push(name.clone());
                }
            }

            writeln!(stdout)?;
        }

        Ok(report)
    }
}
