use alfred::{ConfigStore, constants, orchestrator, prompt};
use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "alfred")]
#[command(about = "Run the same git command across your registered repositories")]
#[command(version)]
#[command(after_help = "Git commands: pull, push, checkout <branch>, checkoutb|cb <branch>, \
commit <message>, status, branches|branch. Any other command is run as-is.\n\
Select repositories by name or with 'all'.\n\
Management: list-repos, add-repo <name>, delete-repo <name|all>, \
repo-add-directory <dir|.>, reset-config")]
struct Cli {
    /// Directory holding the configuration file (defaults to your home directory)
    #[arg(long, env = constants::config::SETTINGS_DIR_ENV, value_name = "DIR")]
    settings_dir: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long)]
    debug: bool,

    /// Command followed by its argument and the repositories to run it in
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

/// Initialize the tracing subscriber for diagnostics.
///
/// `--debug` wins over `RUST_LOG`; the default only shows warnings.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("alfred=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("alfred=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!(?cli, "alfred starting");

    match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("{}", format!("Error: {e:#}").red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<alfred::Outcome> {
    let store = match cli.settings_dir {
        Some(dir) => ConfigStore::new(dir),
        None => ConfigStore::in_home_dir()?,
    };
    orchestrator::run(&cli.args, store, prompt::create_prompter()).await
}
