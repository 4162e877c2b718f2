//! Voxbot CLI — entry point.
//!
//! # Commands
//!
//! - `voxbot select [--json]` — print the LLM provider this bot would use
//! - `voxbot status` — show configuration and credential status
//! - `voxbot check [--json]` — run the full start-up preflight
//! - `voxbot onboard` — write a default config file
//!
//! Any fatal condition (e.g. no usable LLM key) exits with status 1.

mod check;
mod helpers;
mod onboard;
mod select;
mod status;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 🎙 Voxbot — start-up control for a hosted voice bot
#[derive(Parser)]
#[command(name = "voxbot", version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.voxbot/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// `.env` file to load (default: search from the current directory)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the LLM provider selected from the available API keys
    Select {
        /// Print JSON instead of the bare provider name
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show configuration and credential status
    Status,

    /// Validate credentials and print the start-up plan
    Check {
        /// Print the plan as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a default config file
    Onboard,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    let paths = helpers::Paths::resolve(cli.config.as_deref(), cli.env_file.as_deref());

    match cli.command {
        Commands::Select { json } => select::run(&paths.load(), json),
        Commands::Status => status::run(&paths),
        Commands::Check { json } => check::run(&paths.load(), json),
        Commands::Onboard => onboard::run(&paths.config),
    }
}

/// Initialize tracing/logging. Logs go to stderr so stdout stays parseable.
///
/// `RUST_LOG` wins over `--logs` when set.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("voxbot=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
