//! snsync CLI
//!
//! Synchronizes a local file with a single field on a remote instance
//! record, with conflict detection before any overwrite. `push` is the
//! save-hook analog, `pull` the load-hook analog; `sync` is the explicit
//! sync command and behaves like `pull`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;
mod prompt;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "snsync")]
#[command(about = "Sync a local file with a field on a remote instance record")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Answer "yes" to confirmation prompts (for hooks and scripts)
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Path to config file (overrides SNSYNC_CONFIG and the default location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Push the file's content to the remote record (save hook)
    Push {
        /// File to push
        file: PathBuf,
    },
    /// Reload the file from the remote record if it changed (load hook)
    Pull {
        /// File to check
        file: PathBuf,
    },
    /// Explicitly sync the file with the server; same as pull
    Sync {
        /// File to sync
        file: PathBuf,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    match cli.command {
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => commands::config::show(cli.config.as_ref(), &output),
            Some(ConfigCommands::Set { key, value }) => {
                commands::config::set(key, value, cli.config.as_ref(), &output)
            }
        },
        Commands::Push { file } => commands::push::run(&file, cli.config.as_ref(), cli.yes, &output),
        Commands::Pull { file } | Commands::Sync { file } => {
            commands::pull::run(&file, cli.config.as_ref(), cli.yes, &output)
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("snsync_core=info,snsync_cli=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
