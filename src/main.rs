use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use grind::config::Config;
use grind::kind::SolutionKind;

mod cmd;

#[derive(Parser)]
#[command(name = "grind")]
#[command(version, about = "Keep a practice archive's plans, checklists, progress and index in sync")]
pub struct Cli {
    /// Repository root (defaults to the current directory)
    #[arg(long, global = true, env = "GRIND_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate plan snapshots, checklists, README progress and the index
    Sync,
    /// Rebuild only the solution index from existing plan snapshots
    Index,
    /// Refresh README progress from existing checklists
    Progress,
    /// List solution files that break the NNNN_lower_snake naming rule
    CheckNames,
    /// Create a solution file from the track template
    New {
        /// Solution type: py or sql
        #[arg(long = "type")]
        kind: SolutionKind,

        #[arg(long)]
        track: String,

        #[arg(long)]
        id: u32,

        /// Defaults to the title in lower_snake form
        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        difficulty: String,

        #[arg(long, default_value = "")]
        category: String,

        /// Comma-separated tags, e.g. "array, hashmap"
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Register a new track
    AddTrack {
        #[arg(long)]
        key: String,

        /// Display name, e.g. "NeetCode 150"
        #[arg(long)]
        name: String,

        /// Solution type: py or sql
        #[arg(long = "type")]
        kind: SolutionKind,
    },
    /// View or validate grind.toml
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "grind=debug" } else { "grind=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = match cli.root.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config = Config::new(root, cli.verbose)?;

    match &cli.command {
        Commands::Sync => cmd::cmd_sync(&config)?,
        Commands::Index => cmd::cmd_index(&config)?,
        Commands::Progress => cmd::cmd_progress(&config)?,
        Commands::CheckNames => cmd::cmd_check_names(&config)?,
        Commands::New {
            kind,
            track,
            id,
            slug,
            title,
            difficulty,
            category,
            tags,
        } => cmd::cmd_new(
            &config,
            cmd::scaffold::NewArgs {
                kind: *kind,
                track,
                id: *id,
                slug: slug.as_deref(),
                title,
                difficulty,
                category,
                tags,
            },
        )?,
        Commands::AddTrack { key, name, kind } => cmd::cmd_add_track(&config, key, name, *kind)?,
        Commands::Config { command } => cmd::cmd_config(&config, command.clone())?,
    }

    Ok(())
}
