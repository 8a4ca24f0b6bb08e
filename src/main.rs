mod hook;
mod install;
mod project;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "just-claude",
    version,
    about = "Wire a justfile-detection SessionStart hook into Claude Code",
    long_about = "Installs a small shell hook that detects a justfile at session start and surfaces its recipes to Claude Code, and registers it in .claude/settings.json."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the hook script and register it in settings.json
    ///
    /// Designed to run as a package-install step: errors are logged with
    /// manual-configuration guidance and the exit code is always 0.
    Install {
        /// Install into ~/.claude instead of a project directory
        #[arg(long)]
        global: bool,

        /// Project root (defaults to $INIT_CWD, then the current directory)
        #[arg(long)]
        project: Option<PathBuf>,
    },

    /// Show whether the hook script and settings entry are present
    Status {
        /// Check ~/.claude instead of a project directory
        #[arg(long)]
        global: bool,

        /// Project root (defaults to $INIT_CWD, then the current directory)
        #[arg(long)]
        project: Option<PathBuf>,
    },

    /// Remove the hook script and its settings.json entry
    Uninstall {
        /// Uninstall from ~/.claude instead of a project directory
        #[arg(long)]
        global: bool,

        /// Project root (defaults to $INIT_CWD, then the current directory)
        #[arg(long)]
        project: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install { global, project } => {
            install::run(global, project.as_deref(), cli.verbose)
        }

        Commands::Status { global, project } => install::status(global, project.as_deref()),

        Commands::Uninstall { global, project } => {
            install::uninstall(global, project.as_deref(), cli.verbose)
        }
    }
}
