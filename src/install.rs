//! Install/status/uninstall orchestration.
//!
//! `run` is the package-install entry point and never fails the process:
//! every error is reported with manual-configuration guidance and the exit
//! code stays 0 so the surrounding package install is not broken.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::hook;
use crate::project::InstallPaths;
use crate::settings::{self, HookEntry, MergeOutcome};

pub fn run(global: bool, project: Option<&Path>, verbose: u8) -> Result<()> {
    let paths = match InstallPaths::resolve(global, project) {
        Ok(paths) => paths,
        Err(e) => {
            report_failure(&e);
            return Ok(());
        }
    };

    println!("just-claude: Installing...");
    println!("just-claude: Target: {}", paths.claude_dir.display());

    match try_install(&paths, verbose) {
        Ok(MergeOutcome::Installed) => {
            println!("just-claude: Configured SessionStart hook in settings.json");
            println!("just-claude: Installation complete!");
        }
        Ok(MergeOutcome::AlreadyConfigured) => {
            println!("just-claude: Hook already configured in settings.json");
            println!("just-claude: Installation complete!");
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}

fn try_install(paths: &InstallPaths, verbose: u8) -> Result<MergeOutcome> {
    let hook_path = hook::materialize(&paths.hooks_dir)?;
    println!(
        "just-claude: Installed hook script to {}",
        hook_path.display()
    );

    let entry = HookEntry::session_start(&paths.hook_command);
    if verbose > 0 {
        eprintln!("just-claude: registering command: {}", paths.hook_command);
    }
    settings::configure(&paths.settings_file, &paths.backup_file, &entry)
}

fn report_failure(err: &anyhow::Error) {
    eprintln!("{} Installation error: {err:#}", "just-claude:".red());
    eprintln!("just-claude: You may need to configure .claude/settings.json manually");
}

pub fn status(global: bool, project: Option<&Path>) -> Result<()> {
    let paths = InstallPaths::resolve(global, project)?;
    let script = paths.hooks_dir.join(hook::HOOK_SCRIPT_NAME);

    println!("📋 just-claude status ({})\n", paths.claude_dir.display());

    if script.exists() {
        println!("✅ hook script: {}", script.display());
    } else {
        println!("⚪ hook script: not installed");
    }

    if settings::is_configured(&paths.settings_file) {
        println!("✅ settings.json: SessionStart hook registered");
    } else {
        println!("⚪ settings.json: hook not registered");
    }

    println!("\nUsage:");
    println!("  just-claude install           # wire the hook into this project");
    println!("  just-claude install --global  # wire the hook into ~/.claude");

    Ok(())
}

pub fn uninstall(global: bool, project: Option<&Path>, verbose: u8) -> Result<()> {
    let paths = InstallPaths::resolve(global, project)?;

    // Attempt both removals before propagating, so a corrupt settings.json
    // cannot strand the script (or vice versa).
    let removed_entry = settings::remove_entry(&paths.settings_file, &paths.backup_file);
    let removed_script = hook::remove(&paths.hooks_dir);
    let removed_entry = removed_entry?;
    let removed_script = removed_script?;

    if verbose > 0 {
        eprintln!(
            "just-claude: entry removed: {removed_entry}, script removed: {removed_script}"
        );
    }

    if removed_entry || removed_script {
        println!(
            "✅ just-claude: Removed hook from {}",
            paths.claude_dir.display()
        );
    } else {
        println!("just-claude: Nothing to remove");
    }

    Ok(())
}
