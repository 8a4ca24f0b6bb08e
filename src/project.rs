//! Target path resolution for install/status/uninstall.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::hook::HOOK_SCRIPT_NAME;

/// Everything path-shaped the installer touches, resolved once up front.
pub struct InstallPaths {
    pub claude_dir: PathBuf,
    pub hooks_dir: PathBuf,
    pub settings_file: PathBuf,
    pub backup_file: PathBuf,
    /// Command string registered in settings.json. Project installs use the
    /// `$CLAUDE_PROJECT_DIR` placeholder so the checkout stays relocatable;
    /// global installs use the absolute path under ~/.claude/hooks.
    pub hook_command: String,
}

impl InstallPaths {
    pub fn resolve(global: bool, project: Option<&Path>) -> Result<Self> {
        let (claude_dir, hook_command) = if global {
            let home = dirs::home_dir().context("Cannot find home directory")?;
            let dir = home.join(".claude");
            let cmd = dir
                .join("hooks")
                .join(HOOK_SCRIPT_NAME)
                .to_string_lossy()
                .into_owned();
            (dir, cmd)
        } else {
            let root = project_root(project)?;
            let dir = root.join(".claude");
            let cmd = format!("$CLAUDE_PROJECT_DIR/.claude/hooks/{HOOK_SCRIPT_NAME}");
            (dir, cmd)
        };

        Ok(Self {
            hooks_dir: claude_dir.join("hooks"),
            settings_file: claude_dir.join("settings.json"),
            backup_file: claude_dir.join("settings.json.backup"),
            claude_dir,
            hook_command,
        })
    }
}

/// Project root: explicit flag first, then `INIT_CWD` (package managers set it
/// to the directory the install was started from), then the current directory.
pub fn project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    if let Some(init_cwd) = env::var_os("INIT_CWD") {
        return Ok(PathBuf::from(init_cwd));
    }
    env::current_dir().context("Cannot determine current directory")
}
