//! Materialization of the embedded detect-justfile.sh hook script.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const HOOK_SCRIPT_NAME: &str = "detect-justfile.sh";

const HOOK_SCRIPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/hooks/detect-justfile.sh"
));

/// Write the hook script into `hooks_dir` and mark it executable.
/// Always overwrites so upgrades pick up new script content.
pub fn materialize(hooks_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(hooks_dir)
        .with_context(|| format!("Failed to create hooks directory {}", hooks_dir.display()))?;

    let hook_path = hooks_dir.join(HOOK_SCRIPT_NAME);
    fs::write(&hook_path, HOOK_SCRIPT)
        .with_context(|| format!("Failed to write {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(&hook_path, perms).with_context(|| {
            format!(
                "Failed to set executable permissions on {}",
                hook_path.display()
            )
        })?;
    }

    Ok(hook_path)
}

/// Delete the hook script if present. Returns true when a file was removed.
pub fn remove(hooks_dir: &Path) -> Result<bool> {
    let hook_path = hooks_dir.join(HOOK_SCRIPT_NAME);
    if !hook_path.exists() {
        return Ok(false);
    }
    fs::remove_file(&hook_path)
        .with_context(|| format!("Failed to remove {}", hook_path.display()))?;
    Ok(true)
}
