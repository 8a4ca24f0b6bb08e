//! Idempotent SessionStart hook registration in Claude Code settings.json.
//!
//! Existing documents are handled as loosely-typed JSON with explicit checks
//! at the `hooks` boundary, since third-party settings files may deviate from
//! the expected shape. Unknown keys are preserved verbatim.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::hook::HOOK_SCRIPT_NAME;

#[derive(Debug, Serialize)]
pub struct CommandEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct HookEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub matchers: Vec<String>,
    pub hooks: Vec<CommandEntry>,
}

impl HookEntry {
    /// The fixed entry this installer registers: a SessionStart hook running
    /// `command` for every matcher.
    pub fn session_start(command: &str) -> Self {
        Self {
            kind: "SessionStart".into(),
            matchers: vec!["*".into()],
            hooks: vec![CommandEntry {
                kind: "command".into(),
                command: command.into(),
            }],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Installed,
    AlreadyConfigured,
}

/// True when `entry` is a SessionStart registration whose nested command
/// entries reference our hook script. Path prefixes are ignored on purpose:
/// project and global installs register different command strings.
pub fn is_justfile_hook_entry(entry: &Value) -> bool {
    entry.get("type").and_then(|t| t.as_str()) == Some("SessionStart")
        && entry
            .get("hooks")
            .and_then(|h| h.as_array())
            .map(|hooks| {
                hooks.iter().any(|h| {
                    h.get("command")
                        .and_then(|c| c.as_str())
                        .map(|c| c.contains(HOOK_SCRIPT_NAME))
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false)
}

/// Merge the fixed entry into a parsed settings document.
///
/// Mutates `settings` only when the hook is not yet registered. A missing or
/// non-array `hooks` value is replaced with an empty array first; everything
/// else in the document is left untouched.
pub fn merge_entry(settings: &mut Value, entry: &HookEntry) -> Result<MergeOutcome> {
    if !settings.is_object() {
        *settings = Value::Object(serde_json::Map::new());
    }
    if !matches!(settings.get("hooks"), Some(Value::Array(_))) {
        settings["hooks"] = Value::Array(Vec::new());
    }

    let hooks = settings["hooks"]
        .as_array_mut()
        .context("hooks is not an array")?;

    if hooks.iter().any(is_justfile_hook_entry) {
        return Ok(MergeOutcome::AlreadyConfigured);
    }

    hooks.push(serde_json::to_value(entry)?);
    Ok(MergeOutcome::Installed)
}

/// Load settings, merge the fixed entry, write back if anything changed.
///
/// A pre-existing file is copied to `backup_file` before any mutation,
/// whether or not its content parses. Unparseable content is discarded with a
/// warning and the merge starts from `{"hooks": []}` — the backup is then the
/// only surviving copy of the prior configuration.
pub fn configure(
    settings_file: &Path,
    backup_file: &Path,
    entry: &HookEntry,
) -> Result<MergeOutcome> {
    let mut settings = load_or_default(settings_file, backup_file)?;
    let outcome = merge_entry(&mut settings, entry)?;
    if outcome == MergeOutcome::Installed {
        write_pretty(settings_file, &settings)?;
    }
    Ok(outcome)
}

/// Remove every registered entry for our hook. Returns true when the file
/// changed. Missing file or missing/odd `hooks` key is a clean no-op;
/// malformed JSON is an error here, unlike install, since uninstall has
/// nothing sensible to reset to.
pub fn remove_entry(settings_file: &Path, backup_file: &Path) -> Result<bool> {
    if !settings_file.exists() {
        return Ok(false);
    }
    let raw = fs::read_to_string(settings_file)
        .with_context(|| format!("Failed to read {}", settings_file.display()))?;
    let mut settings: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", settings_file.display()))?;

    let Some(hooks) = settings.get_mut("hooks").and_then(|h| h.as_array_mut()) else {
        return Ok(false);
    };
    let before = hooks.len();
    hooks.retain(|e| !is_justfile_hook_entry(e));
    if hooks.len() == before {
        return Ok(false);
    }

    if let Err(e) = fs::write(backup_file, &raw) {
        eprintln!(
            "{} Failed to back up {}: {e}",
            "just-claude: warning:".yellow(),
            settings_file.display()
        );
    }
    write_pretty(settings_file, &settings)?;
    Ok(true)
}

/// Best-effort check whether the hook is registered at `settings_file`.
pub fn is_configured(settings_file: &Path) -> bool {
    fs::read_to_string(settings_file)
        .ok()
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
        .and_then(|v| {
            v.get("hooks")
                .and_then(|h| h.as_array())
                .map(|hooks| hooks.iter().any(is_justfile_hook_entry))
        })
        .unwrap_or(false)
}

fn load_or_default(settings_file: &Path, backup_file: &Path) -> Result<Value> {
    if !settings_file.exists() {
        return Ok(serde_json::json!({ "hooks": [] }));
    }

    let raw = fs::read_to_string(settings_file)
        .with_context(|| format!("Failed to read {}", settings_file.display()))?;

    // Backup first, parseable or not: reset-on-bad-JSON below silently drops
    // user configuration, and the backup is the only way to get it back.
    match fs::write(backup_file, &raw) {
        Ok(()) => println!("just-claude: Backed up existing settings.json"),
        Err(e) => eprintln!(
            "{} Failed to back up {}: {e}",
            "just-claude: warning:".yellow(),
            settings_file.display()
        ),
    }

    match serde_json::from_str::<Value>(&raw) {
        Ok(v) if v.is_object() => Ok(v),
        Ok(_) => {
            eprintln!(
                "{} existing settings.json is not a JSON object, starting fresh",
                "just-claude: warning:".yellow()
            );
            Ok(serde_json::json!({ "hooks": [] }))
        }
        Err(e) => {
            eprintln!(
                "{} Could not parse existing settings.json: {e}",
                "just-claude: warning:".yellow()
            );
            Ok(serde_json::json!({ "hooks": [] }))
        }
    }
}

/// Pretty-print with two-space indent and a trailing newline, replacing the
/// target atomically via a temp file in the same directory.
pub fn write_pretty(path: &Path, settings: &Value) -> Result<()> {
    let dir = path.parent().context("settings path has no parent")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let json = serde_json::to_string_pretty(settings)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to stage settings write in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
