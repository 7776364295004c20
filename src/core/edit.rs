use log::{debug, warn};
use std::path::Path;
use std::process::Command;

use crate::errors::{AppError, AppResult};

/// Editor to run: `--editor`, then the config file, then $EDITOR / $VISUAL,
/// then the platform default.
pub fn resolve_editor(requested: Option<&str>, configured: Option<&str>) -> String {
    requested
        .or(configured)
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.is_empty()))
        .or_else(|| std::env::var("VISUAL").ok().filter(|e| !e.is_empty()))
        .unwrap_or_else(default_editor)
}

fn default_editor() -> String {
    if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "vi".to_string()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Open `path` in `editor` and wait for it to exit.
    pub fn open(path: &Path, editor: &str) -> AppResult<()> {
        debug!("opening {} with '{}'", path.display(), editor);

        let status = Command::new(editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Editor(format!("failed to start '{editor}': {e}")))?;

        if !status.success() {
            warn!("editor '{editor}' exited with {status}");
            return Err(AppError::Editor(format!(
                "'{editor}' exited with a non-zero status"
            )));
        }
        Ok(())
    }
}
