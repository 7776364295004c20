use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, resolve_editor};
use crate::errors::AppResult;
use crate::store::RecordStore;

/// Open the record store in an editor. Rows are `YYYY-MM-DD HH:MM:SS,name` in UTC.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { editor } = cmd {
        let store = RecordStore::new(cfg.store_path()?);
        store.ensure_exists()?;

        let editor = resolve_editor(editor.as_deref(), cfg.editor.as_deref());
        EditLogic::open(store.path(), &editor)?;

        // Surface a broken edit now rather than on the next `show`.
        store.load_all()?;
    }

    Ok(())
}
