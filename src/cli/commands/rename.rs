use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rename::RenameLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { old, new } = cmd {
        let store = RecordStore::new(cfg.store_path()?);
        RenameLogic::apply(&store, old, new)?;
        success("Done");
    }

    Ok(())
}
