use crate::config::Config;
use crate::core::filter::unique_names;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;

/// Print every stopwatch name, in the order they were first used.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let records = RecordStore::new(cfg.store_path()?).load_all()?;
    let names = unique_names(&records);

    if names.is_empty() {
        info("No records found");
        return Ok(());
    }

    for name in names {
        println!("{name}");
    }
    Ok(())
}
