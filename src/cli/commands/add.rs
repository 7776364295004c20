use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, name_or_default};
use crate::core::timefmt;
use crate::core::timezone::TimezoneSetting;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Add a timestamp to a stopwatch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let name = name_or_default(name.as_deref());
        let store_path = cfg.store_path()?;
        let store = RecordStore::new(&store_path);

        let record = AddLogic::apply(&store, &name, timefmt::now_truncated())?;

        let zone = TimezoneSetting::beside(&store_path).load();
        let shown = timefmt::to_display_zone(&record.timestamp, &zone);
        success("Timestamp added");
        println!("{}: {}", record.name, timefmt::format(&shown));
    }

    Ok(())
}
