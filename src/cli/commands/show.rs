use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::show::{ShowLogic, ShowRequest};
use crate::core::timefmt;
use crate::core::timezone::TimezoneSetting;
use crate::errors::AppResult;
use crate::models::DisplayConfig;
use crate::store::RecordStore;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        names,
        split,
        exact,
        diff_prev,
        diff_first,
        diff_now,
    } = cmd
    {
        let store_path = cfg.store_path()?;
        let records = RecordStore::new(&store_path).load_all()?;

        let req = ShowRequest {
            names: names.clone(),
            exact: *exact,
            split: *split,
            display: DisplayConfig::new(*diff_prev, *diff_first, *diff_now),
        };
        let zone = TimezoneSetting::beside(&store_path).load();

        match ShowLogic::render(&records, &req, zone, timefmt::now_truncated()) {
            Some(table) => print!("{table}"),
            None => info("No records found"),
        }
    }

    Ok(())
}
