use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timezone::TimezoneSetting;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timezone { zone, reset } = cmd {
        let setting = TimezoneSetting::beside(&cfg.store_path()?);

        if *reset {
            setting.reset()?;
            success("Timezone reset, using local time");
        } else if let Some(z) = zone {
            let tz = setting.set(z)?;
            success(format!("Timezone set to {}", tz.name()));
        } else {
            info(format!("Timezone: {}", setting.load()));
        }
    }

    Ok(())
}
