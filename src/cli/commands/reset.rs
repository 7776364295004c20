use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::name_or_default;
use crate::core::reset::{ResetLogic, ResetOutcome};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { name, all, yes } = cmd {
        let store = RecordStore::new(cfg.store_path()?);
        let skip_prompt = *yes || !cfg.confirm_destructive;
        let confirm = |prompt: &str| skip_prompt || ask_confirmation(prompt);

        let outcome = if *all {
            ResetLogic::all(&store, name.as_deref(), confirm)?
        } else {
            let name = name_or_default(name.as_deref());
            ResetLogic::single(&store, &name, confirm)?
        };

        match outcome {
            ResetOutcome::Done(_) => success("Done"),
            ResetOutcome::Aborted => info("Aborted"),
        }
    }

    Ok(())
}
