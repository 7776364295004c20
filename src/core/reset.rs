//! `reset`: drop one series, or every series matching a filter.
//!
//! The store is read first and only written after confirmation.

use crate::core::filter::{keep_matching, name_exists, remove_matching};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Records removed.
    Done(usize),
    Aborted,
}

pub struct ResetLogic;

impl ResetLogic {
    /// Remove the series `name` after `confirm` approves the prompt.
    pub fn single<F>(store: &RecordStore, name: &str, confirm: F) -> AppResult<ResetOutcome>
    where
        F: FnOnce(&str) -> bool,
    {
        let records = store.load_all()?;

        if !name_exists(&records, name) {
            return Err(AppError::NotFound("This stopwatch is not running".into()));
        }

        if !confirm(&format!("Reset {name}?")) {
            return Ok(ResetOutcome::Aborted);
        }

        let names = [name.to_string()];
        let remaining = remove_matching(&records, &names, true);
        let removed = records.len() - remaining.len();
        Self::persist(store, &remaining)?;
        Ok(ResetOutcome::Done(removed))
    }

    /// Remove every record, or with `filter` only series whose name contains it.
    pub fn all<F>(store: &RecordStore, filter: Option<&str>, confirm: F) -> AppResult<ResetOutcome>
    where
        F: FnOnce(&str) -> bool,
    {
        let records = store.load_all()?;
        let names: Vec<String> = filter.map(|f| vec![f.to_string()]).unwrap_or_default();

        let doomed = keep_matching(&records, &names, false);
        if doomed.is_empty() {
            return Err(AppError::NotFound("No stopwatches to reset".into()));
        }

        let prompt = match filter {
            Some(f) => format!("Reset all stopwatches matching '{f}'?"),
            None => "Reset all?".to_string(),
        };
        if !confirm(&prompt) {
            return Ok(ResetOutcome::Aborted);
        }

        let remaining = remove_matching(&records, &names, false);
        Self::persist(store, &remaining)?;
        Ok(ResetOutcome::Done(doomed.len()))
    }

    fn persist(store: &RecordStore, remaining: &[crate::models::Record]) -> AppResult<()> {
        if remaining.is_empty() {
            store.delete()
        } else {
            store.rewrite_all(remaining)
        }
    }
}
