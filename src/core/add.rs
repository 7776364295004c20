use chrono::{DateTime, Utc};

use crate::errors::AppResult;
use crate::models::Record;
use crate::store::RecordStore;

pub const DEFAULT_NAME: &str = "default";

/// Name given on the command line, or `default`.
pub fn name_or_default(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => DEFAULT_NAME.to_string(),
    }
}

/// Business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append one timestamp to the series `name` and return what was stored.
    pub fn apply(store: &RecordStore, name: &str, at: DateTime<Utc>) -> AppResult<Record> {
        let record = Record::new(name, at);
        store.append(&record)?;
        Ok(record)
    }
}
