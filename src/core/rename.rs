use log::debug;

use crate::core::filter::name_exists;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;

pub struct RenameLogic;

impl RenameLogic {
    /// Move every record of `old` to `new` and rewrite the store.
    /// Returns how many records were renamed.
    pub fn apply(store: &RecordStore, old: &str, new: &str) -> AppResult<usize> {
        let mut records = store.load_all()?;

        if !name_exists(&records, old) {
            return Err(AppError::NotFound("This stopwatch does not exist".into()));
        }
        if name_exists(&records, new) {
            return Err(AppError::Validation("This stopwatch already exists".into()));
        }

        let mut renamed = 0;
        for r in records.iter_mut().filter(|r| r.name == old) {
            r.name = new.to_string();
            renamed += 1;
        }

        store.rewrite_all(&records)?;
        debug!("renamed {renamed} records from '{old}' to '{new}'");
        Ok(renamed)
    }
}
