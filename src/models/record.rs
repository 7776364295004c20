use chrono::{DateTime, Utc};

use crate::core::timefmt;

/// One named timestamp, always held in UTC at one-second resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub timestamp: DateTime<Utc>, // ⇔ column 0 (TEXT "YYYY-MM-DD HH:MM:SS", UTC)
}

impl Record {
    /// Build a record, dropping anything below whole seconds.
    pub fn new(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            timestamp: timefmt::truncate(timestamp),
        }
    }

    pub fn timestamp_str(&self) -> String {
        timefmt::format(&self.timestamp)
    }
}

/// Records in append order; names repeat, one series per name.
pub type RecordSet = Vec<Record>;
