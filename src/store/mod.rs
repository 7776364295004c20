//! Flat-file record store (`timestamp,name` per line, no header, UTC).
//!
//! The whole table is loaded for every command; mutating commands rewrite it
//! wholesale. Record counts are personal-use small, so there is no index and
//! no random access.

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::timefmt;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordSet};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every record in file order. A missing file is an empty set.
    pub fn load_all(&self) -> AppResult<RecordSet> {
        if !self.exists() {
            debug!("store {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let (ts, name) = match (row.get(0), row.get(1), row.len()) {
                (Some(ts), Some(name), 2) => (ts, name),
                _ => {
                    return Err(AppError::Format {
                        line,
                        text: row.iter().collect::<Vec<_>>().join(","),
                    });
                }
            };

            let timestamp = timefmt::parse_at(ts, line)?;
            records.push(Record::new(name, timestamp));
        }

        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Append a single record. The row is buffered and written in one go,
    /// then flushed and synced before the handle is dropped.
    pub fn append(&self, record: &Record) -> AppResult<()> {
        self.ensure_parent()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record([record.timestamp_str().as_str(), record.name.as_str()])?;
        wtr.flush()?;

        let file = wtr
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))?;
        file.sync_all()?;

        debug!("appended '{}' to {}", record.name, self.path.display());
        Ok(())
    }

    /// Replace the store with `records`, in iteration order.
    ///
    /// Delete then write: a crash in between leaves an empty store.
    pub fn rewrite_all(&self, records: &[Record]) -> AppResult<()> {
        self.delete()?;
        self.ensure_parent()?;

        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        for record in records {
            wtr.write_record([record.timestamp_str().as_str(), record.name.as_str()])?;
        }
        wtr.flush()?;

        debug!(
            "rewrote {} with {} records",
            self.path.display(),
            records.len()
        );
        Ok(())
    }

    /// Remove the backing file. Missing file is fine.
    pub fn delete(&self) -> AppResult<()> {
        if self.exists() {
            fs::remove_file(&self.path)?;
            debug!("deleted {}", self.path.display());
        }
        Ok(())
    }

    /// Create an empty store if none exists, so an editor has a file to open.
    pub fn ensure_exists(&self) -> AppResult<()> {
        self.ensure_parent()?;
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        f.flush()?;
        Ok(())
    }

    fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
