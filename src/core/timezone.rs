//! Display timezone override: a one-line file holding an IANA zone name.

use chrono_tz::Tz;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::timefmt::DisplayZone;
use crate::errors::{AppError, AppResult};

pub const TIMEZONE_FILENAME: &str = "tz";

pub struct TimezoneSetting {
    path: PathBuf,
}

impl TimezoneSetting {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The override file lives next to the record store.
    pub fn beside(store_path: &Path) -> Self {
        let dir = store_path.parent().unwrap_or_else(|| Path::new("."));
        Self::new(dir.join(TIMEZONE_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configured zone. A missing file means `Local`; a file that cannot be
    /// read or names an unknown zone is an error.
    pub fn read(&self) -> AppResult<DisplayZone> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(DisplayZone::Local),
            Err(e) => return Err(e.into()),
        };

        Ok(DisplayZone::Named(parse_zone(&content)?))
    }

    /// Configured zone, falling back to `Local` with a warning when the file
    /// is unusable.
    pub fn load(&self) -> DisplayZone {
        match self.read() {
            Ok(zone) => zone,
            Err(e) => {
                warn!(
                    "ignoring timezone file {}: {}, using local time",
                    self.path.display(),
                    e
                );
                DisplayZone::Local
            }
        }
    }

    /// Validate and persist `zone`. An unknown zone leaves the file untouched.
    pub fn set(&self, zone: &str) -> AppResult<Tz> {
        let tz = parse_zone(zone)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, tz.name())?;

        debug!("timezone set to {} in {}", tz.name(), self.path.display());
        Ok(tz)
    }

    /// Back to local time.
    pub fn reset(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!("removed {}", self.path.display());
        }
        Ok(())
    }
}

pub fn parse_zone(name: &str) -> AppResult<Tz> {
    let name = name.trim();
    Tz::from_str(name).map_err(|_| AppError::InvalidTimezone(name.to_string()))
}
