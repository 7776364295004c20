#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tstamp::models::Record;

/// Isolated HOME + store for one test.
pub struct Sandbox {
    pub dir: TempDir,
    pub store: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = dir.path().join("ts").join("timestamps.csv");
        Self { dir, store }
    }

    pub fn store_arg(&self) -> String {
        self.store.to_string_lossy().to_string()
    }

    /// The binary, pointed at this sandbox and pinned to UTC display.
    pub fn tstamp(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tstamp");
        cmd.env("HOME", self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .args(["--store", &self.store_arg()]);
        cmd
    }

    pub fn write_store(&self, lines: &[&str]) {
        fs::create_dir_all(self.store.parent().expect("store dir")).expect("mkdir");
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&self.store, content).expect("write store");
    }

    pub fn set_utc_display(&self) {
        fs::create_dir_all(self.store.parent().expect("store dir")).expect("mkdir");
        fs::write(self.tz_file(), "UTC").expect("write tz");
    }

    pub fn tz_file(&self) -> PathBuf {
        self.store.parent().expect("store dir").join("tz")
    }

    pub fn read_store(&self) -> String {
        fs::read_to_string(&self.store).unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// 2024-01-01 at the given UTC time.
pub fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid time")
        .and_utc()
}

pub fn rec(name: &str, ts: DateTime<Utc>) -> Record {
    Record::new(name, ts)
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
