//! Diff report: chronological table with since-prev / since-first / since-now
//! columns and a trailing "Now" line.

use chrono::{DateTime, TimeDelta, Utc};
use unicode_width::UnicodeWidthStr;

use crate::core::filter;
use crate::core::timefmt::{self, DisplayZone};
use crate::models::{DisplayConfig, Record, RecordSet};
use crate::utils::table::{Column, Table};

pub const MIN_NAME_COLUMN_WIDTH: usize = 6;
pub const TIMESTAMP_COLUMN_WIDTH: usize = 19;
pub const PREV_DIFF_COLUMN_WIDTH: usize = 12;
pub const FIRST_DIFF_COLUMN_WIDTH: usize = 13;
pub const NOW_DIFF_COLUMN_WIDTH: usize = 11;

pub const NOW_LABEL: &str = "Now";

/// One rendered line. `None` cells are blank (or the column is disabled).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub timestamp: String,
    pub since_prev: Option<TimeDelta>,
    pub since_first: Option<TimeDelta>,
    pub since_now: Option<TimeDelta>,
}

impl ReportRow {
    pub fn is_now_row(&self) -> bool {
        self.name.is_empty() && self.timestamp == NOW_LABEL
    }
}

/// Stable ascending sort by timestamp; equal timestamps keep input order.
pub fn sort_chronologically(records: &[Record]) -> RecordSet {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}

/// `max(longest name + 2, MIN_NAME_COLUMN_WIDTH)`.
pub fn name_column_width(records: &[Record]) -> usize {
    let longest = records
        .iter()
        .map(|r| UnicodeWidthStr::width(r.name.as_str()))
        .max()
        .unwrap_or(0);
    (longest + 2).max(MIN_NAME_COLUMN_WIDTH)
}

pub struct DiffReport {
    config: DisplayConfig,
    zone: DisplayZone,
    now: DateTime<Utc>,
}

impl DiffReport {
    /// `now` is sampled once by the caller and reused for every row.
    pub fn new(config: DisplayConfig, zone: DisplayZone, now: DateTime<Utc>) -> Self {
        Self {
            config,
            zone,
            now: timefmt::truncate(now),
        }
    }

    pub fn rows(&self, records: &[Record]) -> Vec<ReportRow> {
        let cfg = &self.config;
        let sorted = sort_chronologically(records);

        let mut rows = Vec::with_capacity(sorted.len() + 1);
        let mut first: Option<DateTime<Utc>> = None;
        let mut prev: Option<DateTime<Utc>> = None;

        for record in &sorted {
            let ts = record.timestamp;
            let local = timefmt::to_display_zone(&ts, &self.zone);

            let (since_prev, since_first) = match (prev, first) {
                (Some(p), Some(f)) => (
                    cfg.show_prev_diff.then(|| ts - p),
                    cfg.show_first_diff.then(|| ts - f),
                ),
                _ => {
                    first = Some(ts);
                    (None, None)
                }
            };

            rows.push(ReportRow {
                name: record.name.clone(),
                timestamp: timefmt::format(&local),
                since_prev,
                since_first,
                since_now: cfg.show_now_diff.then(|| self.now - ts),
            });

            prev = Some(ts);
        }

        if let (Some(last), Some(first)) = (prev, first)
            && cfg.wants_now_row()
        {
            rows.push(ReportRow {
                name: String::new(),
                timestamp: NOW_LABEL.to_string(),
                since_prev: cfg.show_prev_diff.then(|| self.now - last),
                since_first: cfg.show_first_diff.then(|| self.now - first),
                since_now: None,
            });
        }

        rows
    }

    /// Render the table. Empty input renders nothing, header included.
    pub fn render(&self, records: &[Record]) -> String {
        if records.is_empty() {
            return String::new();
        }

        let cfg = &self.config;
        let mut columns = vec![
            Column::left("Name", name_column_width(records)),
            Column::left("Timestamp", TIMESTAMP_COLUMN_WIDTH),
        ];
        if cfg.show_prev_diff {
            columns.push(Column::right("Since prev", PREV_DIFF_COLUMN_WIDTH));
        }
        if cfg.show_first_diff {
            columns.push(Column::right("Since first", FIRST_DIFF_COLUMN_WIDTH));
        }
        if cfg.show_now_diff {
            columns.push(Column::right("Since now", NOW_DIFF_COLUMN_WIDTH));
        }

        let mut table = Table::new(columns);
        for row in self.rows(records) {
            let mut cells = vec![row.name, row.timestamp];
            if cfg.show_prev_diff {
                cells.push(duration_cell(row.since_prev));
            }
            if cfg.show_first_diff {
                cells.push(duration_cell(row.since_first));
            }
            if cfg.show_now_diff {
                cells.push(duration_cell(row.since_now));
            }
            table.add_row(cells);
        }

        table.render()
    }

    /// One titled report per series, in first-seen order.
    pub fn render_split(&self, records: &[Record]) -> String {
        let names = filter::unique_names(records);
        let mut sections = Vec::with_capacity(names.len());

        for name in &names {
            let series = filter::keep_matching(records, std::slice::from_ref(name), true);
            let underline = "-".repeat(UnicodeWidthStr::width(name.as_str()).max(3));
            sections.push(format!("{name}\n{underline}\n{}", self.render(&series)));
        }

        sections.join("\n")
    }
}

fn duration_cell(delta: Option<TimeDelta>) -> String {
    delta.map(timefmt::format_duration).unwrap_or_default()
}
