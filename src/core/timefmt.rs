//! Timestamp codec: the fixed `YYYY-MM-DD HH:MM:SS` layout, display-zone
//! projection and duration rendering.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SubsecRound, TimeDelta, Utc};
use chrono_tz::Tz;
use std::fmt;

use crate::errors::{AppError, AppResult};

pub const LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Zone used only for rendering; storage stays in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Named(Tz),
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "Local"),
            DisplayZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Parse a stored timestamp (always UTC).
///
/// `line` is only used for the error message.
pub fn parse_at(text: &str, line: u64) -> AppResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text.trim(), LAYOUT)
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::Format {
            line,
            text: text.to_string(),
        })
}

pub fn parse(text: &str) -> AppResult<DateTime<Utc>> {
    parse_at(text, 0)
}

pub fn format<Z: chrono::TimeZone>(ts: &DateTime<Z>) -> String
where
    Z::Offset: fmt::Display,
{
    ts.format(LAYOUT).to_string()
}

pub fn truncate(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(0)
}

/// Current instant at one-second resolution. Capture it once per report.
pub fn now_truncated() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// Same instant, rendered offset of the display zone.
pub fn to_display_zone(ts: &DateTime<Utc>, zone: &DisplayZone) -> DateTime<FixedOffset> {
    match zone {
        DisplayZone::Local => ts.with_timezone(&Local).fixed_offset(),
        DisplayZone::Named(tz) => ts.with_timezone(tz).fixed_offset(),
    }
}

/// Render a duration as `1h2m3s`, `4m0s` or `5s`.
///
/// Hours never roll over into days, so a longer duration always yields a
/// longer (or equal-length, larger) string in a right-aligned column.
pub fn format_duration(delta: TimeDelta) -> String {
    let total = delta.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.unsigned_abs();

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}
