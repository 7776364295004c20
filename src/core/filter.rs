//! Name-based selection over a record set.

use crate::models::{Record, RecordSet};

/// Exact mode compares names for equality; substring mode keeps a record when
/// its name contains one of the candidates (`name.contains(candidate)`).
fn matches(record: &Record, names: &[String], exact: bool) -> bool {
    if exact {
        names.iter().any(|n| record.name == *n)
    } else {
        names.iter().any(|n| record.name.contains(n.as_str()))
    }
}

/// Records whose name matches `names`. An empty `names` list keeps everything.
pub fn keep_matching(records: &[Record], names: &[String], exact: bool) -> RecordSet {
    if names.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches(r, names, exact))
        .cloned()
        .collect()
}

/// Complement of [`keep_matching`]: with an empty `names` list every record
/// matches, so nothing is kept.
pub fn remove_matching(records: &[Record], names: &[String], exact: bool) -> RecordSet {
    if names.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| !matches(r, names, exact))
        .cloned()
        .collect()
}

/// Distinct names in first-seen order.
pub fn unique_names(records: &[Record]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !out.iter().any(|n| *n == r.name) {
            out.push(r.name.clone());
        }
    }
    out
}

pub fn name_exists(records: &[Record], name: &str) -> bool {
    records.iter().any(|r| r.name == name)
}
