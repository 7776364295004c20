use chrono::{DateTime, Utc};

use crate::core::filter::keep_matching;
use crate::core::report::DiffReport;
use crate::core::timefmt::DisplayZone;
use crate::models::{DisplayConfig, Record};

/// What `show` asked for, minus the I/O.
#[derive(Debug, Clone, Default)]
pub struct ShowRequest {
    pub names: Vec<String>,
    pub exact: bool,
    pub split: bool,
    pub display: DisplayConfig,
}

pub struct ShowLogic;

impl ShowLogic {
    /// Rendered report, or `None` when the filter leaves no records.
    pub fn render(
        records: &[Record],
        req: &ShowRequest,
        zone: DisplayZone,
        now: DateTime<Utc>,
    ) -> Option<String> {
        let selected = keep_matching(records, &req.names, req.exact);
        if selected.is_empty() {
            return None;
        }

        let report = DiffReport::new(req.display, zone, now);
        if req.split {
            Some(report.render_split(&selected))
        } else {
            Some(report.render(&selected))
        }
    }
}
