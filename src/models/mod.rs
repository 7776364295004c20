pub mod display;
pub mod record;

pub use display::DisplayConfig;
pub use record::{Record, RecordSet};
