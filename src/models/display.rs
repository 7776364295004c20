/// Which diff columns the report renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_prev_diff: bool,
    pub show_first_diff: bool,
    pub show_now_diff: bool,
}

impl DisplayConfig {
    pub fn new(show_prev_diff: bool, show_first_diff: bool, show_now_diff: bool) -> Self {
        Self {
            show_prev_diff,
            show_first_diff,
            show_now_diff,
        }
    }

    /// The trailing "Now" row only carries the prev/first columns.
    pub fn wants_now_row(&self) -> bool {
        self.show_prev_diff || self.show_first_diff
    }
}
