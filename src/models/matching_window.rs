use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reported threshold crossing: the move from `start_index` to `end_index`
/// in the normalised series reached the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingWindow {
    pub start_index: usize,
    pub end_index: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `end_index - start_index`, in entries
    pub actual_length: usize,
    /// Signed move in percent, straight from the two prices (not clamped to the target)
    pub percent_change: f64,
    pub start_price: f64,
    pub end_price: f64,
}

impl MatchingWindow {
    /// Do two windows share any interior? Touching endpoints is not overlap.
    pub fn overlaps(&self, other: &MatchingWindow) -> bool {
        self.start_index < other.end_index && other.start_index < self.end_index
    }
}
