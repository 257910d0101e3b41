use serde::{Deserialize, Serialize};

use crate::models::MatchingWindow;

/// Per-series verdict plus the concrete windows for highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerResult {
    pub id: String,
    /// The series reached the target somewhere
    pub hit: bool,
    /// Ordered by `start_index`, pairwise non-overlapping. Empty is normal.
    pub windows: Vec<MatchingWindow>,
    /// Strongest move in the requested direction reachable within the window, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_move_pct: Option<f64>,
    /// Usable points after normalisation
    pub points: usize,
}

impl TickerResult {
    /// The trivial verdict for a series too short to analyse.
    pub fn empty(id: impl Into<String>, points: usize) -> Self {
        Self {
            id: id.into(),
            hit: false,
            windows: Vec::new(),
            peak_move_pct: None,
            points,
        }
    }

    pub fn is_matching(&self) -> bool {
        self.hit || !self.windows.is_empty()
    }

    /// Window with the largest absolute move, if any.
    pub fn best_window(&self) -> Option<&MatchingWindow> {
        self.windows.iter().max_by(|a, b| {
            a.percent_change
                .abs()
                .total_cmp(&b.percent_change.abs())
        })
    }
}

/// Everything one batch produced, keyed by series id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub request_id: u64,
    /// Ids whose hit flag is set or whose window list is non-empty
    pub matching_ids: Vec<String>,
    /// One entry per distinct input id, in first-appearance order
    pub results: Vec<TickerResult>,
    pub points_dropped: usize,
    pub duration_ms: u128,
}

impl BatchResult {
    pub fn get(&self, id: &str) -> Option<&TickerResult> {
        self.results.iter().find(|r| r.id == id)
    }

    pub fn series_count(&self) -> usize {
        self.results.len()
    }
}
