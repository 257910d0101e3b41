// Detection algorithms and batch orchestration
pub mod batch;
pub mod forward_extremum;
pub mod hit_classifier;
pub mod interval_extractor;

pub use batch::{analyze_series, run_batch};
pub use forward_extremum::{forward_extrema, forward_extrema_for, forward_max, forward_min};
pub use hit_classifier::{classify_hit, peak_move_pct};
pub use interval_extractor::IntervalExtractor;
