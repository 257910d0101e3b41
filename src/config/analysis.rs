//! Detection defaults and engine tuning

use crate::config::types::{ChainMode, Direction};

/// The Master Scan Configuration
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Target fractional move used when a caller does not supply one (0.10 = 10%)
    pub default_pct: f64,
    /// Look-ahead length in entries (not calendar days)
    pub default_max_window: usize,
    pub default_direction: Direction,
    pub default_chain_mode: ChainMode,

    /// Absorbs floating rounding at exact Down boundary crossings.
    /// Up needs none: `end / start - 1` overshoots an exact crossing rather than undershooting it.
    pub down_tolerance: f64,

    /// Fewer usable points than this and a series is trivially non-matching
    pub min_points: usize,

    /// Batches with at least this many series fan out across the rayon pool
    pub parallel_min_series: usize,
}

pub const ANALYSIS: ScanConfig = ScanConfig {
    default_pct: 0.10,
    default_max_window: 20,
    default_direction: Direction::Up,
    default_chain_mode: ChainMode::Chained,
    down_tolerance: 1e-10,
    min_points: 2,
    parallel_min_series: 8,
};
