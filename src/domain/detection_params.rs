use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::config::{ANALYSIS, ChainMode, Direction};
use crate::utils::relative_move;

/// What counts as a qualifying move, shared by every series in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionParameters {
    /// Target fractional move, e.g. 0.10 for 10%
    pub pct: f64,
    /// Look-ahead length in subsequent entries
    pub max_window: usize,
    pub direction: Direction,
    #[serde(default)]
    pub chain_mode: ChainMode,
}

impl Default for DetectionParameters {
    fn default() -> Self {
        Self {
            pct: ANALYSIS.default_pct,
            max_window: ANALYSIS.default_max_window,
            direction: ANALYSIS.default_direction,
            chain_mode: ANALYSIS.default_chain_mode,
        }
    }
}

impl DetectionParameters {
    pub fn new(pct: f64, max_window: usize, direction: Direction) -> Self {
        Self {
            pct,
            max_window,
            direction,
            chain_mode: ChainMode::default(),
        }
    }

    pub fn with_chain_mode(mut self, chain_mode: ChainMode) -> Self {
        self.chain_mode = chain_mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.pct.is_finite() && self.pct > 0.0,
            "pct must be a finite number > 0 (got {})",
            self.pct
        );
        ensure!(self.max_window > 0, "maxWindow must be > 0");
        Ok(())
    }

    /// Does a move from `base` to `candidate` reach the target in our direction?
    /// `base` must be positive.
    ///
    /// Up:   `candidate / base - 1 >= pct`
    /// Down: `candidate / base - 1 <= -pct` (with `down_tolerance` slack)
    ///
    /// Both the hit classifier and the interval extractor go through here, so they
    /// can never disagree about a boundary crossing.
    #[inline]
    pub fn is_met(&self, base: f64, candidate: f64) -> bool {
        let change = relative_move(base, candidate);
        match self.direction {
            Direction::Up => change >= self.pct,
            Direction::Down => change <= -self.pct + ANALYSIS.down_tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_parameters() {
        assert!(DetectionParameters::new(0.0, 5, Direction::Up).validate().is_err());
        assert!(DetectionParameters::new(-0.1, 5, Direction::Up).validate().is_err());
        assert!(DetectionParameters::new(f64::NAN, 5, Direction::Up).validate().is_err());
        assert!(DetectionParameters::new(0.1, 0, Direction::Down).validate().is_err());
        assert!(DetectionParameters::new(0.1, 1, Direction::Down).validate().is_ok());
    }

    #[test]
    fn exact_boundaries_count() {
        let up = DetectionParameters::new(0.10, 6, Direction::Up);
        assert!(up.is_met(10.0, 11.0));
        assert!(!up.is_met(10.0, 10.99));

        let down = DetectionParameters::new(0.10, 6, Direction::Down);
        assert!(down.is_met(10.0, 9.0));
        assert!(!down.is_met(10.0, 9.01));
    }

    #[test]
    fn chain_mode_defaults_when_absent() {
        let p: DetectionParameters =
            serde_json::from_str(r#"{"pct":0.1,"maxWindow":4,"direction":"down"}"#).unwrap();
        assert_eq!(p.chain_mode, ChainMode::Chained);
        assert_eq!(p.direction, Direction::Down);
        assert_eq!(p.max_window, 4);
    }
}
