//! Per-series verdict: did the price ever reach the target within the forward window?
//! Answers "whether", not "where"; see the interval extractor for that.

use crate::config::Direction;
use crate::domain::DetectionParameters;
use crate::utils::{index_of_max, index_of_min, relative_move};

/// `extrema` must come from the forward-extremum pass in the mode matching `params.direction`.
/// Non-positive bases and undefined extrema are skipped, so short or junk series answer `false`.
pub fn classify_hit(prices: &[f64], extrema: &[Option<f64>], params: &DetectionParameters) -> bool {
    debug_assert_eq!(prices.len(), extrema.len());
    if prices.len() < 2 {
        return false;
    }

    prices
        .iter()
        .zip(extrema.iter())
        .any(|(&base, ext)| match *ext {
            Some(ext) if base > 0.0 => params.is_met(base, ext),
            _ => false,
        })
}

/// Strongest move (in percent) reachable from any valid base, in the hunt's direction:
/// the largest rise for Up, the deepest fall for Down.
pub fn peak_move_pct(prices: &[f64], extrema: &[Option<f64>], direction: Direction) -> Option<f64> {
    let moves: Vec<f64> = prices
        .iter()
        .zip(extrema.iter())
        .filter_map(|(&base, ext)| match *ext {
            Some(ext) if base > 0.0 => Some(relative_move(base, ext)),
            _ => None,
        })
        .collect();

    let idx = match direction {
        Direction::Up => index_of_max(&moves),
        Direction::Down => index_of_min(&moves),
    }?;

    Some(moves[idx] * 100.0)
}
