use std::borrow::Cow;
use std::collections::HashMap;

use anyhow::Result;
use rayon::prelude::*;

use crate::analysis::forward_extremum::forward_extrema_for;
use crate::analysis::hit_classifier::{classify_hit, peak_move_pct};
use crate::analysis::interval_extractor::IntervalExtractor;
use crate::config::ANALYSIS;
use crate::domain::DetectionParameters;
use crate::models::{BatchResult, TickerResult, TimeSeries};
use crate::utils::AppInstant;

/// Full pipeline for one series. Never fails: junk input degrades to an empty verdict.
/// Returns the verdict and how many points normalisation threw away.
pub fn analyze_series(series: &TimeSeries, params: &DetectionParameters) -> (TickerResult, usize) {
    let normalized = series.normalized();
    let dropped = normalized.dropped;

    if normalized.len() < ANALYSIS.min_points {
        return (TickerResult::empty(&series.id, normalized.len()), dropped);
    }

    let prices = &normalized.prices;
    let extrema = forward_extrema_for(prices, params.max_window, params.direction);

    let result = TickerResult {
        id: series.id.clone(),
        hit: classify_hit(prices, &extrema, params),
        windows: IntervalExtractor::extract(&normalized, params),
        peak_move_pct: peak_move_pct(prices, &extrema, params.direction),
        points: normalized.len(),
    };

    (result, dropped)
}

/// Run every series against one shared parameter set.
///
/// Series are independent, so large batches fan out over the rayon pool. Results follow
/// first-appearance order of ids; a repeated id is merged into its first occurrence.
/// Only invalid parameters produce an `Err`.
pub fn run_batch(
    request_id: u64,
    series: &[TimeSeries],
    params: &DetectionParameters,
) -> Result<BatchResult> {
    params.validate()?;
    let start = AppInstant::now();

    let merged = merge_duplicate_ids(series);

    let outcomes: Vec<(TickerResult, usize)> = crate::trace_time!(
        &format!("Batch #{} ({} series)", request_id, merged.len()),
        50_000,
        {
            if merged.len() >= ANALYSIS.parallel_min_series {
                merged
                    .par_iter()
                    .map(|ts| analyze_series(ts, params))
                    .collect()
            } else {
                merged.iter().map(|ts| analyze_series(ts, params)).collect()
            }
        }
    );

    let points_dropped = outcomes.iter().map(|(_, dropped)| dropped).sum();
    let results: Vec<TickerResult> = outcomes.into_iter().map(|(r, _)| r).collect();
    let matching_ids = results
        .iter()
        .filter(|r| r.is_matching())
        .map(|r| r.id.clone())
        .collect();

    Ok(BatchResult {
        request_id,
        matching_ids,
        results,
        points_dropped,
        duration_ms: start.elapsed().as_millis(),
    })
}

/// One entry per distinct id. Only ids that actually repeat get cloned.
fn merge_duplicate_ids(series: &[TimeSeries]) -> Vec<Cow<'_, TimeSeries>> {
    let mut merged: Vec<Cow<'_, TimeSeries>> = Vec::with_capacity(series.len());
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(series.len());

    for ts in series {
        match slots.get(ts.id.as_str()) {
            Some(&slot) => merged[slot].to_mut().points.extend_from_slice(&ts.points),
            None => {
                slots.insert(ts.id.as_str(), merged.len());
                merged.push(Cow::Borrowed(ts));
            }
        }
    }

    merged
}
