use crate::domain::DetectionParameters;
use crate::models::{MatchingWindow, NormalizedSeries};
use crate::utils::percent_change;

/// Greedy scan for concrete, non-overlapping threshold crossings.
///
/// From scan position `i`, report the *earliest* `j` in `i+1 ..= i+N` whose price meets the target,
/// then resume at `j` (Chained) or `j + 1` (Disjoint). Positions with no crossing advance by one.
/// Worst case O(n * N); N is small.
pub struct IntervalExtractor;

impl IntervalExtractor {
    pub fn extract(series: &NormalizedSeries, params: &DetectionParameters) -> Vec<MatchingWindow> {
        Self::crossings(&series.prices, params)
            .into_iter()
            .map(|(start, end)| Self::create_window(series, start, end))
            .collect()
    }

    /// `(start_index, end_index)` pairs, ascending and non-overlapping.
    pub fn crossings(prices: &[f64], params: &DetectionParameters) -> Vec<(usize, usize)> {
        let n = prices.len();
        let mut found = Vec::new();
        if n < 2 || params.max_window == 0 {
            return found;
        }

        let mut i = 0;
        while i < n - 1 {
            let base = prices[i];
            if base <= 0.0 {
                i += 1;
                continue;
            }

            let far_edge = i.saturating_add(params.max_window).min(n - 1);
            match (i + 1..=far_edge).find(|&j| params.is_met(base, prices[j])) {
                Some(j) => {
                    found.push((i, j));
                    i = params.chain_mode.resume_after(j);
                }
                None => i += 1,
            }
        }

        found
    }

    fn create_window(series: &NormalizedSeries, start: usize, end: usize) -> MatchingWindow {
        let start_price = series.prices[start];
        let end_price = series.prices[end];

        MatchingWindow {
            start_index: start,
            end_index: end,
            start_date: series.dates[start],
            end_date: series.dates[end],
            actual_length: end - start,
            percent_change: percent_change(start_price, end_price),
            start_price,
            end_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChainMode, Direction};
    use crate::models::TimeSeries;
    use chrono::NaiveDate;

    fn params(pct: f64, window: usize, direction: Direction) -> DetectionParameters {
        DetectionParameters::new(pct, window, direction)
    }

    fn series(prices: &[f64]) -> NormalizedSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        TimeSeries::from_daily_prices("T", start, prices).normalized()
    }

    #[test]
    fn single_ten_percent_step() {
        let s = series(&[10.0, 11.0]);
        let windows = IntervalExtractor::extract(&s, &params(0.10, 6, Direction::Up));
        assert_eq!(windows.len(), 1);
        let w = &windows[0];
        assert_eq!((w.start_index, w.end_index), (0, 1));
        assert_eq!(w.actual_length, 1);
        assert!((w.percent_change - 10.0).abs() < 1e-9);
        assert_eq!(w.start_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(w.end_date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!((w.start_price, w.end_price), (10.0, 11.0));
    }

    #[test]
    fn earliest_crossing_wins_and_change_is_not_clamped() {
        // From 0: index 2 (+20%) is the first to clear +10%, even though index 3 is higher
        let p = [10.0, 10.5, 12.0, 13.0];
        let found = IntervalExtractor::crossings(&p, &params(0.10, 5, Direction::Up));
        assert_eq!(found, vec![(0, 2)]);

        let windows = IntervalExtractor::extract(&series(&p), &params(0.10, 5, Direction::Up));
        assert!((windows[0].percent_change - 20.0).abs() < 1e-9);
    }

    #[test]
    fn chained_windows_share_endpoints() {
        let p = [10.0, 11.0, 13.0, 15.0];
        let found = IntervalExtractor::crossings(&p, &params(0.10, 3, Direction::Up));
        assert_eq!(found, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn disjoint_windows_skip_the_endpoint() {
        let p = [10.0, 11.0, 13.0, 15.0];
        let prm = params(0.10, 3, Direction::Up).with_chain_mode(ChainMode::Disjoint);
        let found = IntervalExtractor::crossings(&p, &prm);
        assert_eq!(found, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn down_crossings() {
        let p = [10.0, 9.5, 9.0, 9.8, 8.8];
        let found = IntervalExtractor::crossings(&p, &params(0.10, 6, Direction::Down));
        // 9.0 -> 8.8 is only -2.2%, but 9.8 -> 8.8 clears -10%
        assert_eq!(found, vec![(0, 2), (3, 4)]);
    }

    #[test]
    fn no_crossing_advances_one_step_at_a_time() {
        // 10 -> 10.5 fails, 10.5 -> 11.6 is reachable only from index 1
        let p = [10.0, 10.5, 10.6, 11.6];
        let found = IntervalExtractor::crossings(&p, &params(0.10, 2, Direction::Up));
        assert_eq!(found, vec![(1, 3)]);
    }

    #[test]
    fn non_positive_bases_are_skipped() {
        let p = [0.0, -2.0, 5.0, 6.0];
        let found = IntervalExtractor::crossings(&p, &params(0.10, 3, Direction::Up));
        assert_eq!(found, vec![(2, 3)]);
    }

    #[test]
    fn short_series_yield_nothing() {
        let prm = params(0.10, 6, Direction::Up);
        assert!(IntervalExtractor::crossings(&[], &prm).is_empty());
        assert!(IntervalExtractor::crossings(&[10.0], &prm).is_empty());
    }
}
