use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::TimeSeriesPoint;

// ============================================================================
// TimeSeries: caller-supplied price history for one identifier
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub id: String,
    #[serde(default)]
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn new(id: impl Into<String>, points: Vec<TimeSeriesPoint>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Convenience constructor: consecutive calendar days from `start`.
    pub fn from_daily_prices(id: impl Into<String>, start: NaiveDate, prices: &[f64]) -> Self {
        let points = start
            .iter_days()
            .zip(prices.iter())
            .map(|(date, &price)| TimeSeriesPoint::new(date, price))
            .collect();
        Self::new(id, points)
    }

    /// Defensive clean-up. Never fails.
    /// 1. Drop dateless points and non-finite prices
    /// 2. Stable sort ascending by date
    /// 3. Collapse duplicate dates, keeping the last supplied point for that day
    pub fn normalized(&self) -> NormalizedSeries {
        let mut usable: Vec<(NaiveDate, f64)> =
            self.points.iter().filter_map(TimeSeriesPoint::usable).collect();

        usable.sort_by_key(|&(date, _)| date);

        let (dates, prices): (Vec<NaiveDate>, Vec<f64>) = usable
            .into_iter()
            .coalesce(|a, b| if a.0 == b.0 { Ok(b) } else { Err((a, b)) })
            .unzip();

        let dropped = self.points.len() - prices.len();

        #[cfg(debug_assertions)]
        if crate::config::DF.log_normalization && dropped > 0 {
            log::info!(
                "NORMALIZE [{}]: dropped {} of {} points",
                self.id,
                dropped,
                self.points.len()
            );
        }

        NormalizedSeries {
            id: self.id.clone(),
            dates,
            prices,
            dropped,
        }
    }
}

// ============================================================================
// NormalizedSeries: sorted, finite, one point per day (columnar)
// ============================================================================

#[derive(Debug, Clone)]
pub struct NormalizedSeries {
    pub id: String,
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    /// Points removed as dateless, non-finite or duplicate-date
    pub dropped: usize,
}

impl NormalizedSeries {
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn sorts_and_drops_non_finite() {
        let ts = TimeSeries::new(
            "ABC",
            vec![
                TimeSeriesPoint::new(day(3), 12.0),
                TimeSeriesPoint::new(day(1), 10.0),
                TimeSeriesPoint::new(day(4), f64::NAN),
                TimeSeriesPoint::new(day(2), f64::INFINITY),
                TimeSeriesPoint::new(day(5), 13.0),
            ],
        );
        let n = ts.normalized();
        assert_eq!(n.dates, vec![day(1), day(3), day(5)]);
        assert_eq!(n.prices, vec![10.0, 12.0, 13.0]);
        assert_eq!(n.dropped, 2);
    }

    #[test]
    fn duplicate_dates_keep_last_supplied() {
        let ts = TimeSeries::new(
            "DUP",
            vec![
                TimeSeriesPoint::new(day(2), 5.0),
                TimeSeriesPoint::new(day(1), 1.0),
                TimeSeriesPoint::new(day(2), 6.0),
            ],
        );
        let n = ts.normalized();
        assert_eq!(n.dates, vec![day(1), day(2)]);
        assert_eq!(n.prices, vec![1.0, 6.0]);
        assert_eq!(n.dropped, 1);
    }

    #[test]
    fn dateless_points_are_dropped_and_counted() {
        let mut points = vec![
            TimeSeriesPoint::new(day(1), 10.0),
            TimeSeriesPoint::new(day(2), 11.0),
        ];
        points.insert(1, TimeSeriesPoint { date: None, price: 99.0 });
        let n = TimeSeries::new("GAPS", points).normalized();
        assert_eq!(n.dates, vec![day(1), day(2)]);
        assert_eq!(n.prices, vec![10.0, 11.0]);
        assert_eq!(n.dropped, 1);
    }

    #[test]
    fn empty_series_is_fine() {
        let n = TimeSeries::new("NONE", vec![]).normalized();
        assert!(n.is_empty());
        assert_eq!(n.dropped, 0);
    }

    #[test]
    fn daily_constructor_walks_calendar_days() {
        let ts = TimeSeries::from_daily_prices("X", day(30), &[1.0, 2.0, 3.0]);
        assert_eq!(ts.points.len(), 3);
        assert_eq!(ts.points[2].date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }
}
