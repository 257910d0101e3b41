use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One (calendar day, price) observation.
///
/// Decoding never rejects a point: a missing, `null` or unparsable date becomes `None`,
/// and a missing, `null` or non-numeric price becomes NaN. Normalisation drops both, so
/// one bad point costs one point and not the request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default = "missing_price", deserialize_with = "lenient_price")]
    pub price: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date: Some(date),
            price,
        }
    }

    /// The (date, price) pair, if this point can take part in a scan.
    #[inline]
    pub fn usable(&self) -> Option<(NaiveDate, f64)> {
        match self.date {
            Some(date) if self.price.is_finite() => Some((date, self.price)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_usable(&self) -> bool {
        self.usable().is_some()
    }
}

fn missing_price() -> f64 {
    f64::NAN
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse::<NaiveDate>().ok()))
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_f64).unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> TimeSeriesPoint {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn null_price_decodes_as_unusable() {
        let p = decode(r#"{"date":"2024-01-02","price":null}"#);
        assert!(p.price.is_nan());
        assert!(!p.is_usable());
    }

    #[test]
    fn plain_point_decodes() {
        let p = decode(r#"{"date":"2024-01-02","price":12.5}"#);
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(p.date, Some(day));
        assert_eq!(p.price, 12.5);
        assert_eq!(p.usable(), Some((day, 12.5)));
    }

    #[test]
    fn bad_dates_decode_as_unusable() {
        for raw in [
            r#"{"date":null,"price":10.0}"#,
            r#"{"price":10.0}"#,
            r#"{"date":"not-a-day","price":10.0}"#,
            r#"{"date":20240102,"price":10.0}"#,
        ] {
            let p = decode(raw);
            assert_eq!(p.date, None, "{raw}");
            assert!(!p.is_usable(), "{raw}");
        }
    }

    #[test]
    fn bad_prices_decode_as_nan() {
        for raw in [
            r#"{"date":"2024-01-02"}"#,
            r#"{"date":"2024-01-02","price":"12.5"}"#,
        ] {
            let p = decode(raw);
            assert!(p.price.is_nan(), "{raw}");
            assert!(!p.is_usable(), "{raw}");
        }
    }
}
