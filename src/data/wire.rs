//! Request/response messages exchanged with the caller, as JSON.
//!
//! Request:  `{ series: [{ id, points: [{ date, price }] }], pct, maxWindow, direction, chainMode? }`
//! Success:  `{ ok: true, matchingIds: [...], results: [{ id, hit, windows: [...], ... }] }`
//! Failure:  `{ ok: false, message }`, only for faults; "no matches" is a normal success.

use serde::{Deserialize, Serialize};

use crate::domain::DetectionParameters;
use crate::engine::JobResult;
use crate::models::{BatchResult, TickerResult, TimeSeries};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub series: Vec<TimeSeries>,
    #[serde(flatten)]
    pub params: DetectionParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<TickerResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ScanResponse {
    pub fn success(batch: &BatchResult) -> Self {
        Self {
            ok: true,
            matching_ids: Some(batch.matching_ids.clone()),
            results: Some(batch.results.clone()),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            matching_ids: None,
            results: None,
            message: Some(message.into()),
        }
    }
}

impl From<JobResult> for ScanResponse {
    fn from(job: JobResult) -> Self {
        match job.result {
            Ok(batch) => Self::success(&batch),
            Err(message) => Self::failure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChainMode, Direction};
    use serde_json::{Value, json};

    #[test]
    fn decodes_request_shape() {
        let raw = json!({
            "series": [
                { "id": "AAA", "points": [
                    { "date": "2024-01-02", "price": 10.0 },
                    { "date": "2024-01-03", "price": null }
                ]},
                { "id": "BBB", "points": [] }
            ],
            "pct": 0.1,
            "maxWindow": 6,
            "direction": "up"
        });
        let req: ScanRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(req.series.len(), 2);
        assert!(req.series[0].points[1].price.is_nan());
        assert_eq!(req.params.max_window, 6);
        assert_eq!(req.params.direction, Direction::Up);
        assert_eq!(req.params.chain_mode, ChainMode::Chained);
    }

    #[test]
    fn failure_shape() {
        let v = serde_json::to_value(ScanResponse::failure("boom")).unwrap();
        assert_eq!(v, json!({ "ok": false, "message": "boom" }));
    }

    #[test]
    fn empty_success_still_lists_fields() {
        let batch = BatchResult {
            request_id: 1,
            matching_ids: vec![],
            results: vec![TickerResult::empty("X", 0)],
            points_dropped: 0,
            duration_ms: 0,
        };
        let v = serde_json::to_value(ScanResponse::success(&batch)).unwrap();
        assert_eq!(v["ok"], Value::Bool(true));
        assert_eq!(v["matchingIds"], json!([]));
        assert_eq!(v["results"][0]["id"], json!("X"));
        assert_eq!(v["results"][0]["windows"], json!([]));
        assert!(v.get("message").is_none());
    }
}
