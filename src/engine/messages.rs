use std::sync::Arc;

use crate::domain::DetectionParameters;
use crate::models::{BatchResult, TimeSeries};

/// Strictly increasing per engine. The engine only accepts the result of the newest one.
pub type RequestId = u64;

/// One batch for the worker: every series plus the shared parameters
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub request_id: RequestId,
    // Shared, never mutated; resubmitting with new parameters does not copy the series
    pub series: Arc<Vec<TimeSeries>>,
    pub params: DetectionParameters,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct JobResult {
    pub request_id: RequestId,
    pub duration_ms: u128,

    // Success: the new front buffer
    // Failure: a whole-batch fault, rendered for the caller
    pub result: Result<Arc<BatchResult>, String>,

    pub series_count: usize,
}
