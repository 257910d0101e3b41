use std::sync::Arc;

use super::messages::RequestId;
use crate::models::BatchResult;
use crate::utils::AppInstant;

/// What the consumer sees of the scanner.
#[derive(Debug, Clone)]
pub struct ScanState {
    /// THE FRONT BUFFER.
    /// The consumer reads this freely. A newly accepted batch replaces the Arc pointer.
    pub latest: Option<Arc<BatchResult>>,

    /// Newest id handed out by `submit`. Results for any other id are stale.
    pub latest_request_id: Option<RequestId>,

    /// Batch currently on the worker
    pub in_flight: Option<RequestId>,

    pub last_update_time: AppInstant,

    /// Failure of the newest request (if any), tagged with its id
    pub last_error: Option<(RequestId, String)>,
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            latest: None,
            latest_request_id: None,
            in_flight: None,
            last_update_time: AppInstant::now(),
            last_error: None,
        }
    }

    pub fn is_calculating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The "Swap" operation.
    pub fn update_buffer(&mut self, batch: Arc<BatchResult>) {
        self.latest = Some(batch);
        self.last_update_time = AppInstant::now();
        self.last_error = None;
    }

    pub fn record_error(&mut self, request_id: RequestId, message: String) {
        self.last_error = Some((request_id, message));
        self.last_update_time = AppInstant::now();
    }

    /// Has `request_id` been answered, and how?
    pub fn outcome_for(&self, request_id: RequestId) -> Option<Result<Arc<BatchResult>, String>> {
        if let Some(batch) = self.latest.as_ref().filter(|b| b.request_id == request_id) {
            return Some(Ok(batch.clone()));
        }
        match &self.last_error {
            Some((id, msg)) if *id == request_id => Some(Err(msg.clone())),
            _ => None,
        }
    }
}
