use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::mpsc::RecvTimeoutError;

use anyhow::{Result, anyhow, bail};

use crate::config::DF;
use crate::data::{ScanRequest, ScanResponse};
use crate::domain::DetectionParameters;
use crate::models::{BatchResult, TimeSeries};

#[cfg(not(target_arch = "wasm32"))]
use crate::utils::AppInstant;

use super::messages::{JobRequest, JobResult, RequestId};
use super::state::ScanState;
use super::worker;

/// Owns the worker and keeps the consumer's view consistent.
///
/// * Every submission gets a strictly increasing id; only the newest id's result is accepted.
/// * At most one batch is on the worker. Submissions made meanwhile collapse into a single
///   pending slot (newest wins), so a burst of parameter changes costs at most one extra batch.
pub struct ScanEngine {
    pub state: ScanState,

    // Common Channels
    job_tx: Sender<JobRequest>,     // Engine writes to this
    result_rx: Receiver<JobResult>, // Engine reads from this

    // WASM ONLY: The Engine acts as the Worker, so it needs the "Worker Ends" of the channels
    #[cfg(target_arch = "wasm32")]
    job_rx: Receiver<JobRequest>,
    #[cfg(target_arch = "wasm32")]
    result_tx: Sender<JobResult>,

    /// Coalescing slot: newest request waiting for the worker to free up
    pending: Option<JobRequest>,
    next_request_id: RequestId,
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanEngine {
    /// Initialize the engine and spawn its worker.
    pub fn new() -> Self {
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (result_tx, result_rx) = channel::<JobResult>();

        // NATIVE: Pass the worker ends to the thread.
        #[cfg(not(target_arch = "wasm32"))]
        worker::spawn_worker_thread(job_rx, result_tx);

        Self {
            state: ScanState::new(),
            job_tx,
            result_rx,
            #[cfg(target_arch = "wasm32")]
            job_rx,
            #[cfg(target_arch = "wasm32")]
            result_tx,
            pending: None,
            next_request_id: 0,
        }
    }

    /// Queue a batch. Returns its id; any earlier id is now stale.
    pub fn submit(
        &mut self,
        series: Arc<Vec<TimeSeries>>,
        params: DetectionParameters,
    ) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.state.latest_request_id = Some(request_id);

        let req = JobRequest {
            request_id,
            series,
            params,
        };

        if self.state.is_calculating() {
            let replaced = self.pending.replace(req);
            if DF.log_engine_core {
                match replaced {
                    Some(old) => log::info!(
                        "ENGINE: #{} coalesced into #{} (worker busy)",
                        old.request_id,
                        request_id
                    ),
                    None => log::info!("ENGINE: #{} parked (worker busy)", request_id),
                }
            }
        } else {
            self.dispatch(req);
        }

        request_id
    }

    /// Non-blocking. Drains finished batches and returns the newly accepted one, if any.
    pub fn poll(&mut self) -> Option<Arc<BatchResult>> {
        #[cfg(target_arch = "wasm32")]
        self.run_queued_jobs();

        let mut accepted = None;
        while let Ok(res) = self.result_rx.try_recv() {
            if let Some(batch) = self.handle_result(res) {
                accepted = Some(batch);
            }
        }
        accepted
    }

    /// Block until the newest submission is answered.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait_for_latest(&mut self, timeout: Duration) -> Result<Arc<BatchResult>> {
        let target = self
            .state
            .latest_request_id
            .ok_or_else(|| anyhow!("no request has been submitted"))?;
        let deadline = AppInstant::now() + timeout;

        loop {
            if let Some(outcome) = self.state.outcome_for(target) {
                return outcome.map_err(|e| anyhow!(e));
            }

            let remaining = deadline.saturating_duration_since(AppInstant::now());
            match self.result_rx.recv_timeout(remaining) {
                Ok(res) => {
                    self.handle_result(res);
                }
                Err(RecvTimeoutError::Timeout) => {
                    bail!("timed out after {:?} waiting for request #{}", timeout, target)
                }
                Err(RecvTimeoutError::Disconnected) => bail!("scan worker disconnected"),
            }
        }
    }

    /// WASM: jobs run inline, so "waiting" is just polling until the queue is dry.
    #[cfg(target_arch = "wasm32")]
    pub fn wait_for_latest(&mut self, _timeout: Duration) -> Result<Arc<BatchResult>> {
        let target = self
            .state
            .latest_request_id
            .ok_or_else(|| anyhow!("no request has been submitted"))?;

        loop {
            if let Some(outcome) = self.state.outcome_for(target) {
                return outcome.map_err(|e| anyhow!(e));
            }
            if !self.state.is_calculating() {
                bail!("request #{} was never answered", target);
            }
            self.poll();
        }
    }

    /// Submit one wire request and block for its response. Faults become `{ ok: false }`.
    pub fn scan_blocking(&mut self, request: ScanRequest, timeout: Duration) -> ScanResponse {
        self.submit(Arc::new(request.series), request.params);
        match self.wait_for_latest(timeout) {
            Ok(batch) => ScanResponse::success(&batch),
            Err(e) => ScanResponse::failure(format!("{:#}", e)),
        }
    }

    pub fn latest(&self) -> Option<Arc<BatchResult>> {
        self.state.latest.clone()
    }

    fn dispatch(&mut self, req: JobRequest) {
        let request_id = req.request_id;
        self.state.in_flight = Some(request_id);

        if DF.log_engine_core {
            log::info!(
                "ENGINE: dispatching #{} ({} series)",
                request_id,
                req.series.len()
            );
        }

        if self.job_tx.send(req).is_err() {
            log::error!("ENGINE: worker is gone, request #{} dropped", request_id);
            self.state.in_flight = None;
            self.state
                .record_error(request_id, "scan worker is not running".to_string());
        }
    }

    fn handle_result(&mut self, res: JobResult) -> Option<Arc<BatchResult>> {
        if self.state.in_flight == Some(res.request_id) {
            self.state.in_flight = None;
        }

        if DF.log_engine_core {
            log::info!(
                "ENGINE: #{} back from worker ({} series, {}ms)",
                res.request_id,
                res.series_count,
                res.duration_ms
            );
        }

        // Worker is free: the parked request goes next
        if let Some(next) = self.pending.take() {
            self.dispatch(next);
        }

        if self.state.latest_request_id != Some(res.request_id) {
            if DF.log_engine_core {
                log::info!(
                    "ENGINE: discarding stale result #{} (latest is #{:?})",
                    res.request_id,
                    self.state.latest_request_id
                );
            }
            return None;
        }

        match res.result {
            Ok(batch) => {
                self.state.update_buffer(batch.clone());
                Some(batch)
            }
            Err(msg) => {
                log::warn!("ENGINE: request #{} failed: {}", res.request_id, msg);
                self.state.record_error(res.request_id, msg);
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn run_queued_jobs(&mut self) {
        while let Ok(req) = self.job_rx.try_recv() {
            worker::process_request_sync(req, &self.result_tx);
        }
    }
}
