use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

// Only import thread on non-WASM targets
#[cfg(not(target_arch = "wasm32"))]
use std::thread;

use super::messages::{JobRequest, JobResult};

use crate::analysis::run_batch;
use crate::config::DF;
use crate::data::{ScanRequest, ScanResponse};
use crate::utils::AppInstant;

/// NATIVE ONLY: Spawns a background thread to process jobs
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_worker_thread(rx: Receiver<JobRequest>, tx: Sender<JobResult>) {
    thread::spawn(move || {
        while let Ok(req) = rx.recv() {
            process_request_sync(req, &tx);
        }
        log::debug!("Worker: job channel closed, exiting");
    });
}

/// WASM ONLY: No-op.
/// The Engine holds the receiver and processes jobs manually on poll.
#[cfg(target_arch = "wasm32")]
pub fn spawn_worker_thread(_rx: Receiver<JobRequest>, _tx: Sender<JobResult>) {
    // Do nothing.
}

pub fn process_request_sync(req: JobRequest, tx: &Sender<JobResult>) {
    let response = execute(req);
    // Receiver gone means the engine was dropped; nobody is left to tell
    let _ = tx.send(response);
}

/// Run one batch. Any fault, including a panic deep inside a single series, becomes
/// a whole-batch `Err` rather than taking the worker thread down.
pub fn execute(req: JobRequest) -> JobResult {
    let start = AppInstant::now();
    let series_count = req.series.len();
    let label = format!("Scan #{} ({} series, {})", req.request_id, series_count, req.params.direction);

    let result = crate::trace_time!(&label, 100_000, {
        run_guarded(&label, || run_batch(req.request_id, &req.series, &req.params))
    })
    .map(Arc::new);

    let elapsed = start.elapsed().as_millis();

    if DF.log_worker {
        match &result {
            Ok(batch) => log::info!(
                "Worker: {} -> {} matching in {}ms",
                label,
                batch.matching_ids.len(),
                elapsed
            ),
            Err(e) => log::warn!("Worker: {} failed: {}", label, e),
        }
    }

    JobResult {
        request_id: req.request_id,
        duration_ms: elapsed,
        result,
        series_count,
    }
}

/// Synchronous request/response without an engine, for hosts that do their own
/// offloading (e.g. a wasm worker's message handler).
pub fn handle_request(request: ScanRequest) -> ScanResponse {
    let job = JobRequest {
        request_id: 0,
        series: Arc::new(request.series),
        params: request.params,
    };
    ScanResponse::from(execute(job))
}

/// Error chains and panics both come back as the message handed to the caller.
pub fn run_guarded<T>(label: &str, f: impl FnOnce() -> anyhow::Result<T>) -> Result<T, String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(format!("{:#}", e)),
        Err(payload) => {
            let msg = format!("internal fault while scanning: {}", panic_message(payload.as_ref()));
            log::error!("Worker: {} [{}]", msg, label);
            Err(msg)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
