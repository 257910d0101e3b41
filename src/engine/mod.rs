mod core;
mod messages;
mod state;
mod worker;

pub use self::core::ScanEngine;
pub use messages::{JobRequest, JobResult, RequestId};
pub use state::ScanState;
pub use worker::{execute, handle_request};
