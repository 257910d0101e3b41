// Wire messages and boundary I/O
mod wire;

#[cfg(not(target_arch = "wasm32"))]
mod request_io;

pub use wire::{ScanRequest, ScanResponse};

#[cfg(not(target_arch = "wasm32"))]
pub use request_io::{load_request, parse_request, render_response};
