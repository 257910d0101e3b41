#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and embedders)
pub use analysis::{IntervalExtractor, analyze_series, run_batch};
pub use config::{ChainMode, Direction};
pub use data::{ScanRequest, ScanResponse};
pub use domain::{DetectionParameters, TimeSeriesPoint};
pub use engine::{ScanEngine, handle_request};
pub use models::{BatchResult, MatchingWindow, TickerResult, TimeSeries};

// CLI argument parsing
use clap::{Args, Parser};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Request JSON file, or `-` to read stdin
    pub input: String,

    #[command(flatten)]
    pub overrides: ParamOverrides,

    /// Indent the response JSON
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Give up on the batch after this many seconds
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,
}

/// Command-line overrides for the detection parameters carried in a request
#[derive(Args, Debug, Clone, Default)]
pub struct ParamOverrides {
    /// Target fractional move, e.g. 0.1 for 10%
    #[arg(long)]
    pub pct: Option<f64>,

    /// Look-ahead length in entries
    #[arg(long)]
    pub max_window: Option<usize>,

    /// up | down
    #[arg(long)]
    pub direction: Option<Direction>,

    /// chained | disjoint
    #[arg(long)]
    pub chain_mode: Option<ChainMode>,
}

impl ParamOverrides {
    pub fn apply(&self, params: &mut DetectionParameters) {
        if let Some(pct) = self.pct {
            params.pct = pct;
        }
        if let Some(max_window) = self.max_window {
            params.max_window = max_window;
        }
        if let Some(direction) = self.direction {
            params.direction = direction;
        }
        if let Some(chain_mode) = self.chain_mode {
            params.chain_mode = chain_mode;
        }
    }
}

/// Logging setup shared by the binaries: quiet dependencies, chattier crate.
/// `RUST_LOG` still wins when set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let _ = env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("move_sniper"), my_code_level)
        .parse_default_env()
        .try_init();
}
