//! Configuration module for the move scanner.

mod analysis;
mod debug;

// Public
pub mod types;

// Re-export commonly used items
pub use analysis::{ANALYSIS, ScanConfig};
pub use debug::{DF, LOG_PERFORMANCE, LogFlags};
pub use types::{ChainMode, Direction};
