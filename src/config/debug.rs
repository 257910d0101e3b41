//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,

    /// Submit / accept / discard decisions inside ScanEngine
    pub log_engine_core: bool,

    /// Per-batch summary from the worker thread
    pub log_worker: bool,

    /// Points dropped or merged while normalising input series
    pub log_normalization: bool,
}

pub const DF: LogFlags = LogFlags {
    log_performance: false,
    log_engine_core: false,
    log_worker: true,
    log_normalization: false,
};

/// Read by `trace_time!`
pub const LOG_PERFORMANCE: bool = DF.log_performance;
