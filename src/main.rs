use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use move_sniper::data::{load_request, render_response};
use move_sniper::{Cli, ScanEngine, ScanResponse, init_log};

fn main() -> ExitCode {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();
    let args = Cli::parse();

    let response = match load_request(&args.input) {
        Ok(mut request) => {
            args.overrides.apply(&mut request.params);
            log::info!(
                "Scanning {} series: {:.2}% {} within {} entries ({})",
                request.series.len(),
                request.params.pct * 100.0,
                request.params.direction,
                request.params.max_window,
                request.params.chain_mode
            );
            let mut engine = ScanEngine::new();
            engine.scan_blocking(request, Duration::from_secs(args.timeout_secs))
        }
        Err(e) => ScanResponse::failure(format!("{:#}", e)),
    };

    match render_response(&response, args.pretty) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            log::error!("Failed to render response: {:#}", e);
            return ExitCode::FAILURE;
        }
    }

    if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
