use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use move_sniper::data::load_request;
use move_sniper::utils::{format_date, format_duration};
use move_sniper::{ParamOverrides, ScanEngine, TickerResult, init_log};

/// Scan a request file and print a per-series summary table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct AnalyzeArgs {
    /// Request JSON file, or `-` to read stdin
    input: String,

    #[command(flatten)]
    overrides: ParamOverrides,

    /// Also print every matching window
    #[arg(long, default_value_t = false)]
    windows: bool,

    /// Only show series that matched
    #[arg(long, default_value_t = false)]
    only_matching: bool,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Hit")]
    hit: bool,
    #[tabled(rename = "Windows")]
    windows: usize,
    #[tabled(rename = "Peak Move")]
    peak: String,
    #[tabled(rename = "Best Window")]
    best: String,
}

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Len")]
    length: usize,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Change")]
    change: String,
}

impl From<&TickerResult> for SummaryRow {
    fn from(r: &TickerResult) -> Self {
        Self {
            id: r.id.clone(),
            points: r.points,
            hit: r.hit,
            windows: r.windows.len(),
            peak: r
                .peak_move_pct
                .map(|p| format!("{:+.2}%", p))
                .unwrap_or_else(|| "-".to_string()),
            best: r
                .best_window()
                .map(|w| {
                    format!(
                        "{} -> {} ({:+.2}%)",
                        format_date(w.start_date),
                        format_date(w.end_date),
                        w.percent_change
                    )
                })
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn window_rows(r: &TickerResult) -> impl Iterator<Item = WindowRow> + '_ {
    r.windows.iter().map(move |w| WindowRow {
        id: r.id.clone(),
        start: format_date(w.start_date),
        end: format_date(w.end_date),
        length: w.actual_length,
        from: format!("{:.4}", w.start_price),
        to: format!("{:.4}", w.end_price),
        change: format!("{:+.2}%", w.percent_change),
    })
}

fn main() -> Result<()> {
    init_log();
    let args = AnalyzeArgs::parse();

    let mut request = load_request(&args.input)?;
    args.overrides.apply(&mut request.params);
    let params = request.params;

    let mut engine = ScanEngine::new();
    engine.submit(std::sync::Arc::new(request.series), params);
    let batch = engine
        .wait_for_latest(Duration::from_secs(600))
        .context("Scan failed")?;

    let shown: Vec<&TickerResult> = batch
        .results
        .iter()
        .filter(|r| !args.only_matching || r.is_matching())
        .collect();

    if batch.results.is_empty() {
        return Err(anyhow!("Request contained no series"));
    }

    println!(
        "{:.2}% {} within {} entries ({}) | {} of {} series matched | {} points dropped | {}",
        params.pct * 100.0,
        params.direction,
        params.max_window,
        params.chain_mode,
        batch.matching_ids.len(),
        batch.series_count(),
        batch.points_dropped,
        format_duration(batch.duration_ms as i64)
    );

    if shown.is_empty() {
        println!("No series matched.");
        return Ok(());
    }

    let mut summary = Table::new(shown.iter().map(|r| SummaryRow::from(*r)));
    summary.with(Style::rounded());
    println!("{}", summary);

    if args.windows {
        let rows: Vec<WindowRow> = shown.iter().flat_map(|r| window_rows(r)).collect();
        if rows.is_empty() {
            println!("No windows.");
        } else {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    Ok(())
}
