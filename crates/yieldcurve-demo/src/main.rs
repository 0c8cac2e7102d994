// File: crates/yieldcurve-demo/src/main.rs
// Summary: Demo loads a treasury observation CSV, resolves the requested range and prints the axis ticks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tick_core::{resolve, CalendarDate, Clock, FixedClock, RangePreset, SystemClock, Term, TimeAxis, TimeRange};
use tracing::{info, warn};
use yieldcurve_demo::{load_observations_csv, within, DemoConfig, Report};

#[derive(Debug, Parser)]
#[command(name = "yieldcurve-demo", version, about = "Print the time axis for a treasury yield history CSV")]
struct Cli {
    /// Observation CSV with a date column and a value column.
    input: PathBuf,

    /// Series id, e.g. DGS10. Defaults to the config file, then DGS10.
    #[arg(long)]
    series: Option<String>,

    /// 1Y, 5Y or 10Y ending today.
    #[arg(long, conflicts_with_all = ["start", "end"])]
    preset: Option<RangePreset>,

    /// Custom range start (YYYY-MM-DD); requires --end.
    #[arg(long)]
    start: Option<String>,

    /// Custom range end (YYYY-MM-DD); requires --start.
    #[arg(long)]
    end: Option<String>,

    /// Pin "today" instead of reading the system clock.
    #[arg(long)]
    today: Option<CalendarDate>,

    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_level: Option<String>,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DemoConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.logging.init();

    let clock: Box<dyn Clock> = match cli.today {
        Some(today) => Box::new(FixedClock::new(today)),
        None => Box::new(SystemClock),
    };

    let range = if cli.start.is_some() || cli.end.is_some() {
        TimeRange::from_query(cli.start.as_deref(), cli.end.as_deref(), clock.as_ref())
            .context("invalid custom range")?
    } else {
        resolve(cli.preset.unwrap_or(config.chart.preset), clock.as_ref())
    };

    let series_id = cli.series.unwrap_or(config.chart.series);
    let term = Term::by_series_id(&series_id).with_context(|| format!("unknown series '{series_id}'"))?;
    info!(%term, start = %range.start_date, end = %range.end_date, "building axis");

    let all = load_observations_csv(&cli.input, term.series_id)?;
    let series = within(&all, &range);
    if series.is_empty() {
        warn!(available = all.len(), "no observations inside the requested range");
    }

    let axis = TimeAxis::build(&range, &series);
    let report = Report::new(term, &series, axis);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
