// File: crates/yieldcurve-demo/src/source.rs
// Summary: Observation CSV loader standing in for the remote history endpoint.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tick_core::series::MISSING_VALUE;
use tick_core::{collect_observations, is_ascending, SamplePoint, TimeRange};
use tracing::{debug, info};

/// Load `path` and return the observations for `series_id`, ascending by date.
pub fn load_observations_csv(path: &Path, series_id: &str) -> Result<Vec<SamplePoint>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let points = read_observations(file, series_id)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(path = %path.display(), points = points.len(), "loaded observations");
    Ok(points)
}

/// Parse observation CSV text. The date column is `date` or `observation_date`;
/// the value column is `value`, `yield` or the series id itself. Empty and `.`
/// values count as missing.
pub fn read_observations<R: Read>(reader: R, series_id: &str) -> Result<Vec<SamplePoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "observation headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let series_col = series_id.to_lowercase();
    let i_date = idx(&["date", "observation_date"])
        .context("no date column (expected 'date' or 'observation_date')")?;
    let i_value = idx(&["value", "yield", series_col.as_str()])
        .with_context(|| format!("no value column (expected 'value', 'yield' or '{series_id}')"))?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec.get(i_date).unwrap_or_default().to_string();
        let value = match rec.get(i_value).unwrap_or_default() {
            "" => MISSING_VALUE.to_string(),
            v => v.to_string(),
        };
        rows.push((date, value));
    }

    let mut points = collect_observations(rows)?;
    if !is_ascending(&points) {
        debug!("sorting out-of-order observations");
        points.sort_by_key(|p| p.date);
    }
    Ok(points)
}

/// Observations inside `range`, the way the history endpoint bounds its reply.
pub fn within(points: &[SamplePoint], range: &TimeRange) -> Vec<SamplePoint> {
    points.iter().copied().filter(|p| range.contains(p.date)).collect()
}
