// File: crates/yieldcurve-demo/src/config.rs
// Summary: Optional TOML settings (logging and chart defaults) and tracing subscriber setup.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tick_core::terms::DEFAULT_SERIES_ID;
use tick_core::RangePreset;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub chart: ChartConfig,
}

impl DemoConfig {
    /// Read settings from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else { return Ok(Self::default()) };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Install the global subscriber. `RUST_LOG` wins over the configured level.
    /// Logs go to stderr so stdout stays clean for `--json`.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));
        match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init(),
            _ => fmt().with_env_filter(filter).with_writer(std::io::stderr).init(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".into(), format: "pretty".into() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub series: String,
    pub preset: RangePreset,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { series: DEFAULT_SERIES_ID.into(), preset: RangePreset::OneYear }
    }
}
