// File: crates/yieldcurve-demo/src/lib.rs
// Summary: Demo support library: settings, CSV observation source and the printed report.

pub mod config;
pub mod report;
pub mod source;

pub use config::{ChartConfig, DemoConfig, LoggingConfig};
pub use report::Report;
pub use source::{load_observations_csv, read_observations, within};
