//! Round-trip error reports
//!
//! A report is a flat list of entries, one per model, depth and sample
//! set, serialized to JSON so runs can be diffed.

use anyhow::Result;
use pixconv_core::{ColorModel, Depth};
use serde::Serialize;

use crate::accuracy::{FloatStats, RoundTripStats};

/// One measured sweep
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Model name
    pub model: String,
    /// Model channel names in storage order
    pub channels: [&'static str; 3],
    /// Depth name
    pub depth: String,
    /// Sample set description
    pub samples: String,
    /// Allowed maximum error, in steps (0 for float)
    pub tolerance: u32,
    /// Measured maximum error, in steps or unit-domain for float
    pub max_error: f64,
    /// Mean of per-sample maximum errors
    pub mean_error: f64,
    /// Number of samples
    pub count: u64,
    /// Whether the measurement is within tolerance
    pub passed: bool,
    /// Input with the largest error
    pub worst_input: Option<[f64; 3]>,
}

impl ReportEntry {
    /// Entry for an integer sweep
    pub fn integer(
        model: ColorModel,
        depth: Depth,
        samples: impl Into<String>,
        stats: &RoundTripStats,
    ) -> Self {
        let tolerance = model.round_trip_tolerance(depth);
        Self {
            model: model.to_string(),
            channels: model.channel_names(),
            depth: depth.to_string(),
            samples: samples.into(),
            tolerance,
            max_error: stats.max as f64,
            mean_error: stats.mean(),
            count: stats.count,
            passed: stats.within(tolerance),
            worst_input: stats.worst_input.map(|w| w.map(f64::from)),
        }
    }

    /// Entry for a float sweep checked against `limit`
    pub fn float(
        model: ColorModel,
        samples: impl Into<String>,
        stats: &FloatStats,
        limit: f64,
    ) -> Self {
        Self {
            model: model.to_string(),
            channels: model.channel_names(),
            depth: Depth::Float.to_string(),
            samples: samples.into(),
            tolerance: model.round_trip_tolerance(Depth::Float),
            max_error: stats.max,
            mean_error: stats.mean(),
            count: stats.count,
            passed: stats.max < limit,
            worst_input: stats.worst_input,
        }
    }
}

/// Collected report entries
#[derive(Debug, Clone, Default, Serialize)]
pub struct ErrorReport {
    /// pixconv-core version that produced the report
    pub version: String,
    /// Measured sweeps
    pub entries: Vec<ReportEntry>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self {
            version: pixconv_core::VERSION.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Whether every entry passed
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|e| e.passed)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print a summary table to stderr
    pub fn print_summary(&self) {
        eprintln!("\n=== Round-trip error table ===\n");
        eprintln!(
            "{:<6} {:<8} {:<6} {:<40} {:>6} {:>10} {:>10}",
            "model", "channels", "depth", "samples", "tol", "max", "mean"
        );
        for e in &self.entries {
            eprintln!(
                "{:<6} {:<8} {:<6} {:<40} {:>6} {:>10.3e} {:>10.3e} {}",
                e.model,
                e.channels.concat(),
                e.depth,
                e.samples,
                e.tolerance,
                e.max_error,
                e.mean_error,
                if e.passed { "ok" } else { "FAIL" }
            );
        }
    }
}
