//! Sweep configuration from the environment
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PIXCONV_U16_STRIDE` | 257 | Lattice stride for 16-bit sweeps |
//! | `PIXCONV_RANDOM_SAMPLES` | 100000 | Random 16-bit samples per model |
//! | `PIXCONV_SEED` | `0x5EED` | Seed for random samples (decimal or `0x` hex) |

use anyhow::{Context, Result, ensure};

/// Stride environment variable
pub const STRIDE_VAR: &str = "PIXCONV_U16_STRIDE";
/// Random sample count environment variable
pub const SAMPLES_VAR: &str = "PIXCONV_RANDOM_SAMPLES";
/// Seed environment variable
pub const SEED_VAR: &str = "PIXCONV_SEED";

/// Sizes of the 16-bit sweeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Lattice stride for strided sweeps
    pub u16_stride: u32,
    /// Number of random samples
    pub random_samples: usize,
    /// Seed for random samples
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            u16_stride: 257,
            random_samples: 100_000,
            seed: 0x5EED,
        }
    }
}

impl SweepConfig {
    /// Read from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary lookup, unset keys keep their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(STRIDE_VAR) {
            config.u16_stride = raw
                .trim()
                .parse()
                .with_context(|| format!("{STRIDE_VAR}={raw:?} is not an integer"))?;
        }
        if let Some(raw) = lookup(SAMPLES_VAR) {
            config.random_samples = raw
                .trim()
                .parse()
                .with_context(|| format!("{SAMPLES_VAR}={raw:?} is not an integer"))?;
        }
        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = parse_seed(&raw).with_context(|| format!("{SEED_VAR}={raw:?}"))?;
        }

        ensure!(config.u16_stride > 0, "{STRIDE_VAR} must be positive");
        ensure!(
            config.u16_stride <= u16::MAX as u32,
            "{STRIDE_VAR} must be at most 65535"
        );
        Ok(config)
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    let seed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)?,
        None => raw.parse()?,
    };
    Ok(seed)
}
