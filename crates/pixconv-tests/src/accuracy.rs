//! Accuracy measurement for round trips and reference comparisons
//!
//! Integer depths are measured in quantization steps, float depths in
//! absolute unit-domain error. Hue is periodic, so hue errors are measured
//! around the circle.

use pixconv_core::{Channel, ColorModel};
use rayon::prelude::*;
use serde::Serialize;

/// Distance between two hue fractions, going the short way around
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}

/// Largest per-channel difference between two integer triples, in steps
pub fn channel_error<T: Channel + Into<u32>>(a: [T; 3], b: [T; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x.into().abs_diff(y.into()))
        .max()
        .unwrap_or(0)
}

/// Largest per-channel difference between two float triples
pub fn float_error(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Statistics from an integer round-trip sweep
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoundTripStats {
    /// Maximum per-channel error, in steps
    pub max: u32,
    /// Sum of per-sample maximum errors
    pub total: u64,
    /// Number of samples
    pub count: u64,
    /// Input that produced `max`
    pub worst_input: Option<[u32; 3]>,
    /// Samples per error value: `histogram[e]` counts samples with error `e`
    pub histogram: Vec<u64>,
}

impl RoundTripStats {
    /// Record one sample
    pub fn record(&mut self, input: [u32; 3], error: u32) {
        if error > self.max || self.worst_input.is_none() {
            self.max = self.max.max(error);
            if error == self.max {
                self.worst_input = Some(input);
            }
        }
        self.total += error as u64;
        self.count += 1;

        let idx = error as usize;
        if self.histogram.len() <= idx {
            self.histogram.resize(idx + 1, 0);
        }
        self.histogram[idx] += 1;
    }

    /// Combine two partial sweeps
    pub fn merge(mut self, other: Self) -> Self {
        if other.max > self.max || self.worst_input.is_none() {
            self.worst_input = other.worst_input;
        }
        self.max = self.max.max(other.max);
        self.total += other.total;
        self.count += other.count;

        if self.histogram.len() < other.histogram.len() {
            self.histogram.resize(other.histogram.len(), 0);
        }
        for (dst, src) in self.histogram.iter_mut().zip(other.histogram) {
            *dst += src;
        }
        self
    }

    /// Mean per-sample maximum error
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }

    /// Check against a tolerance in steps
    pub fn within(&self, tolerance: u32) -> bool {
        self.max <= tolerance
    }
}

/// Statistics from a float comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FloatStats {
    /// Maximum absolute error
    pub max: f64,
    /// Sum of errors
    pub total: f64,
    /// Number of samples
    pub count: u64,
    /// Input that produced `max`
    pub worst_input: Option<[f64; 3]>,
}

impl FloatStats {
    /// Record one sample
    pub fn record(&mut self, input: [f64; 3], error: f64) {
        if error > self.max || self.worst_input.is_none() {
            self.max = self.max.max(error);
            self.worst_input = Some(input);
        }
        self.total += error;
        self.count += 1;
    }

    /// Combine two partial measurements
    pub fn merge(mut self, other: Self) -> Self {
        if other.max > self.max || self.worst_input.is_none() {
            self.worst_input = other.worst_input;
        }
        self.max = self.max.max(other.max);
        self.total += other.total;
        self.count += other.count;
        self
    }

    /// Mean error
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Round-trip one integer RGB triple through `model`
pub fn round_trip<T: Channel>(model: ColorModel, rgb: [T; 3]) -> [T; 3] {
    let color = pixconv_core::convert_from_rgb(model, rgb);
    pixconv_core::convert_to_rgb(model, color)
}

/// Measure integer round-trip error over `samples`, in parallel
pub fn measure_round_trip<T>(model: ColorModel, samples: &[[T; 3]]) -> RoundTripStats
where
    T: Channel + Into<u32>,
{
    samples
        .par_iter()
        .fold(RoundTripStats::default, |mut stats, &rgb| {
            let back = round_trip(model, rgb);
            stats.record(rgb.map(Into::into), channel_error(rgb, back));
            stats
        })
        .reduce(RoundTripStats::default, RoundTripStats::merge)
}

/// Measure round-trip error over every 8-bit RGB triple
pub fn measure_round_trip_u8_exhaustive(model: ColorModel) -> RoundTripStats {
    (0..=255u8)
        .into_par_iter()
        .map(|r| {
            let mut stats = RoundTripStats::default();
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let rgb = [r, g, b];
                    let back = round_trip(model, rgb);
                    stats.record(rgb.map(u32::from), channel_error(rgb, back));
                }
            }
            stats
        })
        .reduce(RoundTripStats::default, RoundTripStats::merge)
}

/// Measure float round-trip error over `samples`
pub fn measure_float_round_trip(model: ColorModel, samples: &[[f64; 3]]) -> FloatStats {
    samples
        .par_iter()
        .fold(FloatStats::default, |mut stats, &rgb| {
            let back = round_trip(model, rgb);
            stats.record(rgb, float_error(rgb, back));
            stats
        })
        .reduce(FloatStats::default, FloatStats::merge)
}
