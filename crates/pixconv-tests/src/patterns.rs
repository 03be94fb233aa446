//! Sample set generation
//!
//! Each generator returns a flat list of RGB triples at one depth. Sweeps
//! over the full cube are only practical at 8 bits; 16-bit sweeps use a
//! stride, hand-picked sub-ranges around the extremes and mid-scale, or
//! seeded random samples.

use std::ops::Range;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample set selector
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSet {
    /// Float grid over `[0, 1)` with a fixed step per axis
    UnitGrid(f64),
    /// Every 8-bit triple
    ExhaustiveU8,
    /// 8-bit sub-ranges near black, mid-gray and white
    SubRangeU8,
    /// 16-bit sub-ranges near black, mid-scale and white
    SubRangeU16,
    /// 16-bit triples using only low channel values
    LowRangeU16,
    /// 16-bit lattice with the given stride, always including both ends
    StridedU16(u32),
    /// Seeded random 16-bit triples
    RandomU16 { count: usize, seed: u64 },
    /// Every gray level at 8 bits
    GraysU8,
}

/// Grid step used by the float sweeps
pub const UNIT_GRID_STEP: f64 = 0.02;

const U8_RANGES: [&[Range<u32>]; 3] = [
    &[0..5, 120..130, 253..256],
    &[0..6, 125..135, 252..256],
    &[0..7, 127..137, 252..256],
];

const U16_RANGES: [&[Range<u32>]; 3] = [
    &[0..5, 30000..30005, 65530..65536],
    &[0..6, 30002..30007, 65525..65532],
    &[0..7, 3003..3008, 65524..65531],
];

const U16_LOW_RANGES: [&[Range<u32>]; 3] = [
    &[0..10, 120..130, 250..256],
    &[5..12, 125..135, 240..252],
    &[7..15, 127..137, 235..251],
];

/// Float grid `{0, step, 2*step, ...} < 1` on every axis
pub fn unit_grid(step: f64) -> Vec<[f64; 3]> {
    let steps = (1.0 / step).ceil() as usize;
    let axis: Vec<f64> = (0..steps).map(|i| i as f64 * step).filter(|&v| v < 1.0).collect();
    cartesian(&axis, &axis, &axis)
}

/// Every 8-bit triple, red-major
pub fn exhaustive_u8() -> Vec<[u8; 3]> {
    let axis: Vec<u8> = (0..=255).collect();
    cartesian(&axis, &axis, &axis)
}

/// 8-bit sub-range product
pub fn sub_range_u8() -> Vec<[u8; 3]> {
    let [r, g, b] = U8_RANGES.map(|ranges| expand::<u8>(ranges));
    cartesian(&r, &g, &b)
}

/// 16-bit sub-range product
pub fn sub_range_u16() -> Vec<[u16; 3]> {
    let [r, g, b] = U16_RANGES.map(|ranges| expand::<u16>(ranges));
    cartesian(&r, &g, &b)
}

/// 16-bit product of low channel values
pub fn low_range_u16() -> Vec<[u16; 3]> {
    let [r, g, b] = U16_LOW_RANGES.map(|ranges| expand::<u16>(ranges));
    cartesian(&r, &g, &b)
}

/// 16-bit lattice `0, stride, 2*stride, ..., 65535` on every axis
pub fn strided_u16(stride: u32) -> Vec<[u16; 3]> {
    let stride = stride.max(1) as usize;
    let mut axis: Vec<u16> = (0..=u16::MAX).step_by(stride).collect();
    if axis.last() != Some(&u16::MAX) {
        axis.push(u16::MAX);
    }
    cartesian(&axis, &axis, &axis)
}

/// Seeded random 16-bit triples
pub fn random_u16(count: usize, seed: u64) -> Vec<[u16; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen::<[u16; 3]>()).collect()
}

/// Seeded random float triples in `[0, 1)`
pub fn random_unit(count: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen::<[f64; 3]>()).collect()
}

/// Every 8-bit gray level
pub fn grays_u8() -> Vec<[u8; 3]> {
    (0..=255u8).map(|v| [v, v, v]).collect()
}

/// Every 16-bit gray level
pub fn grays_u16() -> Vec<[u16; 3]> {
    (0..=u16::MAX).map(|v| [v, v, v]).collect()
}

fn expand<T: TryFrom<u32>>(ranges: &[Range<u32>]) -> Vec<T> {
    ranges
        .iter()
        .flat_map(|r| r.clone())
        .filter_map(|v| T::try_from(v).ok())
        .collect()
}

fn cartesian<T: Copy>(a: &[T], b: &[T], c: &[T]) -> Vec<[T; 3]> {
    let mut out = Vec::with_capacity(a.len() * b.len() * c.len());
    for &x in a {
        for &y in b {
            for &z in c {
                out.push([x, y, z]);
            }
        }
    }
    out
}

impl std::fmt::Display for SampleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleSet::UnitGrid(step) => write!(f, "unit grid (step {step})"),
            SampleSet::ExhaustiveU8 => write!(f, "exhaustive u8"),
            SampleSet::SubRangeU8 => write!(f, "u8 sub-ranges"),
            SampleSet::SubRangeU16 => write!(f, "u16 sub-ranges"),
            SampleSet::LowRangeU16 => write!(f, "u16 low range"),
            SampleSet::StridedU16(stride) => write!(f, "u16 stride {stride}"),
            SampleSet::RandomU16 { count, seed } => {
                write!(f, "u16 random ({count} samples, seed {seed:#x})")
            }
            SampleSet::GraysU8 => write!(f, "u8 grays"),
        }
    }
}
