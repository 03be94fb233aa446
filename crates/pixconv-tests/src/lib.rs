//! # pixconv-tests
//!
//! Accuracy and parity harness for pixconv.
//!
//! This crate provides:
//! - Round-trip error measurement at float, 8-bit and 16-bit depth
//! - Parity tests comparing the float kernels against reference formulas
//!   and the palette crate
//! - Sample set generation (grids, sub-ranges, lattices, seeded random)
//! - JSON error reports
//!
//! ## Reference Implementations
//!
//! - **textbook**: closed-form HSV, HSL and BT.601 YCbCr formulas
//! - **palette**: HSV and HSL through `FromColor`
//!
//! ## Test Categories
//!
//! 1. **Float round trips**: `1e-6` for HSV/HSL, `1e-4` for YUV
//! 2. **Reference parity**: forward and inverse conversions
//! 3. **Integer round trips**: exhaustive 8-bit, sampled 16-bit
//! 4. **Boundaries**: grays, black, white, hue wrap
//! 5. **Error table**: measured maxima against the tolerance table
//!
//! 16-bit sweep sizes are configured through [`config::SweepConfig`].

pub mod accuracy;
pub mod config;
pub mod parity;
pub mod patterns;
pub mod reference;
pub mod report;

pub use accuracy::{FloatStats, RoundTripStats, hue_distance};
pub use config::SweepConfig;
pub use parity::{ParityTest, ParityTestSuite};
pub use reference::ReferenceImpl;
pub use report::{ErrorReport, ReportEntry};
