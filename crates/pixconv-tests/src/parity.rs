//! Parity testing framework
//!
//! Compares the pixconv float kernels against a reference implementation
//! over a set of normalized RGB samples.

use std::fmt;

use pixconv_core::ColorModel;

use crate::accuracy::{FloatStats, hue_distance};
use crate::reference::ReferenceImpl;

/// Which way a parity test converts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// RGB into the model
    Forward,
    /// Model back to RGB
    Inverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Inverse => write!(f, "inverse"),
        }
    }
}

/// Result of a parity test
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// Model under test
    pub model: ColorModel,
    /// Reference used
    pub reference: ReferenceImpl,
    /// Conversion direction
    pub direction: Direction,
    /// Absolute difference statistics
    pub stats: FloatStats,
    /// Largest accepted difference
    pub tolerance: f64,
    /// Whether the test passed
    pub passed: bool,
    /// Optional notes about differences
    pub notes: Option<String>,
}

impl ParityResult {
    /// Check if this result indicates exact match
    pub fn is_exact(&self) -> bool {
        self.stats.max < 1e-12
    }

    /// Check if this result is within tolerance
    pub fn is_acceptable(&self) -> bool {
        self.stats.max < self.tolerance
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} {} vs {}]: max={:.3e} mean={:.3e} n={} {}",
            self.test_name,
            self.model,
            self.direction,
            self.reference,
            self.stats.max,
            self.stats.mean(),
            self.stats.count,
            if self.passed { "PASS" } else { "FAIL" }
        )
    }
}

/// A parity test comparing pixconv to a reference implementation
pub struct ParityTest {
    /// Test name
    pub name: String,
    /// Test description
    pub description: String,
    /// Model under test
    pub model: ColorModel,
    /// Reference implementation
    pub reference: ReferenceImpl,
    /// Conversion direction
    pub direction: Direction,
    /// Largest accepted difference
    pub tolerance: f64,
    /// Whether this test is expected to fail
    pub expected_fail: bool,
    /// Reason for expected failure
    pub expected_fail_reason: Option<String>,
}

impl ParityTest {
    /// Default tolerance for float parity
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Create a new forward parity test
    pub fn new(name: impl Into<String>, model: ColorModel, reference: ReferenceImpl) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            model,
            reference,
            direction: Direction::Forward,
            tolerance: Self::DEFAULT_TOLERANCE,
            expected_fail: false,
            expected_fail_reason: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Compare the inverse conversion instead
    pub fn inverse(mut self) -> Self {
        self.direction = Direction::Inverse;
        self
    }

    /// Override the tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Mark as expected to fail
    pub fn expected_fail(mut self, reason: impl Into<String>) -> Self {
        self.expected_fail = true;
        self.expected_fail_reason = Some(reason.into());
        self
    }

    /// Run the parity test over normalized RGB samples
    ///
    /// Inverse tests feed both implementations the reference's forward
    /// result. Hue is compared around the circle and skipped when the
    /// reference reports zero saturation, since hue is meaningless there.
    pub fn run(&self, samples: &[[f64; 3]]) -> ParityResult {
        let mut stats = FloatStats::default();

        for &rgb in samples {
            let Some(diff) = self.compare(rgb) else {
                continue;
            };
            stats.record(rgb, diff);
        }

        let acceptable = stats.max < self.tolerance;
        let passed = if self.expected_fail {
            !acceptable
        } else {
            acceptable
        };

        ParityResult {
            test_name: self.name.clone(),
            model: self.model,
            reference: self.reference,
            direction: self.direction,
            stats,
            tolerance: self.tolerance,
            passed,
            notes: self.expected_fail_reason.clone(),
        }
    }

    fn compare(&self, rgb: [f64; 3]) -> Option<f64> {
        let expected_forward = self.reference.from_rgb(self.model, rgb)?;

        match self.direction {
            Direction::Forward => {
                let ours = self.model.from_rgb_unit(rgb);
                Some(self.model_distance(ours, expected_forward))
            }
            Direction::Inverse => {
                let expected = self.reference.to_rgb(self.model, expected_forward)?;
                let ours = self.model.to_rgb_unit(expected_forward);
                Some(
                    ours.iter()
                        .zip(expected.iter())
                        .map(|(a, b)| (a - b).abs())
                        .fold(0.0, f64::max),
                )
            }
        }
    }

    fn model_distance(&self, ours: [f64; 3], expected: [f64; 3]) -> f64 {
        let has_hue = !matches!(self.model, ColorModel::Yuv);
        let hue = if !has_hue {
            (ours[0] - expected[0]).abs()
        } else if expected[1] == 0.0 {
            0.0
        } else {
            hue_distance(ours[0], expected[0])
        };

        hue.max((ours[1] - expected[1]).abs())
            .max((ours[2] - expected[2]).abs())
    }
}

/// Collection of parity tests
pub struct ParityTestSuite {
    tests: Vec<ParityTest>,
}

impl ParityTestSuite {
    pub fn new() -> Self {
        Self { tests: Vec::new() }
    }

    /// Every supported model/reference/direction combination
    pub fn standard() -> Self {
        let mut suite = Self::new();
        for model in ColorModel::ALL {
            for reference in ReferenceImpl::ALL {
                if !reference.supports(model) {
                    continue;
                }
                let name = format!("{}_{}", model, reference).to_lowercase();
                suite.add(
                    ParityTest::new(format!("{name}_forward"), model, reference)
                        .with_description(format!("RGB to {model} against {reference}")),
                );
                suite.add(
                    ParityTest::new(format!("{name}_inverse"), model, reference)
                        .with_description(format!("{model} to RGB against {reference}"))
                        .inverse(),
                );
            }
        }
        suite
    }

    pub fn add(&mut self, test: ParityTest) {
        self.tests.push(test);
    }

    pub fn tests(&self) -> &[ParityTest] {
        &self.tests
    }

    /// Run every test over the same samples
    pub fn run_all(&self, samples: &[[f64; 3]]) -> Vec<ParityResult> {
        self.tests.iter().map(|t| t.run(samples)).collect()
    }
}

impl Default for ParityTestSuite {
    fn default() -> Self {
        Self::new()
    }
}
