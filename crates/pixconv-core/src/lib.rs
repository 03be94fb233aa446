//! # pixconv - per-pixel color model conversion
//!
//! Converts single pixels between RGB and HSV, HSL and YUV (full-range
//! BT.601 YCbCr), in both directions, at three channel depths:
//!
//! | Channel type | Depth | Range |
//! |--------------|-------|-------|
//! | `f32`, `f64` | float | `[0, 1]` |
//! | `u8` | 8-bit | `[0, 255]` |
//! | `u16` | 16-bit | `[0, 65535]` |
//!
//! All math happens in the float [`kernels`]. Integer pixels are scaled into
//! `[0, 1]`, converted, then rounded to the nearest step and clamped (see
//! [`channel`]). Hue is scaled like every other channel: at 8-bit depth a
//! full turn spans `0..=255`, not degrees.
//!
//! ## Quick Start
//!
//! ```
//! use pixconv_core::{Rgb, hsv_to_rgb, rgb_to_hsv};
//!
//! let rgb = Rgb::new(120u8, 125, 127);
//! let hsv = rgb_to_hsv(rgb);
//! let back = hsv_to_rgb(hsv);
//!
//! // Quantization error is bounded per model and depth
//! assert!(back.r.abs_diff(rgb.r) <= 4);
//! ```
//!
//! ## Round-trip tolerance
//!
//! Converting to a model and back changes each channel by at most:
//!
//! | Model | 8-bit | 16-bit |
//! |-------|-------|--------|
//! | HSV | 4 | 3 |
//! | HSL | 5 | 4 |
//! | YUV | 2 | 4 |
//!
//! Float round trips are exact to `1e-6` (HSV, HSL) and `1e-4` (YUV). The
//! table is available at runtime as [`ColorModel::round_trip_tolerance`].
//!
//! ## Preconditions
//!
//! Float channels must be finite and are expected in `[0, 1]`. Non-finite
//! input trips a debug assertion; out-of-range input gives unspecified but
//! non-panicking results in release builds. Use [`Rgb::try_new`] to validate
//! untrusted input first. Integer channels have no precondition.

pub mod channel;
pub mod color;
pub mod error;
pub mod kernels;
pub mod math;

pub use channel::{Channel, Depth, through_unit};
pub use color::{
    ColorModel, Hsl, Hsv, Rgb, Yuv, convert_from_rgb, convert_to_rgb, gray_to_rgb, hsl_to_rgb,
    hsv_to_rgb, rgb_to_gray, rgb_to_hsl, rgb_to_hsv, rgb_to_yuv, yuv_to_rgb,
};
pub use error::{Error, Result};

/// Version of pixconv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
