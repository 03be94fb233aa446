//! Float conversion kernels
//!
//! Pure functions on normalized `[0, 1]` triples. These are the only place
//! color math happens; the integer depths run the same kernels through the
//! quantization wrapper in [`crate::channel`].
//!
//! Hue is a fraction of a turn in `[0, 1)` (degrees / 360). Achromatic input
//! (`r == g == b`) has hue `0`.
//!
//! # Usage
//!
//! ```
//! use pixconv_core::kernels::{hsv_to_rgb, rgb_to_hsv};
//!
//! let [h, s, v] = rgb_to_hsv(0.5, 0.25, 0.75);
//! assert!((h - 0.75).abs() < 1e-12);
//!
//! let [r, g, b] = hsv_to_rgb(h, s, v);
//! assert!((r - 0.5).abs() < 1e-12 && (g - 0.25).abs() < 1e-12 && (b - 0.75).abs() < 1e-12);
//! ```

mod hsl;
mod hsv;
mod yuv;

pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use yuv::{
    CHROMA_OFFSET, KB, KG, KR, RGB_TO_YCBCR, YCBCR_TO_RGB, luma, rgb_to_yuv, yuv_to_rgb,
};

/// Largest and smallest of three channels
#[inline]
fn max_min(r: f64, g: f64, b: f64) -> (f64, f64) {
    (r.max(g).max(b), r.min(g).min(b))
}

/// Hue shared by HSV and HSL, as a fraction of a turn in `[0, 1)`
///
/// Six-sector formula keyed on the dominant channel. Ties go to red, then
/// green.
#[inline]
fn hue(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    let delta = max - min;
    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    // rem_euclid can round up to exactly 6.0
    let h = sector / 6.0;
    if h >= 1.0 { h - 1.0 } else { h }
}
