//! Reference implementation wrappers
//!
//! Two independent sources to compare the kernels against:
//!
//! - [`textbook`]: the classic formulas written out directly, hue from the
//!   normalized channel distances, HSL returned in `h, l, s` order the way
//!   most references print it
//! - [`palette`](https://docs.rs/palette): HSV and HSL through its
//!   `FromColor` conversions on `Srgb<f64>`
//!
//! Palette has no YCbCr type, so YUV only has the textbook reference.

use std::fmt;

use palette::{FromColor, encoding::Srgb as SrgbEncoding};
use pixconv_core::ColorModel;

type PaletteHsv = palette::Hsv<SrgbEncoding, f64>;
type PaletteHsl = palette::Hsl<SrgbEncoding, f64>;
type PaletteRgb = palette::Srgb<f64>;

/// Reference implementation for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceImpl {
    /// Closed-form textbook formulas
    Textbook,
    /// The palette crate
    Palette,
}

impl ReferenceImpl {
    /// Both references
    pub const ALL: [ReferenceImpl; 2] = [ReferenceImpl::Textbook, ReferenceImpl::Palette];

    /// Whether this reference implements `model`
    pub fn supports(self, model: ColorModel) -> bool {
        !matches!((self, model), (ReferenceImpl::Palette, ColorModel::Yuv))
    }

    /// Convert normalized RGB into `model`, channels in pixconv order
    pub fn from_rgb(self, model: ColorModel, [r, g, b]: [f64; 3]) -> Option<[f64; 3]> {
        match (self, model) {
            (ReferenceImpl::Textbook, ColorModel::Hsv) => Some(textbook::rgb_to_hsv(r, g, b)),
            (ReferenceImpl::Textbook, ColorModel::Hsl) => {
                let [h, l, s] = textbook::rgb_to_hls(r, g, b);
                Some([h, s, l])
            }
            (ReferenceImpl::Textbook, ColorModel::Yuv) => Some(textbook::rgb_to_ycbcr(r, g, b)),
            (ReferenceImpl::Palette, ColorModel::Hsv) => Some(palette_rgb_to_hsv(r, g, b)),
            (ReferenceImpl::Palette, ColorModel::Hsl) => Some(palette_rgb_to_hsl(r, g, b)),
            (ReferenceImpl::Palette, ColorModel::Yuv) => None,
        }
    }

    /// Convert a normalized `model` triple back to RGB
    pub fn to_rgb(self, model: ColorModel, [a, b, c]: [f64; 3]) -> Option<[f64; 3]> {
        match (self, model) {
            (ReferenceImpl::Textbook, ColorModel::Hsv) => Some(textbook::hsv_to_rgb(a, b, c)),
            (ReferenceImpl::Textbook, ColorModel::Hsl) => Some(textbook::hls_to_rgb(a, c, b)),
            (ReferenceImpl::Textbook, ColorModel::Yuv) => Some(textbook::ycbcr_to_rgb(a, b, c)),
            (ReferenceImpl::Palette, ColorModel::Hsv) => Some(palette_hsv_to_rgb(a, b, c)),
            (ReferenceImpl::Palette, ColorModel::Hsl) => Some(palette_hsl_to_rgb(a, b, c)),
            (ReferenceImpl::Palette, ColorModel::Yuv) => None,
        }
    }
}

impl fmt::Display for ReferenceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceImpl::Textbook => write!(f, "textbook"),
            ReferenceImpl::Palette => write!(f, "palette"),
        }
    }
}

/// RGB to HSV through palette, hue as a fraction of a turn
pub fn palette_rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let hsv = PaletteHsv::from_color(PaletteRgb::new(r, g, b));
    [
        hsv.hue.into_positive_degrees() / 360.0,
        hsv.saturation,
        hsv.value,
    ]
}

/// RGB to HSL through palette, hue as a fraction of a turn
pub fn palette_rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    let hsl = PaletteHsl::from_color(PaletteRgb::new(r, g, b));
    [
        hsl.hue.into_positive_degrees() / 360.0,
        hsl.saturation,
        hsl.lightness,
    ]
}

/// HSV to RGB through palette
pub fn palette_hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let rgb = PaletteRgb::from_color(PaletteHsv::new(h * 360.0, s, v));
    [rgb.red, rgb.green, rgb.blue]
}

/// HSL to RGB through palette
pub fn palette_hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let rgb = PaletteRgb::from_color(PaletteHsl::new(h * 360.0, s, l));
    [rgb.red, rgb.green, rgb.blue]
}

/// Closed-form reference formulas
pub mod textbook {
    /// BT.601 red weight
    const KR: f64 = 0.299;
    /// BT.601 blue weight
    const KB: f64 = 0.114;

    fn hue(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
        let span = max - min;
        let rc = (max - r) / span;
        let gc = (max - g) / span;
        let bc = (max - b) / span;
        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        (h / 6.0).rem_euclid(1.0)
    }

    /// RGB to `[h, s, v]`
    pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == min {
            return [0.0, 0.0, max];
        }
        [hue(r, g, b, max, min), (max - min) / max, max]
    }

    /// RGB to `[h, l, s]`
    pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> [f64; 3] {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return [0.0, l, 0.0];
        }
        let s = if l <= 0.5 {
            (max - min) / (max + min)
        } else {
            (max - min) / (2.0 - max - min)
        };
        [hue(r, g, b, max, min), l, s]
    }

    /// `[h, s, v]` to RGB
    pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
        if s == 0.0 {
            return [v, v, v];
        }
        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (i as i64).rem_euclid(6) {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        }
    }

    /// `[h, l, s]` to RGB
    pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> [f64; 3] {
        if s == 0.0 {
            return [l, l, l];
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        [
            component(m1, m2, h + 1.0 / 3.0),
            component(m1, m2, h),
            component(m1, m2, h - 1.0 / 3.0),
        ]
    }

    fn component(m1: f64, m2: f64, hue: f64) -> f64 {
        let hue = hue.rem_euclid(1.0);
        if hue < 1.0 / 6.0 {
            m1 + (m2 - m1) * hue * 6.0
        } else if hue < 0.5 {
            m2
        } else if hue < 2.0 / 3.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
        } else {
            m1
        }
    }

    /// RGB to full-range BT.601 `[y, cb, cr]`, chroma centered on 0.5
    pub fn rgb_to_ycbcr(r: f64, g: f64, b: f64) -> [f64; 3] {
        let y = KR * r + (1.0 - KR - KB) * g + KB * b;
        let cb = (b - y) / (2.0 * (1.0 - KB)) + 0.5;
        let cr = (r - y) / (2.0 * (1.0 - KR)) + 0.5;
        [y, cb, cr]
    }

    /// Full-range BT.601 `[y, cb, cr]` to RGB
    pub fn ycbcr_to_rgb(y: f64, cb: f64, cr: f64) -> [f64; 3] {
        let r = y + 2.0 * (1.0 - KR) * (cr - 0.5);
        let b = y + 2.0 * (1.0 - KB) * (cb - 0.5);
        let g = (y - KR * r - KB * b) / (1.0 - KR - KB);
        [r, g, b]
    }
}
