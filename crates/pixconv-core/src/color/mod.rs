//! Pixel types and typed conversions
//!
//! This module provides:
//! - [`Rgb`], [`Hsv`], [`Hsl`] and [`Yuv`] pixel values, generic over the
//!   channel type (`f32`, `f64`, `u8`, `u16`)
//! - The six conversions between RGB and the other models
//! - [`ColorModel`] for choosing a model at runtime
//!
//! Each pixel type is `#[repr(C)]` and `Pod` when its channel is, so an
//! interleaved buffer can be viewed as a pixel slice with
//! `bytemuck::cast_slice`.

use std::fmt;
use std::str::FromStr;

use crate::channel::{Channel, Depth, through_unit};
use crate::error::{Error, Result};
use crate::kernels;

/// Shared constructors, array conversions and `Pod` impls for a pixel type
macro_rules! pixel_type {
    ($name:ident, $a:ident, $b:ident, $c:ident) => {
        impl<T: Channel> $name<T> {
            /// Create a new pixel
            #[inline]
            pub const fn new($a: T, $b: T, $c: T) -> Self {
                Self { $a, $b, $c }
            }

            /// Create from an array
            #[inline]
            pub const fn from_array(arr: [T; 3]) -> Self {
                Self {
                    $a: arr[0],
                    $b: arr[1],
                    $c: arr[2],
                }
            }

            /// Convert to array
            #[inline]
            pub const fn to_array(&self) -> [T; 3] {
                [self.$a, self.$b, self.$c]
            }

            /// Re-quantize to another channel depth through the unit domain
            #[inline]
            pub fn to_depth<U: Channel>(&self) -> $name<U> {
                $name {
                    $a: U::from_unit(self.$a.to_unit()),
                    $b: U::from_unit(self.$b.to_unit()),
                    $c: U::from_unit(self.$c.to_unit()),
                }
            }
        }

        impl<T: Channel> From<[T; 3]> for $name<T> {
            fn from(arr: [T; 3]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Channel> From<$name<T>> for [T; 3] {
            fn from(px: $name<T>) -> Self {
                px.to_array()
            }
        }

        // SAFETY: #[repr(C)] with three fields of the same type has no padding
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $name<T> {}
    };
}

/// Fold a float hue that narrowed up to a full turn back to zero
///
/// An `f64` hue just below 1 can round to exactly `1.0` as `f32`. Integer
/// hues keep `M`, which is a valid step.
#[inline]
fn wrap_hue<T: Channel>(h: T) -> T {
    if !T::DEPTH.is_integer() && h.to_unit() >= 1.0 {
        T::ZERO
    } else {
        h
    }
}

pub mod hsl;
pub mod hsv;
pub mod rgb;
pub mod yuv;

pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use rgb::Rgb;
pub use yuv::{Yuv, gray_to_rgb, rgb_to_gray, rgb_to_yuv, yuv_to_rgb};

/// Color model other than RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Hue, saturation, value
    Hsv,
    /// Hue, saturation, lightness
    Hsl,
    /// Full-range BT.601 luma and centered chroma
    Yuv,
}

impl ColorModel {
    /// All models
    pub const ALL: [ColorModel; 3] = [ColorModel::Hsv, ColorModel::Hsl, ColorModel::Yuv];

    /// Channel names in storage order
    pub const fn channel_names(self) -> [&'static str; 3] {
        match self {
            ColorModel::Hsv => ["h", "s", "v"],
            ColorModel::Hsl => ["h", "s", "l"],
            ColorModel::Yuv => ["y", "u", "v"],
        }
    }

    /// Convert a normalized RGB triple into this model
    #[inline]
    pub fn from_rgb_unit(self, [r, g, b]: [f64; 3]) -> [f64; 3] {
        match self {
            ColorModel::Hsv => kernels::rgb_to_hsv(r, g, b),
            ColorModel::Hsl => kernels::rgb_to_hsl(r, g, b),
            ColorModel::Yuv => kernels::rgb_to_yuv(r, g, b),
        }
    }

    /// Convert a normalized triple of this model back to RGB
    #[inline]
    pub fn to_rgb_unit(self, [a, b, c]: [f64; 3]) -> [f64; 3] {
        match self {
            ColorModel::Hsv => kernels::hsv_to_rgb(a, b, c),
            ColorModel::Hsl => kernels::hsl_to_rgb(a, b, c),
            ColorModel::Yuv => kernels::yuv_to_rgb(a, b, c),
        }
    }

    /// Maximum per-channel round-trip error, in integer steps
    ///
    /// Upper bound on `|rgb - to_rgb(from_rgb(rgb))|` for every channel and
    /// every RGB value at `depth`. Float depth has no integer steps and
    /// returns 0; its error is float rounding only.
    pub const fn round_trip_tolerance(self, depth: Depth) -> u32 {
        match (self, depth) {
            (_, Depth::Float) => 0,
            (ColorModel::Hsv, Depth::U8) => 4,
            (ColorModel::Hsv, Depth::U16) => 3,
            (ColorModel::Hsl, Depth::U8) => 5,
            (ColorModel::Hsl, Depth::U16) => 4,
            (ColorModel::Yuv, Depth::U8) => 2,
            (ColorModel::Yuv, Depth::U16) => 4,
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorModel::Hsv => write!(f, "HSV"),
            ColorModel::Hsl => write!(f, "HSL"),
            ColorModel::Yuv => write!(f, "YUV"),
        }
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsv" | "hsb" => Ok(ColorModel::Hsv),
            "hsl" | "hls" => Ok(ColorModel::Hsl),
            "yuv" | "ycbcr" => Ok(ColorModel::Yuv),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

/// Convert an RGB triple at any depth into `model`
#[inline]
pub fn convert_from_rgb<T: Channel>(model: ColorModel, rgb: [T; 3]) -> [T; 3] {
    let mut out = through_unit(rgb, |c| model.from_rgb_unit(c));
    if model != ColorModel::Yuv {
        out[0] = wrap_hue(out[0]);
    }
    out
}

/// Convert a triple of `model` at any depth back to RGB
#[inline]
pub fn convert_to_rgb<T: Channel>(model: ColorModel, color: [T; 3]) -> [T; 3] {
    through_unit(color, |c| model.to_rgb_unit(c))
}
