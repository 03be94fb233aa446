//! Channel depths and quantization
//!
//! Every conversion runs in the unit domain (`f64` in `[0, 1]`). A
//! [`Channel`] type knows how to enter and leave that domain:
//!
//! | Channel | Depth | Scale `M` | Leaving the unit domain |
//! |---------|-------|-----------|-------------------------|
//! | `f32`, `f64` | [`Depth::Float`] | 1 | passthrough |
//! | `u8` | [`Depth::U8`] | 255 | `clamp(round(x * M), 0, M)` |
//! | `u16` | [`Depth::U16`] | 65535 | `clamp(round(x * M), 0, M)` |
//!
//! Both integer depths share the same rounding code and differ only in `M`.
//! Rounding is half away from zero (`f64::round`).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Channel depth selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Normalized floating point, `[0, 1]`
    Float,
    /// 8-bit unsigned, `[0, 255]`
    U8,
    /// 16-bit unsigned, `[0, 65535]`
    U16,
}

impl Depth {
    /// All depths, float first
    pub const ALL: [Depth; 3] = [Depth::Float, Depth::U8, Depth::U16];

    /// Scaling divisor between this depth and the unit domain
    #[inline]
    pub const fn max_value(self) -> f64 {
        match self {
            Depth::Float => 1.0,
            Depth::U8 => 255.0,
            Depth::U16 => 65535.0,
        }
    }

    /// Whether values at this depth are quantized
    #[inline]
    pub const fn is_integer(self) -> bool {
        !matches!(self, Depth::Float)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Float => write!(f, "float"),
            Depth::U8 => write!(f, "u8"),
            Depth::U16 => write!(f, "u16"),
        }
    }
}

impl FromStr for Depth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" | "f32" | "f64" => Ok(Depth::Float),
            "u8" | "8" | "uint8" => Ok(Depth::U8),
            "u16" | "16" | "uint16" => Ok(Depth::U16),
            _ => Err(Error::UnknownDepth(s.to_string())),
        }
    }
}

/// A pixel channel type that can be mapped to and from the unit domain
///
/// Integer channels carry their own range: a `u8` can't be outside
/// `[0, 255]`, so the integer adapters have no precondition to check.
pub trait Channel: Copy + PartialEq + Default + fmt::Debug + Send + Sync + 'static {
    /// Depth this channel type represents
    const DEPTH: Depth;

    /// Smallest channel value
    const ZERO: Self;

    /// Largest channel value (`1.0` for floats)
    const MAX: Self;

    /// Map into the unit domain
    fn to_unit(self) -> f64;

    /// Map from the unit domain, rounding and clamping at integer depths
    fn from_unit(v: f64) -> Self;
}

impl Channel for f64 {
    const DEPTH: Depth = Depth::Float;
    const ZERO: Self = 0.0;
    const MAX: Self = 1.0;

    #[inline]
    fn to_unit(self) -> f64 {
        debug_assert!(self.is_finite(), "non-finite channel value: {self}");
        self
    }

    #[inline]
    fn from_unit(v: f64) -> Self {
        v
    }
}

impl Channel for f32 {
    const DEPTH: Depth = Depth::Float;
    const ZERO: Self = 0.0;
    const MAX: Self = 1.0;

    #[inline]
    fn to_unit(self) -> f64 {
        debug_assert!(self.is_finite(), "non-finite channel value: {self}");
        self as f64
    }

    #[inline]
    fn from_unit(v: f64) -> Self {
        v as f32
    }
}

macro_rules! impl_integer_channel {
    ($t:ty, $depth:expr) => {
        impl Channel for $t {
            const DEPTH: Depth = $depth;
            const ZERO: Self = 0;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn to_unit(self) -> f64 {
                self as f64 / <$t>::MAX as f64
            }

            #[inline]
            fn from_unit(v: f64) -> Self {
                quantize(v, <$t>::MAX as f64) as $t
            }
        }
    };
}

impl_integer_channel!(u8, Depth::U8);
impl_integer_channel!(u16, Depth::U16);

/// Scale a unit-domain value to `[0, max]` and round to the nearest step
#[inline]
fn quantize(v: f64, max: f64) -> f64 {
    debug_assert!(!v.is_nan(), "NaN reached quantization");
    (v * max).round().clamp(0.0, max)
}

/// Run a unit-domain kernel on a triple of channel type `T`
///
/// This is the whole integer adapter: scale in, run `kernel`, scale out.
/// Float channels pass through unchanged.
#[inline]
pub fn through_unit<T: Channel>(c: [T; 3], kernel: impl FnOnce([f64; 3]) -> [f64; 3]) -> [T; 3] {
    let out = kernel([c[0].to_unit(), c[1].to_unit(), c[2].to_unit()]);
    [T::from_unit(out[0]), T::from_unit(out[1]), T::from_unit(out[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_scaling() {
        assert_eq!(0u8.to_unit(), 0.0);
        assert_eq!(255u8.to_unit(), 1.0);
        assert_eq!(u8::from_unit(1.0), 255);
        assert_eq!(u8::from_unit(128.0 / 255.0), 128);
    }

    #[test]
    fn test_u16_scaling() {
        assert_eq!(65535u16.to_unit(), 1.0);
        assert_eq!(u16::from_unit(0.5), 32768);
        assert_eq!(u16::from_unit(1.0), 65535);
    }

    #[test]
    fn test_rounding_is_nearest() {
        // 0.5 / 255 sits exactly between steps 0 and 1
        assert_eq!(u8::from_unit(0.49 / 255.0), 0);
        assert_eq!(u8::from_unit(0.51 / 255.0), 1);
        assert_eq!(u8::from_unit(254.6 / 255.0), 255);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(u8::from_unit(1.02), 255);
        assert_eq!(u8::from_unit(-0.3), 0);
        assert_eq!(u16::from_unit(1.0000001), 65535);
        assert_eq!(u16::from_unit(-1e-9), 0);
    }

    #[test]
    fn test_every_u8_value_survives() {
        for v in 0..=255u8 {
            assert_eq!(u8::from_unit(v.to_unit()), v);
        }
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(f64::from_unit(0.123_456_789), 0.123_456_789);
        assert_eq!(f64::from_unit(1.5), 1.5);
        assert_eq!(0.25f32.to_unit(), 0.25);
    }

    #[test]
    fn test_through_unit_identity() {
        assert_eq!(through_unit([0u8, 128, 255], |c| c), [0, 128, 255]);
        assert_eq!(through_unit([1u16, 30000, 65535], |c| c), [1, 30000, 65535]);
    }

    #[test]
    fn test_through_unit_quantizes_output() {
        let out: [u8; 3] = through_unit([10, 20, 30], |[a, b, c]| [a * 0.5, b + 0.2, c - 1.0]);
        assert_eq!(out, [5, 71, 0]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "non-finite channel value")]
    fn test_infinite_f32_trips_debug_assertion() {
        let _ = f32::INFINITY.to_unit();
    }

    #[test]
    fn test_depth_constants() {
        assert_eq!(<u8 as Channel>::DEPTH, Depth::U8);
        assert_eq!(<u16 as Channel>::DEPTH, Depth::U16);
        assert_eq!(<f32 as Channel>::DEPTH, Depth::Float);
        assert_eq!(Depth::U8.max_value(), 255.0);
        assert_eq!(Depth::U16.max_value(), 65535.0);
        assert!(!Depth::Float.is_integer());
    }

    #[test]
    fn test_depth_parse() {
        assert_eq!("u8".parse::<Depth>().unwrap(), Depth::U8);
        assert_eq!(" UINT16 ".parse::<Depth>().unwrap(), Depth::U16);
        assert_eq!("f64".parse::<Depth>().unwrap(), Depth::Float);
        assert!(matches!(
            "u12".parse::<Depth>(),
            Err(Error::UnknownDepth(_))
        ));

        for depth in Depth::ALL {
            assert_eq!(depth.to_string().parse::<Depth>().unwrap(), depth);
        }
    }
}
