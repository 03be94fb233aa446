//! RGB pixel values

use crate::channel::Channel;
use crate::error::{Error, Result};

/// RGB pixel
///
/// Channels span `[0, 1]` for floats and the full integer range otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb<T> {
    /// Red component
    pub r: T,
    /// Green component
    pub g: T,
    /// Blue component
    pub b: T,
}

pixel_type!(Rgb, r, g, b);

impl<T: Channel> Rgb<T> {
    /// Black color
    pub const BLACK: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// White color
    pub const WHITE: Self = Self::new(T::MAX, T::MAX, T::MAX);

    /// Whether all three channels are equal
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl Rgb<f64> {
    /// Create a normalized RGB color, rejecting non-finite or out-of-range
    /// components
    pub fn try_new(r: f64, g: f64, b: f64) -> Result<Self> {
        check_unit("r", r)?;
        check_unit("g", g)?;
        check_unit("b", b)?;
        Ok(Self::new(r, g, b))
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl Rgb<f32> {
    /// Create a normalized RGB color, rejecting non-finite or out-of-range
    /// components
    pub fn try_new(r: f32, g: f32, b: f32) -> Result<Self> {
        check_unit("r", r as f64)?;
        check_unit("g", g as f64)?;
        check_unit("b", b as f64)?;
        Ok(Self::new(r, g, b))
    }
}

fn check_unit(channel: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange { channel, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_constants() {
        assert_eq!(Rgb::<u8>::BLACK, Rgb::new(0, 0, 0));
        assert_eq!(Rgb::<u8>::WHITE, Rgb::new(255, 255, 255));
        assert_eq!(Rgb::<u16>::WHITE, Rgb::new(65535, 65535, 65535));
        assert_eq!(Rgb::<f64>::WHITE, Rgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_array_conversion() {
        let rgb = Rgb::from([1u8, 2, 3]);
        assert_eq!(rgb.g, 2);
        let arr: [u8; 3] = rgb.into();
        assert_eq!(arr, [1, 2, 3]);
    }

    #[test]
    fn test_depth_conversion() {
        let rgb = Rgb::new(255u8, 128, 0);

        let wide: Rgb<u16> = rgb.to_depth();
        assert_eq!(wide, Rgb::new(65535, 32896, 0));
        assert_eq!(wide.to_depth::<u8>(), rgb);

        let unit: Rgb<f64> = rgb.to_depth();
        assert!(unit.approx_eq(&Rgb::new(1.0, 128.0 / 255.0, 0.0), EPSILON));
    }

    #[test]
    fn test_try_new() {
        assert!(Rgb::<f64>::try_new(0.0, 0.5, 1.0).is_ok());
        assert_eq!(
            Rgb::<f64>::try_new(0.0, 1.5, 0.0),
            Err(Error::OutOfRange {
                channel: "g",
                value: 1.5
            })
        );
        assert!(Rgb::<f64>::try_new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Rgb::<f32>::try_new(0.0, 0.0, f32::INFINITY).is_err());
        assert!(Rgb::<f32>::try_new(-0.1, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_in_gamut() {
        assert!(Rgb::<f64>::WHITE.is_in_gamut());
        assert!(Rgb::<f64>::BLACK.is_in_gamut());
        assert!(!Rgb::<f64>::new(1.5, 0.0, 0.0).is_in_gamut());
        assert!(!Rgb::<f64>::new(0.0, -0.1, 0.0).is_in_gamut());
    }

    #[test]
    fn test_is_gray() {
        assert!(Rgb::new(7u8, 7, 7).is_gray());
        assert!(!Rgb::new(7u8, 7, 8).is_gray());
    }
}
