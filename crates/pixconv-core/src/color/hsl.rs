//! HSL pixel values and conversions

use super::{Rgb, wrap_hue};
use crate::channel::{Channel, through_unit};
use crate::kernels;

/// HSL pixel
///
/// Hue uses the same scaling as [`super::Hsv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Hsl<T> {
    /// Hue
    pub h: T,
    /// Saturation
    pub s: T,
    /// Lightness
    pub l: T,
}

pixel_type!(Hsl, h, s, l);

/// Convert RGB to HSL at the pixel's own depth
#[inline]
pub fn rgb_to_hsl<T: Channel>(rgb: Rgb<T>) -> Hsl<T> {
    let mut px = Hsl::from_array(through_unit(rgb.to_array(), |[r, g, b]| {
        kernels::rgb_to_hsl(r, g, b)
    }));
    px.h = wrap_hue(px.h);
    px
}

/// Convert HSL to RGB at the pixel's own depth
#[inline]
pub fn hsl_to_rgb<T: Channel>(hsl: Hsl<T>) -> Rgb<T> {
    Rgb::from_array(through_unit(hsl.to_array(), |[h, s, l]| {
        kernels::hsl_to_rgb(h, s, l)
    }))
}

impl<T: Channel> From<Rgb<T>> for Hsl<T> {
    fn from(rgb: Rgb<T>) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl<T: Channel> From<Hsl<T>> for Rgb<T> {
    fn from(hsl: Hsl<T>) -> Self {
        hsl_to_rgb(hsl)
    }
}
