//! HSV pixel values and conversions

use super::{Rgb, wrap_hue};
use crate::channel::{Channel, through_unit};
use crate::kernels;

/// HSV pixel
///
/// Hue is a fraction of a turn scaled like any other channel: `[0, 1)` for
/// floats, `[0, M]` at integer depth (so `h = 255` in a `Hsv<u8>` is one
/// step short of a full turn, not 255 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Hsv<T> {
    /// Hue
    pub h: T,
    /// Saturation
    pub s: T,
    /// Value
    pub v: T,
}

pixel_type!(Hsv, h, s, v);

/// Convert RGB to HSV at the pixel's own depth
#[inline]
pub fn rgb_to_hsv<T: Channel>(rgb: Rgb<T>) -> Hsv<T> {
    let mut px = Hsv::from_array(through_unit(rgb.to_array(), |[r, g, b]| {
        kernels::rgb_to_hsv(r, g, b)
    }));
    px.h = wrap_hue(px.h);
    px
}

/// Convert HSV to RGB at the pixel's own depth
#[inline]
pub fn hsv_to_rgb<T: Channel>(hsv: Hsv<T>) -> Rgb<T> {
    Rgb::from_array(through_unit(hsv.to_array(), |[h, s, v]| {
        kernels::hsv_to_rgb(h, s, v)
    }))
}

impl<T: Channel> From<Rgb<T>> for Hsv<T> {
    fn from(rgb: Rgb<T>) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl<T: Channel> From<Hsv<T>> for Rgb<T> {
    fn from(hsv: Hsv<T>) -> Self {
        hsv_to_rgb(hsv)
    }
}
