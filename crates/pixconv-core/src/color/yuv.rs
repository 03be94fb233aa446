//! YUV pixel values, conversions and luma

use super::Rgb;
use crate::channel::{Channel, through_unit};
use crate::kernels;

/// YUV pixel (full-range BT.601 YCbCr)
///
/// U and V are centered on half scale: 0.5 for floats, 128 for `u8`,
/// 32768 for `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Yuv<T> {
    /// Luma
    pub y: T,
    /// Blue-difference chroma
    pub u: T,
    /// Red-difference chroma
    pub v: T,
}

pixel_type!(Yuv, y, u, v);

/// Convert RGB to YUV at the pixel's own depth
#[inline]
pub fn rgb_to_yuv<T: Channel>(rgb: Rgb<T>) -> Yuv<T> {
    Yuv::from_array(through_unit(rgb.to_array(), |[r, g, b]| {
        kernels::rgb_to_yuv(r, g, b)
    }))
}

/// Convert YUV to RGB at the pixel's own depth
#[inline]
pub fn yuv_to_rgb<T: Channel>(yuv: Yuv<T>) -> Rgb<T> {
    Rgb::from_array(through_unit(yuv.to_array(), |[y, u, v]| {
        kernels::yuv_to_rgb(y, u, v)
    }))
}

/// Luma of an RGB pixel, the Y channel of [`rgb_to_yuv`] alone
#[inline]
pub fn rgb_to_gray<T: Channel>(rgb: Rgb<T>) -> T {
    T::from_unit(kernels::luma(rgb.r.to_unit(), rgb.g.to_unit(), rgb.b.to_unit()))
}

/// Gray pixel with every channel set to `y`
#[inline]
pub fn gray_to_rgb<T: Channel>(y: T) -> Rgb<T> {
    Rgb::new(y, y, y)
}

impl<T: Channel> From<Rgb<T>> for Yuv<T> {
    fn from(rgb: Rgb<T>) -> Self {
        rgb_to_yuv(rgb)
    }
}

impl<T: Channel> From<Yuv<T>> for Rgb<T> {
    fn from(yuv: Yuv<T>) -> Self {
        yuv_to_rgb(yuv)
    }
}
