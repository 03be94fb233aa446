//! RGB <-> YUV (full-range BT.601 YCbCr) on the unit domain
//!
//! ```text
//! Y  =  Kr R + Kg G + Kb B
//! Cb =  0.5 (B - Y) / (1 - Kb) + 0.5
//! Cr =  0.5 (R - Y) / (1 - Kr) + 0.5
//! ```
//!
//! Chroma is centered on 0.5, so every RGB in `[0, 1]^3` maps into
//! `[0, 1]^3` and the integer depths store U and V without an offset of
//! their own. The inverse matrix is derived algebraically from the same
//! three coefficients rather than rounded constants, so forward followed by
//! inverse is the identity up to float error.
//!
//! The forward chroma rows are evaluated as weighted channel differences
//! (`B - Y = Kr (B - R) + Kg (B - G)`). That is the same linear map as
//! [`RGB_TO_YCBCR`], but a gray input gives exactly zero chroma instead of a
//! rounding residue, so gray always quantizes to the same center step.

use crate::math::Matrix3x3;

/// Red luma coefficient (BT.601)
pub const KR: f64 = 0.299;

/// Blue luma coefficient (BT.601)
pub const KB: f64 = 0.114;

/// Green luma coefficient
pub const KG: f64 = 1.0 - KR - KB;

/// Center of the U and V channels
pub const CHROMA_OFFSET: f64 = 0.5;

/// RGB to (Y, Cb, Cr) with chroma centered on zero
pub const RGB_TO_YCBCR: Matrix3x3 = Matrix3x3::new([
    [KR, KG, KB],
    [-0.5 * KR / (1.0 - KB), -0.5 * KG / (1.0 - KB), 0.5],
    [0.5, -0.5 * KG / (1.0 - KR), -0.5 * KB / (1.0 - KR)],
]);

/// (Y, Cb, Cr) with chroma centered on zero to RGB
///
/// Exact inverse of [`RGB_TO_YCBCR`]
pub const YCBCR_TO_RGB: Matrix3x3 = Matrix3x3::new([
    [1.0, 0.0, 2.0 * (1.0 - KR)],
    [
        1.0,
        -2.0 * KB * (1.0 - KB) / KG,
        -2.0 * KR * (1.0 - KR) / KG,
    ],
    [1.0, 2.0 * (1.0 - KB), 0.0],
]);

/// Convert normalized RGB to YUV
#[inline]
pub fn rgb_to_yuv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let cb = 0.5 / (1.0 - KB) * (KR * (b - r) + KG * (b - g));
    let cr = 0.5 / (1.0 - KR) * (KG * (r - g) + KB * (r - b));
    [luma(r, g, b), cb + CHROMA_OFFSET, cr + CHROMA_OFFSET]
}

/// Convert YUV to normalized RGB
#[inline]
pub fn yuv_to_rgb(y: f64, u: f64, v: f64) -> [f64; 3] {
    YCBCR_TO_RGB.multiply_vec([y, u - CHROMA_OFFSET, v - CHROMA_OFFSET])
}

/// Luma (the Y row alone)
#[inline]
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    KR * r + KG * g + KB * b
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_matrices_are_inverse() {
        // Each basis vector must survive both compositions
        for axis in 0..3 {
            let mut e = [0.0; 3];
            e[axis] = 1.0;
            for out in [
                RGB_TO_YCBCR.multiply_vec(YCBCR_TO_RGB.multiply_vec(e)),
                YCBCR_TO_RGB.multiply_vec(RGB_TO_YCBCR.multiply_vec(e)),
            ] {
                for (got, want) in out.iter().zip(e.iter()) {
                    assert!((got - want).abs() < EPSILON, "{out:?} vs {e:?}");
                }
            }
        }
    }

    #[test]
    fn test_luma_weights_sum_to_one() {
        assert!((KR + KG + KB - 1.0).abs() < EPSILON);
        assert!((luma(1.0, 1.0, 1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_gray_has_exactly_centered_chroma() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let [y, u, w] = rgb_to_yuv(v, v, v);
            assert!((y - v).abs() < EPSILON);
            assert_eq!(u, CHROMA_OFFSET);
            assert_eq!(w, CHROMA_OFFSET);
        }
    }

    #[test]
    fn test_forward_matches_matrix() {
        for rgb in [[0.1, 0.5, 0.9], [1.0, 0.0, 0.5], [0.0, 1.0, 1.0], [0.7, 0.2, 0.2]] {
            let [y, u, v] = rgb_to_yuv(rgb[0], rgb[1], rgb[2]);
            let m = RGB_TO_YCBCR.multiply_vec(rgb);
            assert!((y - m[0]).abs() < EPSILON);
            assert!((u - CHROMA_OFFSET - m[1]).abs() < EPSILON);
            assert!((v - CHROMA_OFFSET - m[2]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_chroma_extremes() {
        // Pure blue maximizes U, pure red maximizes V
        let [_, u, _] = rgb_to_yuv(0.0, 0.0, 1.0);
        assert!((u - 1.0).abs() < EPSILON);
        let [_, _, v] = rgb_to_yuv(1.0, 0.0, 0.0);
        assert!((v - 1.0).abs() < EPSILON);

        // Yellow and cyan sit at the other ends
        let [_, u, _] = rgb_to_yuv(1.0, 1.0, 0.0);
        assert!(u.abs() < EPSILON);
        let [_, _, v] = rgb_to_yuv(0.0, 1.0, 1.0);
        assert!(v.abs() < EPSILON);
    }

    #[test]
    fn test_known_bt601_values() {
        // Matches the JPEG/JFIF equations scaled to [0, 1]
        let [y, u, v] = rgb_to_yuv(1.0, 0.0, 0.0);
        assert!((y - 0.299).abs() < EPSILON);
        assert!((u - (0.5 - 0.168_736)).abs() < 1e-6);
        assert!((v - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_round_trip() {
        for rgb in [[0.1, 0.5, 0.9], [1.0, 0.0, 0.5], [0.33, 0.33, 0.34]] {
            let [y, u, v] = rgb_to_yuv(rgb[0], rgb[1], rgb[2]);
            let back = yuv_to_rgb(y, u, v);
            for i in 0..3 {
                assert!((back[i] - rgb[i]).abs() < 1e-12);
            }
        }
    }
}
