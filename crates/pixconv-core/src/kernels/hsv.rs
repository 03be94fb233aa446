//! RGB <-> HSV on the unit domain

use super::{hue, max_min};

/// Convert normalized RGB to HSV
///
/// `v = max(r, g, b)`, `s = (max - min) / max` (0 for black).
#[inline]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let (max, min) = max_min(r, g, b);
    let s = if max == 0.0 { 0.0 } else { (max - min) / max };
    [hue(r, g, b, max, min), s, max]
}

/// Convert HSV to normalized RGB
///
/// A hue of exactly `1.0` is the same as `0.0`.
#[inline]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    if s == 0.0 {
        return [v, v, v];
    }

    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;

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

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(a: [f64; 3], b: [f64; 3], eps: f64) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < eps, "{a:?} != {b:?} at channel {i}");
        }
    }

    #[test]
    fn test_known_values() {
        let [h, s, v] = rgb_to_hsv(0.5, 0.25, 0.75);
        assert!((h - 0.75).abs() < EPSILON);
        assert!((s - 2.0 / 3.0).abs() < EPSILON);
        assert_eq!(v, 0.75);

        assert_close(rgb_to_hsv(1.0, 0.0, 0.0), [0.0, 1.0, 1.0], EPSILON);
        assert_close(rgb_to_hsv(1.0, 1.0, 0.0), [1.0 / 6.0, 1.0, 1.0], EPSILON);
        assert_close(rgb_to_hsv(0.0, 0.5, 0.5), [0.5, 1.0, 0.5], EPSILON);
    }

    #[test]
    fn test_black_and_gray() {
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsv(0.4, 0.4, 0.4), [0.0, 0.0, 0.4]);
    }

    #[test]
    fn test_every_sector_round_trips() {
        let samples = [
            [0.9, 0.3, 0.1],
            [0.3, 0.9, 0.1],
            [0.1, 0.9, 0.3],
            [0.1, 0.3, 0.9],
            [0.3, 0.1, 0.9],
            [0.9, 0.1, 0.3],
        ];
        for rgb in samples {
            let [h, s, v] = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
            assert_close(hsv_to_rgb(h, s, v), rgb, EPSILON);
        }
    }

    #[test]
    fn test_full_turn_is_red() {
        assert_close(hsv_to_rgb(1.0, 1.0, 1.0), [1.0, 0.0, 0.0], EPSILON);
        assert_close(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0], EPSILON);
    }

    #[test]
    fn test_zero_saturation_ignores_hue() {
        for h in [0.0, 0.25, 0.5, 0.99] {
            assert_eq!(hsv_to_rgb(h, 0.0, 0.6), [0.6, 0.6, 0.6]);
        }
    }
}
