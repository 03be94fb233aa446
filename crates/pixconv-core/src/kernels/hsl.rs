//! RGB <-> HSL on the unit domain

use super::{hue, max_min};

/// Convert normalized RGB to HSL
///
/// `l = (max + min) / 2`. Saturation divides the chroma by `max + min` on the
/// dark half (`l <= 0.5`) and by `2 - max - min` on the light half.
#[inline]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    let (max, min) = max_min(r, g, b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    let s = if delta == 0.0 {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    [hue(r, g, b, max, min), s, l]
}

/// Convert HSL to normalized RGB
#[inline]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let low = 2.0 * l - high;

    [
        channel(low, high, h + 1.0 / 3.0),
        channel(low, high, h),
        channel(low, high, h - 1.0 / 3.0),
    ]
}

/// One RGB channel from its hue offset, piecewise linear between `low` and `high`
#[inline]
fn channel(low: f64, high: f64, h: f64) -> f64 {
    let h = h - h.floor();
    if h < 1.0 / 6.0 {
        low + (high - low) * h * 6.0
    } else if h < 0.5 {
        high
    } else if h < 2.0 / 3.0 {
        low + (high - low) * (2.0 / 3.0 - h) * 6.0
    } else {
        low
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
        assert_close(rgb_to_hsl(1.0, 0.0, 0.0), [0.0, 1.0, 0.5], EPSILON);
        assert_close(rgb_to_hsl(0.0, 0.0, 0.5), [2.0 / 3.0, 1.0, 0.25], EPSILON);

        // Light half: l = 0.75, s = 0.5 / (2 - 1.0 - 0.5)
        assert_close(rgb_to_hsl(1.0, 0.5, 1.0), [5.0 / 6.0, 1.0, 0.75], EPSILON);

        // Dark half: l = 0.3, s = 0.2 / 0.6
        assert_close(rgb_to_hsl(0.2, 0.4, 0.2), [1.0 / 3.0, 1.0 / 3.0, 0.3], EPSILON);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        for v in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(rgb_to_hsl(v, v, v), [0.0, 0.0, v]);
        }
    }

    #[test]
    fn test_round_trip_both_halves() {
        let samples = [
            [0.1, 0.2, 0.05],
            [0.9, 0.8, 0.95],
            [0.5, 0.25, 0.75],
            [0.02, 0.98, 0.5],
            [0.7, 0.1, 0.1],
        ];
        for rgb in samples {
            let [h, s, l] = rgb_to_hsl(rgb[0], rgb[1], rgb[2]);
            assert_close(hsl_to_rgb(h, s, l), rgb, EPSILON);
        }
    }

    #[test]
    fn test_zero_saturation_ignores_hue() {
        for h in [0.0, 0.4, 0.8] {
            assert_eq!(hsl_to_rgb(h, 0.0, 0.35), [0.35, 0.35, 0.35]);
        }
    }

    #[test]
    fn test_extremes() {
        assert_close(hsl_to_rgb(0.3, 1.0, 0.0), [0.0, 0.0, 0.0], EPSILON);
        assert_close(hsl_to_rgb(0.3, 1.0, 1.0), [1.0, 1.0, 1.0], EPSILON);
    }
}
