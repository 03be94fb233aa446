//! Float round-trip tests
//!
//! RGB -> model -> RGB over the unit grid must reproduce the input to
//! within `1e-6` for HSV and HSL and `1e-4` for YUV, at both `f64` and
//! `f32` channel types.

use pixconv_core::{
    ColorModel, Rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, rgb_to_yuv, yuv_to_rgb,
};
use pixconv_tests::accuracy::measure_float_round_trip;
use pixconv_tests::patterns::{UNIT_GRID_STEP, random_unit, unit_grid};

fn float_limit(model: ColorModel) -> f64 {
    match model {
        ColorModel::Yuv => 1e-4,
        _ => 1e-6,
    }
}

#[test]
fn test_unit_grid_round_trip() {
    let grid = unit_grid(UNIT_GRID_STEP);

    for model in ColorModel::ALL {
        let stats = measure_float_round_trip(model, &grid);
        eprintln!(
            "{model} f64 grid: max={:.3e} mean={:.3e} n={}",
            stats.max,
            stats.mean(),
            stats.count
        );
        assert!(
            stats.max < float_limit(model),
            "{model} round trip error {:.3e} at {:?}",
            stats.max,
            stats.worst_input
        );
    }
}

#[test]
fn test_random_round_trip() {
    let samples = random_unit(20_000, 0xF10A7);

    for model in ColorModel::ALL {
        let stats = measure_float_round_trip(model, &samples);
        assert!(
            stats.max < float_limit(model),
            "{model} random round trip error {:.3e} at {:?}",
            stats.max,
            stats.worst_input
        );
    }
}

#[test]
fn test_typed_round_trip_f64() {
    for [r, g, b] in unit_grid(0.1) {
        let rgb = Rgb::new(r, g, b);
        assert!(hsv_to_rgb(rgb_to_hsv(rgb)).approx_eq(&rgb, 1e-6), "HSV {rgb:?}");
        assert!(hsl_to_rgb(rgb_to_hsl(rgb)).approx_eq(&rgb, 1e-6), "HSL {rgb:?}");
        assert!(yuv_to_rgb(rgb_to_yuv(rgb)).approx_eq(&rgb, 1e-4), "YUV {rgb:?}");
    }
}

#[test]
fn test_typed_round_trip_f32() {
    for [r, g, b] in unit_grid(UNIT_GRID_STEP) {
        let rgb = Rgb::new(r as f32, g as f32, b as f32);
        for back in [
            hsv_to_rgb(rgb_to_hsv(rgb)),
            hsl_to_rgb(rgb_to_hsl(rgb)),
            yuv_to_rgb(rgb_to_yuv(rgb)),
        ] {
            // f32 storage adds about one ulp of error per stage
            assert!((back.r - rgb.r).abs() < 1e-5, "{rgb:?} -> {back:?}");
            assert!((back.g - rgb.g).abs() < 1e-5, "{rgb:?} -> {back:?}");
            assert!((back.b - rgb.b).abs() < 1e-5, "{rgb:?} -> {back:?}");
        }
    }
}

#[test]
fn test_float_scenario_hsv() {
    let rgb = Rgb::<f64>::new(0.5, 0.25, 0.75);
    let hsv = rgb_to_hsv(rgb);
    assert!((hsv.h - 0.75).abs() < 1e-9);
    assert!((hsv.s - 2.0 / 3.0).abs() < 1e-9);
    assert!((hsv.v - 0.75).abs() < 1e-9);
    assert!(hsv_to_rgb(hsv).approx_eq(&rgb, 1e-6));

    let hsv = rgb_to_hsv(Rgb::<f64>::new(0.2, 0.4, 0.6));
    assert!((hsv.h - 7.0 / 12.0).abs() < 1e-9);
    assert!((hsv.s - 2.0 / 3.0).abs() < 1e-9);
    assert!((hsv.v - 0.6).abs() < 1e-9);

    let back = hsv_to_rgb(hsv);
    assert!(back.approx_eq(&Rgb::new(0.2, 0.4, 0.6), 1e-6));
}
