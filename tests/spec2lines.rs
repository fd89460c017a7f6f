use approx::{assert_abs_diff_eq, assert_relative_eq};
use spectroscope::data::model::linspace;
use spectroscope::{spec2lines, ColorScheme, ConversionError, DEFAULT_GAMMA};

const SCHEMES: [&str; 3] = ["good", "scientific", "colorful"];

#[test]
fn colorful_band_edges_end_to_end() {
    let wavelengths = [380.0, 510.0, 645.0, 750.0];
    let intensities = [1.0; 4];
    let img = spec2lines(&wavelengths, &intensities, "colorful", 1.0).unwrap();
    assert_eq!(img.shape(), [1, 4, 3]);

    let px = img.pixels();
    assert_relative_eq!(px[0][0], 0.3);
    assert_relative_eq!(px[0][2], 0.3);
    assert_eq!(px[1][1], 1.0);
    assert_eq!(px[1][2], 0.0);
    assert_eq!(px[2], [1.0, 0.0, 0.0]);
    assert_relative_eq!(px[3][0], 0.3);
    assert_eq!(px[3][1], 0.0);
    assert_eq!(px[3][2], 0.0);
}

#[test]
fn invalid_selector_is_rejected() {
    let err = spec2lines(&[500.0], &[1.0], "bogus", DEFAULT_GAMMA).unwrap_err();
    assert!(matches!(err, ConversionError::UnknownColorScheme { ref value } if value == "bogus"));
}

#[test]
fn selector_is_checked_before_lengths() {
    let err = spec2lines(&[500.0, 600.0], &[1.0], "bogus", DEFAULT_GAMMA).unwrap_err();
    assert!(matches!(err, ConversionError::UnknownColorScheme { .. }));
}

#[test]
fn every_scheme_is_finite_and_in_unit_range() {
    let wl = linspace(300.0, 800.0, 1001);
    let intensities = vec![1.0; wl.len()];
    for scheme in SCHEMES {
        let img = spec2lines(&wl, &intensities, scheme, DEFAULT_GAMMA).unwrap();
        assert_eq!(img.shape(), [1, wl.len(), 3]);
        for px in img.pixels() {
            for &c in px {
                assert!(c.is_finite(), "{scheme}: non-finite value");
                assert!(c >= 0.0 && c <= 1.0 + 1e-12, "{scheme}: {c} out of range");
            }
        }
    }
}

#[test]
fn scientific_minimum_is_zero_after_gamma() {
    let wl = linspace(380.0, 750.0, 400);
    let intensities = vec![1.0; wl.len()];
    let img = spec2lines(&wl, &intensities, "scientific", 0.6).unwrap();
    let min = img
        .pixels()
        .iter()
        .flat_map(|p| p.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let max = img
        .pixels()
        .iter()
        .flat_map(|p| p.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, 0.0);
    assert_abs_diff_eq!(max, 1.0, epsilon = 1e-9);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let wl = linspace(380.0, 750.0, 257);
    let intensities: Vec<f64> = wl.iter().map(|w| (w / 50.0).sin().abs()).collect();
    for scheme in SCHEMES {
        let a = spec2lines(&wl, &intensities, scheme, 0.6).unwrap();
        let b = spec2lines(&wl, &intensities, scheme, 0.6).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn good_scheme_peaks_at_full_brightness() {
    let wl = linspace(380.0, 750.0, 3701);
    let intensities = vec![1.0; wl.len()];
    let img = spectroscope::convert(&wl, &intensities, ColorScheme::Good, 1.0).unwrap();
    let max = img
        .pixels()
        .iter()
        .flat_map(|p| p.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(max, 1.0, max_relative = 1e-12);
}

#[test]
fn empty_spectrum_gives_empty_image() {
    for scheme in SCHEMES {
        let img = spec2lines(&[], &[], scheme, DEFAULT_GAMMA).unwrap();
        assert_eq!(img.shape(), [1, 0, 3]);
    }
}
