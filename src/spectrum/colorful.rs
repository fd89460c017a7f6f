//! Piecewise-linear hue progression across the visible range.
//!
//! Brightness falls off towards both edges of the spectrum. Unlike the other
//! schemes there is no normalization across samples.

use super::raw::ChannelMatrix;

pub const VISIBLE_MIN: f64 = 380.0;
pub const VISIBLE_MAX: f64 = 750.0;

/// Colour of a single wavelength at unit intensity.
///
/// Band limits are inclusive and tested in ascending order, so a boundary
/// wavelength takes the colour of the lower band.
pub fn band_rgb(wavelength: f64) -> [f64; 3] {
    let w = wavelength;
    if (380.0..=440.0).contains(&w) {
        let attenuation = 0.3 + 0.7 * (w - 380.0) / 60.0;
        [-(w - 440.0) / 60.0 * attenuation, 0.0, attenuation]
    } else if (440.0..=490.0).contains(&w) {
        [0.0, (w - 440.0) / 50.0, 1.0]
    } else if (490.0..=510.0).contains(&w) {
        [0.0, 1.0, -(w - 510.0) / 20.0]
    } else if (510.0..=580.0).contains(&w) {
        [(w - 510.0) / 70.0, 1.0, 0.0]
    } else if (580.0..=645.0).contains(&w) {
        [1.0, -(w - 645.0) / 65.0, 0.0]
    } else if (645.0..=750.0).contains(&w) {
        let attenuation = 0.3 + 0.7 * (750.0 - w) / 105.0;
        [attenuation, 0.0, 0.0]
    } else {
        [0.0; 3]
    }
}

pub fn raw_rgb(wavelengths: &[f64], intensities: &[f64]) -> ChannelMatrix {
    let mut rgb = ChannelMatrix::zeros(wavelengths.len());
    for (i, (&w, &intensity)) in wavelengths.iter().zip(intensities).enumerate() {
        rgb.set_column(i, band_rgb(w).map(|c| c * intensity));
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn edges_sit_on_attenuation_floor() {
        let violet = band_rgb(VISIBLE_MIN);
        assert_relative_eq!(violet[0], 0.3);
        assert_relative_eq!(violet[2], 0.3);
        let red = band_rgb(VISIBLE_MAX);
        assert_relative_eq!(red[0], 0.3);
        assert_eq!(red[1], 0.0);
    }

    #[test]
    fn boundaries_take_the_lower_band() {
        assert_eq!(band_rgb(440.0), [0.0, 0.0, 1.0]);
        assert_eq!(band_rgb(510.0), [0.0, 1.0, 0.0]);
        assert_eq!(band_rgb(645.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn invisible_wavelengths_are_black() {
        for w in [0.0, 379.999, 750.001, 1200.0, f64::NAN] {
            assert_eq!(band_rgb(w), [0.0; 3]);
        }
    }

    #[test]
    fn channels_scale_with_intensity() {
        let rgb = raw_rgb(&[380.0, 550.0], &[2.0, 0.5]);
        assert_relative_eq!(rgb.column(0)[0], 0.6);
        assert_relative_eq!(rgb.column(1)[0], 0.5 * 40.0 / 70.0);
        assert_eq!(rgb.column(1)[1], 0.5);
    }
}
