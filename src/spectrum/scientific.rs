//! Colours derived from the CIE 1931 colour matching functions.
//!
//! The most accurate of the schemes, but the RGB gamut cannot reproduce the
//! blue-green part of the spectrum, so the solved RGB values go negative
//! there. Instead of clipping, the whole strip is shifted towards grey until
//! the darkest entry is zero.

use log::{debug, warn};

use super::error::ConversionError;
use super::gaussian::{basis, Lobe};
use super::linalg::{Lu, Mat3};
use super::raw::ChannelMatrix;

// Multi-lobe piecewise Gaussian fit of the CIE 1931 matching functions.
const X_BAR: [Lobe; 3] = [
    Lobe::new(1.056, 599.8, 37.9, 31.0),
    Lobe::new(0.362, 442.0, 16.0, 26.7),
    Lobe::new(-0.065, 501.1, 20.4, 26.2),
];
const Y_BAR: [Lobe; 2] = [Lobe::new(0.821, 568.8, 46.9, 40.5), Lobe::new(0.286, 530.9, 16.3, 31.1)];
const Z_BAR: [Lobe; 2] = [Lobe::new(1.217, 437.0, 11.8, 36.0), Lobe::new(0.681, 459.0, 26.0, 13.8)];

/// Luminosity normalization applied to every entry of [`RGB_TO_XYZ`].
pub const LUMINOSITY: f64 = 0.17697;

/// CIE RGB primaries expressed in XYZ, before luminosity normalization.
pub const RGB_TO_XYZ: Mat3 = [
    [0.49000, 0.31000, 0.20000],
    [0.17697, 0.81240, 0.01063],
    [0.00000, 0.01000, 0.99000],
];

const PIVOT_TOLERANCE: f64 = 1e-12;

/// The normalized conversion matrix `M` with `M · rgb = xyz`.
pub fn conversion_matrix() -> Mat3 {
    RGB_TO_XYZ.map(|row| row.map(|v| v / LUMINOSITY))
}

/// Tristimulus values for every wavelength.
pub fn tristimulus(wavelengths: &[f64]) -> ChannelMatrix {
    ChannelMatrix::from_channels([
        basis(&X_BAR, wavelengths),
        basis(&Y_BAR, wavelengths),
        basis(&Z_BAR, wavelengths),
    ])
}

/// Linear RGB for every wavelength, solved column by column from XYZ.
/// Entries may be negative.
pub fn linear_rgb(wavelengths: &[f64]) -> Result<ChannelMatrix, ConversionError> {
    let xyz = tristimulus(wavelengths);
    let lu = Lu::decompose(&conversion_matrix(), PIVOT_TOLERANCE)?;

    let mut rgb = ChannelMatrix::zeros(xyz.len());
    for i in 0..xyz.len() {
        rgb.set_column(i, lu.solve(xyz.column(i)));
    }
    Ok(rgb)
}

/// Scale each column by `intensity / (max - min)` and shift so the global
/// minimum becomes zero.
pub fn raw_rgb(wavelengths: &[f64], intensities: &[f64]) -> Result<ChannelMatrix, ConversionError> {
    let mut rgb = linear_rgb(wavelengths)?;
    if rgb.is_empty() {
        return Ok(rgb);
    }

    let interval = rgb.max() - rgb.min();
    debug!("scientific: {} samples, value interval {interval}", rgb.len());
    if interval > 0.0 {
        rgb.scale_columns(intensities, interval);
    } else {
        warn!("scientific: zero value interval, skipping scaling");
    }

    let min = rgb.min();
    rgb.shift(-min);
    Ok(rgb)
}
