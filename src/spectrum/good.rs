//! Manually fitted RGB response curves.
//!
//! A compromise between accuracy and aesthetics: each channel is one or two
//! skewed Gaussian lobes fitted by eye.

use log::{debug, warn};

use super::gaussian::{basis, Lobe};
use super::raw::ChannelMatrix;

const RED: [Lobe; 2] = [Lobe::new(0.35, 605.0, 33.0, 60.0), Lobe::new(0.05, 430.0, 18.0, 22.0)];
const GREEN: [Lobe; 1] = [Lobe::new(0.32, 542.0, 45.0, 40.0)];
const BLUE: [Lobe; 1] = [Lobe::new(0.32, 450.0, 25.0, 45.0)];

/// Unscaled channel responses.
pub fn basis_rgb(wavelengths: &[f64]) -> ChannelMatrix {
    ChannelMatrix::from_channels([
        basis(&RED, wavelengths),
        basis(&GREEN, wavelengths),
        basis(&BLUE, wavelengths),
    ])
}

/// Channel responses scaled by `intensity / max`, where `max` is the global
/// maximum of the unscaled responses.
pub fn raw_rgb(wavelengths: &[f64], intensities: &[f64]) -> ChannelMatrix {
    let mut rgb = basis_rgb(wavelengths);
    let max = rgb.max();
    debug!("good: {} samples, response maximum {max}", rgb.len());

    if max > 0.0 {
        rgb.scale_columns(intensities, max);
    } else if !rgb.is_empty() {
        warn!("good: all responses are zero, skipping normalization");
    }
    rgb
}
