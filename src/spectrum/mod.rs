//! Spectrum → RGB conversion core.
//!
//! Architecture:
//! ```text
//!  wavelengths + intensities
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ ColorScheme │  good / scientific / colorful → raw 3×N matrix
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │    gamma    │  element-wise power law
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ SpectralImage │  (1, N, 3), interleaved
//!   └───────────────┘
//! ```

pub mod colorful;
pub mod error;
pub mod gaussian;
pub mod good;
pub mod image;
pub mod linalg;
pub mod raw;
pub mod scientific;

use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

pub use error::ConversionError;
pub use self::image::SpectralImage;
pub use raw::ChannelMatrix;

/// Gamma applied when the caller does not pick one.
pub const DEFAULT_GAMMA: f64 = 0.6;

// ---------------------------------------------------------------------------
// ColorScheme – which wavelength → colour model to use
// ---------------------------------------------------------------------------

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorScheme {
    /// Hand-fitted Gaussian response curves.
    #[default]
    Good,
    /// CIE 1931 matching functions, grey-shifted to stay in gamut.
    Scientific,
    /// Piecewise-linear hue bands.
    Colorful,
}

impl ColorScheme {
    /// Raw per-wavelength colour matrix before gamma correction.
    pub fn raw_rgb(
        self,
        wavelengths: &[f64],
        intensities: &[f64],
    ) -> Result<ChannelMatrix, ConversionError> {
        match self {
            ColorScheme::Good => Ok(good::raw_rgb(wavelengths, intensities)),
            ColorScheme::Scientific => scientific::raw_rgb(wavelengths, intensities),
            ColorScheme::Colorful => Ok(colorful::raw_rgb(wavelengths, intensities)),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(ColorScheme::Good),
            "scientific" => Ok(ColorScheme::Scientific),
            "colorful" => Ok(ColorScheme::Colorful),
            other => Err(ConversionError::UnknownColorScheme {
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Render a spectrum as a `(1, N, 3)` image of spectroscope lines.
///
/// `colors` must be one of `"good"`, `"scientific"` or `"colorful"`.
pub fn spec2lines(
    wavelengths: &[f64],
    intensities: &[f64],
    colors: &str,
    gamma: f64,
) -> Result<SpectralImage, ConversionError> {
    let scheme = colors.parse::<ColorScheme>()?;
    convert(wavelengths, intensities, scheme, gamma)
}

/// Typed variant of [`spec2lines`].
pub fn convert(
    wavelengths: &[f64],
    intensities: &[f64],
    scheme: ColorScheme,
    gamma: f64,
) -> Result<SpectralImage, ConversionError> {
    if wavelengths.len() != intensities.len() {
        return Err(ConversionError::LengthMismatch {
            wavelengths: wavelengths.len(),
            intensities: intensities.len(),
        });
    }
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(ConversionError::InvalidGamma(gamma));
    }

    debug!(
        "converting {} samples with {scheme} colors, gamma {gamma}",
        wavelengths.len()
    );
    let mut rgb = scheme.raw_rgb(wavelengths, intensities)?;
    apply_gamma(&mut rgb, gamma);
    Ok(SpectralImage::from_channels(&rgb))
}

/// Raise every entry to `gamma`.
///
/// Negative entries are clamped to zero first; none of the schemes produce
/// them for non-negative intensities.
pub fn apply_gamma(rgb: &mut ChannelMatrix, gamma: f64) {
    let mut clamped = 0usize;
    for v in rgb.values_mut() {
        if *v < 0.0 {
            clamped += 1;
            *v = 0.0;
        }
        *v = v.powf(gamma);
    }
    if clamped > 0 {
        warn!("clamped {clamped} negative values to zero before gamma correction");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn scheme_names_round_trip() {
        for scheme in ColorScheme::iter() {
            let name: &'static str = scheme.into();
            assert_eq!(name.parse::<ColorScheme>().unwrap(), scheme);
            assert_eq!(scheme.to_string(), name);
        }
        assert_eq!(ColorScheme::default(), ColorScheme::Good);
    }

    #[test]
    fn unknown_scheme_names_the_value_and_the_valid_set() {
        let err = "bogus".parse::<ColorScheme>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"bogus\""));
        assert!(msg.contains("\"good\", \"scientific\", \"colorful\""));
    }

    #[test]
    fn gamma_is_element_wise_power() {
        let mut rgb = ChannelMatrix::from_channels([vec![0.25], vec![1.0], vec![0.0]]);
        apply_gamma(&mut rgb, 0.5);
        assert_relative_eq!(rgb.column(0)[0], 0.5);
        assert_eq!(rgb.column(0)[1], 1.0);
        assert_eq!(rgb.column(0)[2], 0.0);
    }

    #[test]
    fn gamma_clamps_negative_values() {
        let mut rgb = ChannelMatrix::from_channels([vec![-0.1], vec![-0.0], vec![0.04]]);
        apply_gamma(&mut rgb, 0.6);
        assert_eq!(rgb.column(0)[0], 0.0);
        assert!(rgb.values().all(|v| !v.is_nan()));
    }

    #[test]
    fn rejects_bad_gamma_and_mismatched_lengths() {
        assert!(matches!(
            convert(&[500.0], &[1.0], ColorScheme::Good, 0.0),
            Err(ConversionError::InvalidGamma(_))
        ));
        assert!(matches!(
            convert(&[500.0], &[1.0], ColorScheme::Good, f64::NAN),
            Err(ConversionError::InvalidGamma(_))
        ));
        assert!(matches!(
            convert(&[500.0, 510.0], &[1.0], ColorScheme::Colorful, 1.0),
            Err(ConversionError::LengthMismatch {
                wavelengths: 2,
                intensities: 1
            })
        ));
    }
}
