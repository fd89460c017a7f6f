use anyhow::{bail, Result};

use crate::config::RenderOptions;
use crate::spectrum::{self, ConversionError, SpectralImage};

// ---------------------------------------------------------------------------
// Spectrum – one sampled spectrum
// ---------------------------------------------------------------------------

/// A single sampled spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Wavelength axis in nm.
    pub wavelengths: Vec<f64>,
    /// Intensity per wavelength – same length as `wavelengths`.
    pub intensities: Vec<f64>,
    /// Display name.
    pub label: String,
}

impl Spectrum {
    pub fn new(
        wavelengths: Vec<f64>,
        intensities: Vec<f64>,
        label: impl Into<String>,
    ) -> Result<Self> {
        let label = label.into();
        if wavelengths.len() != intensities.len() {
            bail!(
                "Spectrum '{label}': {} wavelengths but {} intensities",
                wavelengths.len(),
                intensities.len()
            );
        }
        Ok(Spectrum {
            wavelengths,
            intensities,
            label,
        })
    }

    /// Unit intensity at `n` evenly spaced wavelengths from `start` to `end`
    /// inclusive.
    pub fn flat(start: f64, end: f64, n: usize) -> Self {
        let wavelengths = linspace(start, end, n);
        let intensities = vec![1.0; wavelengths.len()];
        Spectrum {
            wavelengths,
            intensities,
            label: "flat".to_string(),
        }
    }

    /// Treat measured absorbance as `1 - absorbance` transmitted intensity.
    pub fn from_absorbance(
        wavelengths: Vec<f64>,
        absorbance: &[f64],
        label: impl Into<String>,
    ) -> Result<Self> {
        let intensities = absorbance.iter().map(|a| 1.0 - a).collect();
        Spectrum::new(wavelengths, intensities, label)
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// `(min, max)` wavelength, `None` when empty.
    pub fn wavelength_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let min = self.wavelengths.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.wavelengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    pub fn to_image(&self, options: &RenderOptions) -> Result<SpectralImage, ConversionError> {
        spectrum::convert(
            &self.wavelengths,
            &self.intensities,
            options.colors,
            options.gamma,
        )
    }
}

/// `n` evenly spaced values over `[start, end]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// SpectralDataset – everything loaded from one file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SpectralDataset {
    pub spectra: Vec<Spectrum>,
}

impl SpectralDataset {
    pub fn from_spectra(spectra: Vec<Spectrum>) -> Self {
        SpectralDataset { spectra }
    }

    /// Number of spectra.
    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.spectra.iter().map(|s| s.label.as_str()).collect()
    }
}
