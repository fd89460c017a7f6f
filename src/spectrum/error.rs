use thiserror::Error;

use super::linalg::DegenerateMatrixError;

/// Failures surfaced by the spectrum-to-image conversion.
///
/// All variants except `DegenerateMatrix` are input contract violations,
/// detected before anything is computed. `DegenerateMatrix` is an internal
/// failure to factor the constant RGB to XYZ matrix.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(
        "spectrum color type \"{value}\" does not exist. \
         Valid values: {{\"good\", \"scientific\", \"colorful\"}}"
    )]
    UnknownColorScheme { value: String },

    #[error("{wavelengths} wavelengths but {intensities} intensities")]
    LengthMismatch {
        wavelengths: usize,
        intensities: usize,
    },

    #[error("gamma must be finite and positive, got {0}")]
    InvalidGamma(f64),

    #[error(transparent)]
    DegenerateMatrix(#[from] DegenerateMatrixError),
}
