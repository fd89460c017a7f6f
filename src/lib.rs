//! Render discretely sampled light spectra as spectroscope line images.
//!
//! ```
//! use spectroscope::spec2lines;
//!
//! let wavelengths = [380.0, 510.0, 645.0, 750.0];
//! let intensities = [1.0; 4];
//! let image = spec2lines(&wavelengths, &intensities, "colorful", 1.0).unwrap();
//! assert_eq!(image.shape(), [1, 4, 3]);
//! ```

pub mod config;
pub mod data;
pub mod render;
pub mod spectrum;

pub use config::RenderOptions;
pub use spectrum::{convert, spec2lines, ColorScheme, ConversionError, SpectralImage, DEFAULT_GAMMA};
