use strum::IntoEnumIterator;

use spectroscope::config::RenderOptions;
use spectroscope::data::model::{SpectralDataset, Spectrum};
use spectroscope::spectrum::{ColorScheme, SpectralImage};

/// Range and sample count of the spectrum shown before any file is loaded.
pub const DEMO_RANGE: (f64, f64) = (380.0, 750.0);
pub const DEMO_SAMPLES: usize = 1000;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; the flat demo spectrum until a file is opened.
    pub dataset: SpectralDataset,

    /// Index of the spectrum being displayed.
    pub selected: usize,

    /// Scheme and gamma used for the strips.
    pub options: RenderOptions,

    /// Show one strip per scheme instead of only `options.colors`.
    pub compare_schemes: bool,

    /// Converted strips for the selected spectrum (cached).
    pub strips: Vec<(ColorScheme, SpectralImage)>,

    /// Bumped whenever `strips` is rebuilt.
    pub revision: u64,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            dataset: demo_dataset(),
            selected: 0,
            options: RenderOptions::default(),
            compare_schemes: true,
            strips: Vec::new(),
            revision: 0,
            status_message: None,
        };
        state.rebuild_strips();
        state
    }
}

fn demo_dataset() -> SpectralDataset {
    let (start, end) = DEMO_RANGE;
    SpectralDataset::from_spectra(vec![Spectrum::flat(start, end, DEMO_SAMPLES)])
}

impl AppState {
    /// Ingest a newly loaded dataset and show its first spectrum.
    pub fn set_dataset(&mut self, dataset: SpectralDataset) {
        if dataset.is_empty() {
            self.status_message = Some("File contains no spectra".to_string());
            return;
        }
        self.dataset = dataset;
        self.selected = 0;
        self.status_message = None;
        self.rebuild_strips();
    }

    /// Go back to the flat demo spectrum.
    pub fn reset(&mut self) {
        self.set_dataset(demo_dataset());
    }

    pub fn current(&self) -> Option<&Spectrum> {
        self.dataset.spectra.get(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.dataset.len() && index != self.selected {
            self.selected = index;
            self.rebuild_strips();
        }
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        if gamma != self.options.gamma {
            self.options.gamma = gamma;
            self.rebuild_strips();
        }
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        if scheme != self.options.colors {
            self.options.colors = scheme;
            self.rebuild_strips();
        }
    }

    pub fn set_compare(&mut self, compare: bool) {
        if compare != self.compare_schemes {
            self.compare_schemes = compare;
            self.rebuild_strips();
        }
    }

    /// Reconvert the selected spectrum with the current options.
    pub fn rebuild_strips(&mut self) {
        let schemes: Vec<ColorScheme> = if self.compare_schemes {
            ColorScheme::iter().collect()
        } else {
            vec![self.options.colors]
        };

        self.strips.clear();
        if let Some(sp) = self.dataset.spectra.get(self.selected) {
            for scheme in schemes {
                let options = RenderOptions {
                    colors: scheme,
                    ..self.options.clone()
                };
                match sp.to_image(&options) {
                    Ok(img) => self.strips.push((scheme, img)),
                    Err(e) => {
                        log::error!("Failed to convert '{}': {e}", sp.label);
                        self.status_message = Some(format!("Error: {e}"));
                    }
                }
            }
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_demo_strips_for_every_scheme() {
        let state = AppState::default();
        assert_eq!(state.strips.len(), 3);
        assert_eq!(state.current().unwrap().len(), DEMO_SAMPLES);
    }

    #[test]
    fn option_changes_rebuild() {
        let mut state = AppState::default();
        let rev = state.revision;
        state.set_compare(false);
        state.set_scheme(ColorScheme::Colorful);
        assert_eq!(state.strips.len(), 1);
        assert_eq!(state.strips[0].0, ColorScheme::Colorful);
        assert!(state.revision > rev);

        let rev = state.revision;
        state.set_gamma(state.options.gamma);
        assert_eq!(state.revision, rev);
    }

    #[test]
    fn empty_dataset_is_ignored() {
        let mut state = AppState::default();
        state.set_dataset(SpectralDataset::default());
        assert_eq!(state.dataset.len(), 1);
        assert!(state.status_message.is_some());
    }
}
