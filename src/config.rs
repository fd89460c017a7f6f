use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::spectrum::{ColorScheme, DEFAULT_GAMMA};

/// How a spectrum is turned into a strip image.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub colors: ColorScheme,
    pub gamma: f64,
    /// Height in pixels of one strip when rasterized.
    pub strip_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colors: ColorScheme::default(),
            gamma: DEFAULT_GAMMA,
            strip_height: 64,
        }
    }
}

impl RenderOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing render options")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Replace the fields for which a value was given, keep the rest.
    pub fn with_overrides(
        mut self,
        colors: Option<ColorScheme>,
        gamma: Option<f64>,
        strip_height: Option<u32>,
    ) -> Self {
        if let Some(colors) = colors {
            self.colors = colors;
        }
        if let Some(gamma) = gamma {
            self.gamma = gamma;
        }
        if let Some(strip_height) = strip_height {
            self.strip_height = strip_height;
        }
        self
    }
}
