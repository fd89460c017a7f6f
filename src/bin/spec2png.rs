use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;

use spectroscope::data::loader::load_file;
use spectroscope::data::model::{SpectralDataset, Spectrum};
use spectroscope::render::{save_png, stack};
use spectroscope::{ColorScheme, RenderOptions};

/// Render a spectrum file as spectroscope line strips.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Spectrum file (.csv, .json, .parquet); a flat 380-750 nm spectrum if omitted
    #[clap(value_parser)]
    input: Option<PathBuf>,

    /// File name to write the image to
    #[clap(short, long, value_parser, default_value = "spectrum.png")]
    output: PathBuf,

    /// JSON file with render options
    #[clap(long, value_parser)]
    config: Option<PathBuf>,

    /// Color scheme: good, scientific or colorful
    #[clap(short, long, value_parser)]
    colors: Option<ColorScheme>,

    /// Stack one strip per color scheme
    #[clap(long)]
    all: bool,

    /// Gamma correction exponent
    #[clap(short, long, value_parser)]
    gamma: Option<f64>,

    /// Strip height in pixels
    #[clap(long, value_parser)]
    height: Option<u32>,

    /// Only render the spectrum with this label
    #[clap(long, value_parser)]
    label: Option<String>,
}

impl Args {
    fn options(&self) -> Result<RenderOptions> {
        let options = match &self.config {
            Some(path) => RenderOptions::from_json_file(path)?,
            None => RenderOptions::default(),
        };
        Ok(options.with_overrides(self.colors, self.gamma, self.height))
    }

    fn spectra(&self) -> Result<Vec<Spectrum>> {
        let dataset = match &self.input {
            Some(path) => load_file(path).with_context(|| format!("loading {}", path.display()))?,
            None => SpectralDataset::from_spectra(vec![Spectrum::flat(380.0, 750.0, 1000)]),
        };

        let spectra: Vec<Spectrum> = match &self.label {
            Some(label) => dataset
                .spectra
                .into_iter()
                .filter(|sp| &sp.label == label)
                .collect(),
            None => dataset.spectra,
        };
        if spectra.is_empty() {
            bail!("no spectra to render");
        }
        Ok(spectra)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = args.options()?;

    let schemes: Vec<ColorScheme> = if args.all {
        ColorScheme::iter().collect()
    } else {
        vec![options.colors]
    };

    let mut strips = Vec::new();
    for sp in args.spectra()? {
        for &scheme in &schemes {
            let opts = RenderOptions {
                colors: scheme,
                ..options.clone()
            };
            let img = sp
                .to_image(&opts)
                .with_context(|| format!("converting '{}' with {scheme} colors", sp.label))?;
            log::debug!("'{}' {scheme}: {} samples", sp.label, img.width());
            strips.push(img);
        }
    }

    save_png(&stack(&strips, options.strip_height), &args.output)
}
