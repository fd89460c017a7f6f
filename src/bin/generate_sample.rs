use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use spectroscope::data::model::linspace;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_spectrum(
    wavelengths: &[f64],
    lines: &[(f64, f64)],
    sigma: f64,
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    wavelengths
        .iter()
        .map(|&wl| {
            let signal: f64 = lines
                .iter()
                .map(|&(mu, amp)| gaussian(wl, mu, sigma, amp))
                .sum();
            (signal + rng.gauss(0.0, noise_level)).max(0.0)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let wavelengths = linspace(380.0, 750.0, 1851);

    // Emission lines: (centre nm, relative amplitude)
    let sources: [(&str, Vec<(f64, f64)>); 3] = [
        (
            "hydrogen",
            vec![(410.2, 0.15), (434.0, 0.3), (486.1, 0.6), (656.3, 1.0)],
        ),
        ("sodium", vec![(589.0, 1.0), (589.6, 0.5)]),
        (
            "mercury",
            vec![(404.7, 0.5), (435.8, 1.0), (546.1, 0.9), (577.0, 0.3), (579.1, 0.3)],
        ),
    ];

    let mut all_label: Vec<&str> = Vec::new();
    let mut all_wl: Vec<f64> = Vec::new();
    let mut all_int: Vec<f64> = Vec::new();

    for (name, lines) in &sources {
        let y = generate_spectrum(&wavelengths, lines, 0.6, 0.002, &mut rng);
        for (&wl, &int) in wavelengths.iter().zip(&y) {
            all_label.push(*name);
            all_wl.push(wl);
            all_int.push(int);
        }
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("label", DataType::Utf8, false),
        Field::new("wavelength", DataType::Float64, false),
        Field::new("intensity", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(all_label)),
            Arc::new(Float64Array::from(all_wl)),
            Arc::new(Float64Array::from(all_int)),
        ],
    )
    .context("building record batch")?;

    let output_path = "sample_spectra.parquet";
    let file = std::fs::File::create(output_path).context("creating output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;

    println!(
        "Wrote {} spectra ({} wavelengths each) to {output_path}",
        sources.len(),
        wavelengths.len()
    );
    Ok(())
}
