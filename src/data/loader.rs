use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, LargeStringArray, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{SpectralDataset, Spectrum};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a spectral dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – a wavelength column plus an `intensity` or `absorbance` column
/// * `.json`    – `{ "wavelength": [...], "intensity": [...] }` or an array of those
/// * `.parquet` – flat `wavelength` / `intensity` columns, optional `label`
pub fn load_file(path: &Path) -> Result<SpectralDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let label = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("spectrum")
        .to_string();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path, &label),
        "json" => load_json(path, &label),
        "csv" => load_csv(path, &label),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:  header row with column names, one sample per row.
///
/// The wavelength column is the first header containing `wavelength`
/// (e.g. `wavelength [nm]`). Intensity comes from an `intensity` column, or
/// from an `absorbance` column as `1 - absorbance`.
fn load_csv(path: &Path, label: &str) -> Result<SpectralDataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    let spectrum = read_csv(reader, label)?;
    Ok(SpectralDataset::from_spectra(vec![spectrum]))
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>, label: &str) -> Result<Spectrum> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let wl_idx = headers
        .iter()
        .position(|h| h.contains("wavelength"))
        .context("CSV missing wavelength column")?;

    let (value_idx, absorbance) = match headers.iter().position(|h| h.starts_with("intensity")) {
        Some(i) => (i, false),
        None => (
            headers
                .iter()
                .position(|h| h.starts_with("absorbance"))
                .context("CSV missing 'intensity' or 'absorbance' column")?,
            true,
        ),
    };

    let mut wavelengths = Vec::new();
    let mut values = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        wavelengths.push(parse_cell(record.get(wl_idx), row_no, "wavelength")?);
        values.push(parse_cell(record.get(value_idx), row_no, &headers[value_idx])?);
    }

    if absorbance {
        Spectrum::from_absorbance(wavelengths, &values, label)
    } else {
        Spectrum::new(wavelengths, values, label)
    }
}

fn parse_cell(cell: Option<&str>, row: usize, col: &str) -> Result<f64> {
    let tok = cell.unwrap_or("").trim();
    tok.parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{tok}' is not a number"))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct JsonSpectrum {
    wavelength: Vec<f64>,
    intensity: Vec<f64>,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Single(JsonSpectrum),
    Many(Vec<JsonSpectrum>),
}

/// Expected JSON schema, either a single object or an array of them:
///
/// ```json
/// {
///   "wavelength": [400.0, 401.0, ...],
///   "intensity":  [0.12,  0.14,  ...],
///   "label": "sodium"
/// }
/// ```
fn load_json(path: &Path, label: &str) -> Result<SpectralDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text, label)
}

fn parse_json(text: &str, label: &str) -> Result<SpectralDataset> {
    let doc: JsonDocument = serde_json::from_str(text).context("parsing JSON")?;
    let records = match doc {
        JsonDocument::Single(one) => vec![one],
        JsonDocument::Many(many) => many,
    };

    let n = records.len();
    let spectra = records
        .into_iter()
        .enumerate()
        .map(|(i, rec)| {
            let name = rec.label.unwrap_or_else(|| {
                if n == 1 {
                    label.to_string()
                } else {
                    format!("{label} #{i}")
                }
            });
            Spectrum::new(rec.wavelength, rec.intensity, name)
                .with_context(|| format!("Record {i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SpectralDataset::from_spectra(spectra))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing spectral data.
///
/// Expected schema:
/// - `wavelength`: Float64 or Float32
/// - `intensity`: Float64 or Float32
/// - `label` (optional): Utf8 / LargeUtf8 – rows sharing a label form one spectrum
///
/// Spectra keep the order in which their label first appears.
fn load_parquet(path: &Path, label: &str) -> Result<SpectralDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut spectra: Vec<Spectrum> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let wl_idx = schema
            .index_of("wavelength")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'wavelength' column"))?;
        let int_idx = schema
            .index_of("intensity")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'intensity' column"))?;
        let label_idx = schema.index_of("label").ok();

        let wavelengths = extract_f64(batch.column(wl_idx)).context("reading 'wavelength'")?;
        let intensities = extract_f64(batch.column(int_idx)).context("reading 'intensity'")?;

        for row in 0..batch.num_rows() {
            let name = match label_idx {
                Some(i) => extract_string(batch.column(i), row)?,
                None => label.to_string(),
            };

            let target = match spectra.iter().position(|s| s.label == name) {
                Some(i) => &mut spectra[i],
                None => {
                    spectra.push(Spectrum::new(Vec::new(), Vec::new(), name)?);
                    let last = spectra.len() - 1;
                    &mut spectra[last]
                }
            };
            target.wavelengths.push(wavelengths[row]);
            target.intensities.push(intensities[row]);
        }
    }

    Ok(SpectralDataset::from_spectra(spectra))
}

// -- Parquet / Arrow helpers --

/// Extract a numeric column as `Vec<f64>`; nulls become NaN.
fn extract_f64(col: &Arc<dyn Array>) -> Result<Vec<f64>> {
    if let Some(f64_arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(f64_arr.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    } else if let Some(f32_arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(f32_arr.iter().map(|v| v.unwrap_or(f32::NAN) as f64).collect())
    } else {
        bail!("Column type is {:?}, expected Float64 or Float32", col.data_type())
    }
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => {
            let s = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(s.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let s: &LargeStringArray = col.as_string::<i64>();
            Ok(s.value(row).to_string())
        }
        other => bail!("Expected string 'label' column, got {other:?}"),
    }
}
