use std::path::PathBuf;

use spectroscope::data::loader::load_file;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_absorbance_csv() {
    let path = temp_file(
        "spectroscope_absorbance.csv",
        "wavelength [nm],absorbance\n400,0.1\n450,0.5\n500,0.9\n",
    );
    let ds = load_file(&path).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.spectra[0].label, "spectroscope_absorbance");
    assert_eq!(ds.spectra[0].wavelengths, vec![400.0, 450.0, 500.0]);
    let expected = [0.9, 0.5, 0.1];
    for (got, want) in ds.spectra[0].intensities.iter().zip(expected) {
        approx::assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn loads_json_records() {
    let path = temp_file(
        "spectroscope_records.json",
        r#"[{"wavelength": [589.0, 589.6], "intensity": [1.0, 0.5], "label": "sodium"}]"#,
    );
    let ds = load_file(&path).unwrap();
    assert_eq!(ds.labels(), vec!["sodium"]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("spectroscope_does_not_exist.csv");
    assert!(load_file(&path).is_err());
}
