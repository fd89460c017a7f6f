use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use spectroscope::spectrum::ColorScheme;
use strum::IntoEnumIterator;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – conversion settings and spectrum list
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Colors");
    ui.separator();

    let mut compare = state.compare_schemes;
    if ui.checkbox(&mut compare, "Compare all schemes").changed() {
        state.set_compare(compare);
    }

    ui.add_enabled_ui(!state.compare_schemes, |ui: &mut Ui| {
        let current = state.options.colors;
        egui::ComboBox::from_id_salt("color_scheme")
            .selected_text(current.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for scheme in ColorScheme::iter() {
                    if ui
                        .selectable_label(current == scheme, scheme.to_string())
                        .clicked()
                    {
                        state.set_scheme(scheme);
                    }
                }
            });
    });

    let mut gamma = state.options.gamma;
    if ui
        .add(egui::Slider::new(&mut gamma, 0.1..=2.0).text("gamma"))
        .changed()
    {
        state.set_gamma(gamma);
    }

    ui.add_space(8.0);
    ui.heading("Spectra");
    ui.separator();

    let labels: Vec<String> = state
        .dataset
        .spectra
        .iter()
        .map(|sp| sp.label.clone())
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, label) in labels.iter().enumerate() {
                if ui.selectable_label(state.selected == i, label).clicked() {
                    state.select(i);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Flat spectrum").clicked() {
                state.reset();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} spectra loaded", state.dataset.len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open spectral data")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match spectroscope::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} spectra from {}: {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.labels()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
