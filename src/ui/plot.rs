use eframe::egui::{self, Color32, ColorImage, Context, TextureHandle, TextureOptions, Ui};
use egui_plot::{Line, Plot, PlotPoints};
use spectroscope::render::to_rgb8;
use spectroscope::spectrum::ColorScheme;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Strip textures (cached per state revision)
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct StripTextures {
    revision: Option<u64>,
    handles: Vec<(ColorScheme, TextureHandle)>,
}

impl StripTextures {
    /// Re-upload the strips if the state rebuilt them since the last frame.
    pub fn sync(&mut self, ctx: &Context, state: &AppState) {
        if self.revision == Some(state.revision) {
            return;
        }
        self.handles = state
            .strips
            .iter()
            .filter(|(_, img)| img.width() > 0)
            .map(|(scheme, img)| {
                let bytes: Vec<u8> = img.pixels().iter().flat_map(|&p| to_rgb8(p)).collect();
                let image = ColorImage::from_rgb([img.width(), 1], &bytes);
                let handle = ctx.load_texture(format!("strip-{scheme}"), image, TextureOptions::NEAREST);
                (*scheme, handle)
            })
            .collect();
        self.revision = Some(state.revision);
    }
}

// ---------------------------------------------------------------------------
// Central panel: spectroscope strips above the intensity plot
// ---------------------------------------------------------------------------

pub fn central_view(ui: &mut Ui, state: &AppState, textures: &StripTextures) {
    let Some(sp) = state.current() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view spectra  (File → Open…)");
        });
        return;
    };

    if let Some((lo, hi)) = sp.wavelength_range() {
        ui.label(format!("{}  ({} samples, {lo:.1}–{hi:.1} nm)", sp.label, sp.len()));
    }

    for (scheme, handle) in &textures.handles {
        ui.strong(scheme.to_string());
        let size = egui::vec2(ui.available_width(), state.options.strip_height as f32);
        ui.add(
            egui::Image::from_texture(egui::load::SizedTexture::new(handle.id(), size))
                .fit_to_exact_size(size),
        );
        ui.add_space(4.0);
    }

    ui.separator();

    let points: PlotPoints = sp
        .wavelengths
        .iter()
        .zip(sp.intensities.iter())
        .map(|(&x, &y)| [x, y])
        .collect();

    Plot::new("intensity_plot")
        .x_axis_label("Wavelength [nm]")
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name(&sp.label)
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);
        });
}
