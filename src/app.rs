use eframe::egui;

use crate::state::AppState;
use crate::ui::plot::StripTextures;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SpectroscopeApp {
    pub state: AppState,
    textures: StripTextures,
}

impl eframe::App for SpectroscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: settings ----
        egui::SidePanel::left("settings_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        self.textures.sync(ctx, &self.state);

        // ---- Central panel: strips + plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::central_view(ui, &self.state, &self.textures);
        });
    }
}
