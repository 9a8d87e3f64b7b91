use eframe::egui;
use firms_finder::AppConfig;

use crate::state::AppState;
use crate::ui::{help, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FirmsFinderApp {
    pub state: AppState,
}

impl FirmsFinderApp {
    /// Build the app and load the configured data file straight away.
    pub fn new(config: AppConfig) -> Self {
        let mut state = AppState::new(config);
        state.reload();
        Self { state }
    }
}

impl eframe::App for FirmsFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: disclaimer ----
        egui::TopBottomPanel::bottom("disclaimer")
            .resizable(false)
            .show(ctx, |ui| {
                help::disclaimer(ui);
            });

        // ---- Left side panel: search options ----
        egui::SidePanel::left("search_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::search_panel(ui, &mut self.state);
            });

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::results(ui, &mut self.state);
        });

        help::guide_window(ctx, &mut self.state.show_help);
    }
}
