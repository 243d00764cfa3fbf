use eframe::egui;

use crate::state::{AppState, Menu};
use crate::ui::{charts, dataset, home, panels, predict};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SugarscopeApp {
    pub state: AppState,
}

impl Default for SugarscopeApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for SugarscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: menu ----
        egui::SidePanel::left("menu_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.menu {
            Menu::Home => home::show(ui, &self.state),
            Menu::Dataset => dataset::show(ui, &mut self.state),
            Menu::Charts => charts::show(ui, &mut self.state),
            Menu::Predict => predict::show(ui, &mut self.state),
        });
    }
}
