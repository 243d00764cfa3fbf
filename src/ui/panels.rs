use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Menu};

// ---------------------------------------------------------------------------
// Left side panel – the four-way menu
// ---------------------------------------------------------------------------

/// Render the menu panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Menu");
    ui.separator();

    for menu in Menu::ALL {
        if ui
            .selectable_label(state.menu == menu, menu.title())
            .clicked()
        {
            state.menu = menu;
        }
    }

    ui.separator();
    ui.label(
        RichText::new("Logistic regression over the diabetes screening dataset.")
            .small()
            .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar: app title, cache state, last fatal error.
/// Only peeks at the caches; nothing here triggers a load.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Sugarscope").strong());
        ui.separator();

        if let Some(ds) = state.ctx.dataset_cached() {
            ui.label(format!("{} rows loaded", ds.len()));
            ui.separator();
        }

        if let Some(model) = state.ctx.model_cached() {
            ui.label(format!("holdout accuracy {:.4}", model.holdout_accuracy()));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
