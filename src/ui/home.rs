use eframe::egui::{RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Home view – overview text
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Diabetes Prediction with Logistic Regression");
            ui.add_space(8.0);
            ui.label(RichText::new("Welcome to the diabetes risk dashboard!").strong());
            ui.add_space(4.0);
            ui.label(state.ctx.overview_text());
        });
}
