use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::model::Outcome;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Predict view – input form and prediction result
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Diabetes Prediction");
    ui.label("Enter your health measurements below to estimate diabetes risk.");
    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .id_salt("predict_view")
        .show(ui, |ui: &mut Ui| {
            input_form(ui, state);

            ui.add_space(8.0);
            if ui.button("Predict").clicked() {
                submit(state);
            }

            ui.add_space(8.0);
            if let Some(prediction) = state.last_prediction {
                result_panel(ui, prediction.outcome, prediction.probability);
            }
            if let Some(err) = &state.prediction_error {
                ui.colored_label(Color32::RED, format!("Prediction failed: {err}"));
            }
        });
}

fn input_form(ui: &mut Ui, state: &mut AppState) {
    let form = &mut state.form;

    egui::Grid::new("prediction_form")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Pregnancies");
            ui.add(int_input(&mut form.pregnancies, 20.0));
            ui.end_row();

            ui.label("Glucose level (mg/dL)");
            ui.add(int_input(&mut form.glucose, 200.0));
            ui.end_row();

            ui.label("Blood pressure (mm Hg)");
            ui.add(int_input(&mut form.blood_pressure, 150.0));
            ui.end_row();

            ui.label("Skin thickness (mm)");
            ui.add(int_input(&mut form.skin_thickness, 100.0));
            ui.end_row();

            ui.label("Insulin (IU/mL)");
            ui.add(int_input(&mut form.insulin, 900.0));
            ui.end_row();

            ui.label("BMI");
            ui.add(
                DragValue::new(&mut form.bmi)
                    .range(0.0..=70.0)
                    .speed(0.1)
                    .fixed_decimals(1),
            );
            ui.end_row();

            ui.label("Diabetes pedigree function");
            ui.add(
                DragValue::new(&mut form.pedigree)
                    .range(0.0..=3.0)
                    .speed(0.01)
                    .fixed_decimals(3),
            );
            ui.end_row();

            ui.label("Age (years)");
            ui.add(int_input(&mut form.age, 120.0));
            ui.end_row();
        });
}

/// Widget for the whole-number fields.
fn int_input(value: &mut f64, max: f64) -> DragValue<'_> {
    DragValue::new(value)
        .range(0.0..=max)
        .speed(1.0)
        .fixed_decimals(0)
}

fn submit(state: &mut AppState) {
    let record = state.form.record();
    match state.ctx.submit_prediction(&record) {
        Ok(prediction) => {
            state.last_prediction = Some(prediction);
            state.prediction_error = None;
        }
        Err(e) => {
            let message = e.to_string();
            log::error!("prediction failed: {message}");
            state.prediction_error = Some(message);
            state.last_prediction = None;
        }
    }
}

fn result_panel(ui: &mut Ui, outcome: Outcome, probability: f64) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Result:");
        ui.label(
            RichText::new(format!("{} for diabetes", outcome.label()))
                .strong()
                .color(color::outcome_color(outcome)),
        );
        ui.label(format!("(estimated probability {:.1}%)", probability * 100.0));
    });

    ui.add_space(4.0);
    ui.strong("Conclusion");
    ui.label("• Positive: take prevention seriously and consult a doctor promptly.");
    ui.label(
        "• Negative: stay alert, keep a healthy lifestyle, and get routine check-ups \
         if risk factors are present.",
    );
}
