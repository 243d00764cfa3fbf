use eframe::egui::{self, CollapsingHeader, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{DiabetesDataset, COLUMNS, COLUMN_COUNT};
use crate::data::stats::ColumnSummary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dataset view – table + descriptive statistics
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Diabetes Dataset");

    match state.ctx.dataset_and_stats() {
        Ok((dataset, stats)) => {
            let (rows, cols) = dataset.shape();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .id_salt("dataset_view")
                .show(ui, |ui: &mut Ui| {
                    ui.label(format!("Total: {rows} rows × {cols} columns."));
                    ui.add_space(4.0);

                    CollapsingHeader::new("Rows")
                        .default_open(true)
                        .show(ui, |ui: &mut Ui| data_table(ui, dataset));

                    ui.add_space(8.0);
                    ui.strong("Descriptive statistics");
                    ui.add_space(4.0);
                    stats_table(ui, &stats.summaries);

                    ui.add_space(8.0);
                    CollapsingHeader::new("What the columns mean")
                        .default_open(false)
                        .show(ui, column_notes);
                });
        }
        Err(e) => {
            let message = e.to_string();
            state.report_error("dataset view", message.clone());
            ui.colored_label(egui::Color32::RED, message);
        }
    }
}

// ---------------------------------------------------------------------------
// Row table
// ---------------------------------------------------------------------------

fn data_table(ui: &mut Ui, dataset: &DiabetesDataset) {
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 4.0;

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(56.0), COLUMN_COUNT)
        .max_scroll_height(320.0)
        .header(20.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, dataset.len(), |mut row| {
                let r = row.index();
                for col in 0..COLUMN_COUNT {
                    row.col(|ui| {
                        ui.label(format_cell(col, dataset.value_at(r, col)));
                    });
                }
            });
        });
}

/// Cell formatting per column: most values are integral, BMI carries one
/// decimal, the pedigree score three.
fn format_cell(col: usize, v: f64) -> String {
    match COLUMNS[col] {
        "BMI" => format!("{v:.1}"),
        "DiabetesPedigreeFunction" => format!("{v:.3}"),
        _ => format!("{v:.0}"),
    }
}

// ---------------------------------------------------------------------------
// describe() table
// ---------------------------------------------------------------------------

fn stats_table(ui: &mut Ui, summaries: &[ColumnSummary]) {
    egui::Grid::new("describe_grid")
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for head in ["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"] {
                ui.strong(head);
            }
            ui.end_row();

            for s in summaries {
                ui.label(s.column);
                ui.label(s.count.to_string());
                for v in [s.mean, s.std, s.min, s.q25, s.median, s.q75, s.max] {
                    ui.label(format!("{v:.2}"));
                }
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Column explanations
// ---------------------------------------------------------------------------

const COLUMN_NOTES: [(&str, &str); 9] = [
    ("Pregnancies", "Number of pregnancies the patient has had."),
    (
        "Glucose",
        "Plasma glucose concentration (mg/dL); high values are a key diabetes indicator. A literal 0 usually marks a missing measurement.",
    ),
    ("BloodPressure", "Diastolic blood pressure (mm Hg)."),
    (
        "SkinThickness",
        "Triceps skin-fold thickness (mm), a proxy for body fat.",
    ),
    (
        "Insulin",
        "Serum insulin (IU/mL), indicative of insulin sensitivity.",
    ),
    ("BMI", "Body-mass index computed from weight and height."),
    (
        "DiabetesPedigreeFunction",
        "Genetic risk score derived from family history.",
    ),
    ("Age", "Age in years."),
    ("Outcome", "Diagnosis: 0 = negative, 1 = positive."),
];

fn column_notes(ui: &mut Ui) {
    for (name, note) in COLUMN_NOTES {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.strong(name);
            ui.label(note);
        });
    }
}
