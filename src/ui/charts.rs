use eframe::egui::{self, Align2, FontId, Rect, RichText, ScrollArea, Sense, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color;
use crate::data::model::{DiabetesDataset, Outcome, COLUMN_COUNT, FEATURE_COLUMNS};
use crate::data::stats::CorrelationMatrix;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Charts view – histogram, outcome counts, correlation heatmap
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Visualisation");

    match state.ctx.dataset_and_stats() {
        Ok((dataset, stats)) => {
            let column = &mut state.histogram_column;

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .id_salt("charts_view")
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Feature distribution");
                    egui::ComboBox::from_id_salt("histogram_column")
                        .selected_text(FEATURE_COLUMNS[*column])
                        .show_ui(ui, |ui: &mut Ui| {
                            for (i, name) in FEATURE_COLUMNS.iter().enumerate() {
                                ui.selectable_value(column, i, *name);
                            }
                        });
                    feature_histogram(ui, dataset, *column);
                    ui.label(
                        RichText::new(
                            "Bars count rows per value range. A spike at zero marks the \
                             dataset's missing-value sentinel for that column.",
                        )
                        .small()
                        .weak(),
                    );

                    ui.add_space(12.0);
                    ui.strong("Outcome comparison (negative vs positive)");
                    outcome_chart(ui, dataset);

                    ui.add_space(12.0);
                    ui.strong("Feature correlation heatmap");
                    heatmap(ui, &stats.correlations);
                    ui.label(
                        RichText::new(
                            "Pearson correlation per column pair; red positive, blue negative.",
                        )
                        .small()
                        .weak(),
                    );
                });
        }
        Err(e) => {
            let message = e.to_string();
            state.report_error("charts view", message.clone());
            ui.colored_label(egui::Color32::RED, message);
        }
    }
}

// ---------------------------------------------------------------------------
// Feature histogram
// ---------------------------------------------------------------------------

const HISTOGRAM_BINS: usize = 25;

fn feature_histogram(ui: &mut Ui, dataset: &DiabetesDataset, column: usize) {
    let values = dataset.column(column);
    let bars = histogram_bars(&values, HISTOGRAM_BINS);

    Plot::new("feature_histogram")
        .height(240.0)
        .x_axis_label(FEATURE_COLUMNS[column])
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color::histogram_color()));
        });
}

/// Bin values into equal-width bars over their observed range.
fn histogram_bars(values: &[f64], bins: usize) -> Vec<Bar> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span <= f64::EPSILON {
        return vec![Bar::new(min, values.len() as f64).width(1.0)];
    }

    let width = span / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let bin = (((v - min) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let center = min + (i as f64 + 0.5) * width;
            Bar::new(center, count as f64).width(width * 0.95)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Outcome counts
// ---------------------------------------------------------------------------

fn outcome_chart(ui: &mut Ui, dataset: &DiabetesDataset) {
    let (negative, positive) = dataset.outcome_counts();

    Plot::new("outcome_counts")
        .height(200.0)
        .legend(Legend::default())
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(vec![Bar::new(0.0, negative as f64).width(0.6)])
                    .name(Outcome::Negative.label())
                    .color(color::outcome_color(Outcome::Negative)),
            );
            plot_ui.bar_chart(
                BarChart::new(vec![Bar::new(1.0, positive as f64).width(0.6)])
                    .name(Outcome::Positive.label())
                    .color(color::outcome_color(Outcome::Positive)),
            );
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// Abbreviated column names that fit the heatmap gutters.
const SHORT_LABELS: [&str; COLUMN_COUNT] = [
    "Preg", "Gluc", "BP", "Skin", "Insul", "BMI", "Pedi", "Age", "Outc",
];

const CELL: f32 = 46.0;
const GUTTER_LEFT: f32 = 46.0;
const GUTTER_TOP: f32 = 20.0;

fn heatmap(ui: &mut Ui, correlations: &CorrelationMatrix) {
    let n = COLUMN_COUNT as f32;
    let size = egui::vec2(GUTTER_LEFT + CELL * n, GUTTER_TOP + CELL * n);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;
    let label_color = ui.visuals().text_color();
    let font = FontId::proportional(10.0);

    for (i, short) in SHORT_LABELS.iter().enumerate() {
        painter.text(
            egui::pos2(
                origin.x + GUTTER_LEFT + (i as f32 + 0.5) * CELL,
                origin.y + GUTTER_TOP * 0.5,
            ),
            Align2::CENTER_CENTER,
            short,
            font.clone(),
            label_color,
        );
        painter.text(
            egui::pos2(
                origin.x + GUTTER_LEFT - 4.0,
                origin.y + GUTTER_TOP + (i as f32 + 0.5) * CELL,
            ),
            Align2::RIGHT_CENTER,
            short,
            font.clone(),
            label_color,
        );
    }

    for i in 0..COLUMN_COUNT {
        for j in 0..COLUMN_COUNT {
            let r = correlations.get(i, j);
            let rect = Rect::from_min_size(
                egui::pos2(
                    origin.x + GUTTER_LEFT + j as f32 * CELL,
                    origin.y + GUTTER_TOP + i as f32 * CELL,
                ),
                egui::vec2(CELL - 1.0, CELL - 1.0),
            );
            painter.rect_filled(rect, 2.0, color::correlation_color(r));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                format!("{r:.2}"),
                font.clone(),
                color::correlation_text_color(r),
            );
        }
    }
}
