use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Outcome;

// ---------------------------------------------------------------------------
// Correlation heatmap colormap
// ---------------------------------------------------------------------------

/// Map a correlation coefficient in [-1, 1] to a diverging colour:
/// saturated blue at -1, near-white at 0, saturated red at +1.
pub fn correlation_color(r: f64) -> Color32 {
    let r = r.clamp(-1.0, 1.0) as f32;
    let hue = if r < 0.0 { 220.0 } else { 4.0 };
    let strength = r.abs();
    let hsl = Hsl::new(hue, 0.7 * strength, 0.95 - 0.4 * strength);
    to_color32(hsl)
}

/// Readable text colour on top of a correlation cell.
pub fn correlation_text_color(r: f64) -> Color32 {
    if r.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::from_gray(40)
    }
}

// ---------------------------------------------------------------------------
// Chart accents
// ---------------------------------------------------------------------------

/// Accent colour for an outcome class in the charts.
pub fn outcome_color(outcome: Outcome) -> Color32 {
    let hsl = match outcome {
        Outcome::Negative => Hsl::new(165.0, 0.6, 0.45),
        Outcome::Positive => Hsl::new(4.0, 0.7, 0.55),
    };
    to_color32(hsl)
}

/// Accent colour for the feature histogram bars.
pub fn histogram_color() -> Color32 {
    to_color32(Hsl::new(210.0, 0.75, 0.55))
}

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colormap_endpoints_diverge() {
        let negative = correlation_color(-1.0);
        let positive = correlation_color(1.0);
        let neutral = correlation_color(0.0);

        // Strong negative is blue-dominant, strong positive red-dominant.
        assert!(negative.b() > negative.r());
        assert!(positive.r() > positive.b());
        // Near zero is near-white.
        assert!(neutral.r() > 220 && neutral.g() > 220 && neutral.b() > 220);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(correlation_color(5.0), correlation_color(1.0));
        assert_eq!(correlation_color(-5.0), correlation_color(-1.0));
    }

    #[test]
    fn outcome_classes_get_distinct_accents() {
        assert_ne!(
            outcome_color(Outcome::Negative),
            outcome_color(Outcome::Positive)
        );
    }
}
