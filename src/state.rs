use crate::context::{AppContext, Prediction};
use crate::data::model::FeatureRecord;

// ---------------------------------------------------------------------------
// Menu – the four mutually exclusive views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Home,
    Dataset,
    Charts,
    Predict,
}

impl Menu {
    pub const ALL: [Menu; 4] = [Menu::Home, Menu::Dataset, Menu::Charts, Menu::Predict];

    pub fn title(self) -> &'static str {
        match self {
            Menu::Home => "Home",
            Menu::Dataset => "Dataset",
            Menu::Charts => "Charts",
            Menu::Predict => "Predict",
        }
    }
}

// ---------------------------------------------------------------------------
// Prediction form
// ---------------------------------------------------------------------------

/// The eight input widgets' values. Defaults match the canonical example
/// profile the prediction form has always opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub pedigree: f64,
    pub age: f64,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            pregnancies: 4.0,
            glucose: 85.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 79.0,
            bmi: 25.0,
            pedigree: 0.5,
            age: 33.0,
        }
    }
}

impl PredictionForm {
    /// Snapshot the widget values as a feature record.
    pub fn record(&self) -> FeatureRecord {
        FeatureRecord {
            pregnancies: self.pregnancies,
            glucose: self.glucose,
            blood_pressure: self.blood_pressure,
            skin_thickness: self.skin_thickness,
            insulin: self.insulin,
            bmi: self.bmi,
            pedigree: self.pedigree,
            age: self.age,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Caches and fixed paths, injected into whichever view needs them.
    pub ctx: AppContext,

    /// Active view.
    pub menu: Menu,

    /// Prediction input widgets.
    pub form: PredictionForm,

    /// Result of the last prediction request, if any.
    pub last_prediction: Option<Prediction>,

    /// Inline error from the last prediction request, if it failed.
    pub prediction_error: Option<String>,

    /// Which feature column the histogram plots.
    pub histogram_column: usize,

    /// Fatal-path error shown on the status line.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_context(AppContext::with_default_paths())
    }
}

impl AppState {
    pub fn with_context(ctx: AppContext) -> Self {
        Self {
            ctx,
            menu: Menu::Home,
            form: PredictionForm::default(),
            last_prediction: None,
            prediction_error: None,
            // Glucose, the classic first look at this dataset.
            histogram_column: 1,
            status_message: None,
        }
    }

    /// Record a fatal-path failure for the status line. Logged once per
    /// distinct message; views run every frame.
    pub fn report_error(&mut self, context: &str, message: String) {
        if self.status_message.as_deref() != Some(message.as_str()) {
            log::error!("{context}: {message}");
            self.status_message = Some(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_match_the_example_profile() {
        let record = PredictionForm::default().record();
        assert_eq!(
            record.values(),
            [4.0, 85.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0]
        );
    }

    #[test]
    fn menu_lists_all_four_views() {
        assert_eq!(Menu::ALL.len(), 4);
        assert_eq!(Menu::Home.title(), "Home");
        assert_eq!(Menu::Predict.title(), "Predict");
    }
}
