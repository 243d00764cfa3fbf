use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Schema – the nine dataset columns, in file and training order
// ---------------------------------------------------------------------------

/// The eight predictor columns, in the exact order the classifier is
/// trained on. Shared by the loader, the trainer, the artifact and the
/// prediction path so the schema is never restated positionally.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// The label column.
pub const OUTCOME_COLUMN: &str = "Outcome";

/// All nine columns as they appear in the CSV header.
pub const COLUMNS: [&str; 9] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
    "Outcome",
];

/// Number of predictor columns.
pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// Number of columns including the outcome.
pub const COLUMN_COUNT: usize = COLUMNS.len();

// ---------------------------------------------------------------------------
// FeatureRecord – one patient's eight measured values
// ---------------------------------------------------------------------------

/// One patient's measured health values. All fields are non-negative;
/// a literal zero doubles as the dataset's "missing" marker in several
/// columns (a quirk of the source data, not enforced here).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Number of pregnancies.
    pub pregnancies: f64,
    /// Plasma glucose concentration (mg/dL).
    pub glucose: f64,
    /// Diastolic blood pressure (mm Hg).
    pub blood_pressure: f64,
    /// Triceps skin-fold thickness (mm).
    pub skin_thickness: f64,
    /// Serum insulin (IU/mL).
    pub insulin: f64,
    /// Body-mass index.
    pub bmi: f64,
    /// Diabetes pedigree function score.
    pub pedigree: f64,
    /// Age in years.
    pub age: f64,
}

impl FeatureRecord {
    /// The field values in [`FEATURE_COLUMNS`] order.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pregnancies,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.pedigree,
            self.age,
        ]
    }

    /// Build a record from values in [`FEATURE_COLUMNS`] order.
    pub fn from_values(v: [f64; FEATURE_COUNT]) -> Self {
        Self {
            pregnancies: v[0],
            glucose: v[1],
            blood_pressure: v[2],
            skin_thickness: v[3],
            insulin: v[4],
            bmi: v[5],
            pedigree: v[6],
            age: v[7],
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome – the binary diagnosis label
// ---------------------------------------------------------------------------

/// Diagnostic outcome: 0 = not diagnosed with diabetes, 1 = diagnosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Negative,
    Positive,
}

impl Outcome {
    /// Parse the dataset's 0/1 encoding.
    pub fn from_label(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Outcome::Negative),
            1 => Some(Outcome::Positive),
            _ => None,
        }
    }

    /// The 0/1 encoding used in the dataset file and during training.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Negative => 0.0,
            Outcome::Positive => 1.0,
        }
    }

    /// Human-readable label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Negative => "Negative",
            Outcome::Positive => "Positive",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// DiabetesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset: feature records with their outcomes, in file order.
/// Loaded once and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DiabetesDataset {
    pub records: Vec<FeatureRecord>,
    pub outcomes: Vec<Outcome>,
}

impl DiabetesDataset {
    /// Pair up records and outcomes. Both vectors must have equal length.
    pub fn new(records: Vec<FeatureRecord>, outcomes: Vec<Outcome>) -> Self {
        debug_assert_eq!(records.len(), outcomes.len());
        Self { records, outcomes }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(rows, columns)` where columns is always 9.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), COLUMN_COUNT)
    }

    /// Cell value at `(row, col)` in [`COLUMNS`] order; column 8 is the
    /// outcome encoded as 0.0/1.0.
    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        if col < FEATURE_COUNT {
            self.records[row].values()[col]
        } else {
            self.outcomes[row].as_f64()
        }
    }

    /// All values of one column, in row order.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.len()).map(|row| self.value_at(row, col)).collect()
    }

    /// `(negative, positive)` row counts.
    pub fn outcome_counts(&self) -> (usize, usize) {
        let positive = self
            .outcomes
            .iter()
            .filter(|o| **o == Outcome::Positive)
            .count();
        (self.outcomes.len() - positive, positive)
    }
}
