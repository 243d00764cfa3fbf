use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use crate::data::loader::{self, DataError};
use crate::data::model::{DiabetesDataset, FeatureRecord, Outcome};
use crate::data::stats::{self, ColumnSummary, CorrelationMatrix};
use crate::ml::lifecycle::{ModelStore, TrainedModel};

// ---------------------------------------------------------------------------
// Fixed paths
// ---------------------------------------------------------------------------

/// Relative path of the dataset file.
pub const DATASET_PATH: &str = "data/diabetes.csv";

/// Relative path of the persisted classifier artifact.
pub const ARTIFACT_PATH: &str = "model/diabetes_logistic.json";

// ---------------------------------------------------------------------------
// Prediction boundary types
// ---------------------------------------------------------------------------

/// A successful prediction: the label plus the model's probability of a
/// positive outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub outcome: Outcome,
    pub probability: f64,
}

/// The one recoverable failure in the system: a prediction request that
/// could not be served. Rendered inline; the session stays usable.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("classifier unavailable: {0}")]
    ModelUnavailable(String),
}

/// Dataset plus its cached statistics, as the dataset view consumes them.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub summaries: Vec<ColumnSummary>,
    pub correlations: CorrelationMatrix,
}

// ---------------------------------------------------------------------------
// AppContext – explicitly constructed caches, injected into the views
// ---------------------------------------------------------------------------

/// Holds the process-lifetime caches (dataset, statistics, classifier) and
/// the fixed file paths. Built once at startup and passed to whichever view
/// needs it; `&mut` access serializes first-call population, so there is no
/// hidden global state and no cache race.
pub struct AppContext {
    dataset_path: PathBuf,
    store: ModelStore,
    dataset: Option<DiabetesDataset>,
    stats: Option<DatasetStats>,
    model: Option<TrainedModel>,
}

impl AppContext {
    pub fn new(dataset_path: impl Into<PathBuf>, artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            store: ModelStore::new(artifact_path),
            dataset: None,
            stats: None,
            model: None,
        }
    }

    /// Context with the fixed relative paths the app runs against.
    pub fn with_default_paths() -> Self {
        Self::new(DATASET_PATH, ARTIFACT_PATH)
    }

    /// Static copy for the Home view.
    pub fn overview_text(&self) -> &'static str {
        OVERVIEW_TEXT
    }

    /// The dataset, loaded from disk on the first call and cached for the
    /// process lifetime afterwards.
    pub fn dataset(&mut self) -> Result<&DiabetesDataset, DataError> {
        cached_dataset(&mut self.dataset, &self.dataset_path)
    }

    /// Dataset plus descriptive statistics; both cached after first use.
    pub fn dataset_and_stats(&mut self) -> Result<(&DiabetesDataset, &DatasetStats), DataError> {
        let dataset = cached_dataset(&mut self.dataset, &self.dataset_path)?;
        let stats = match self.stats.take() {
            Some(stats) => stats,
            None => DatasetStats {
                summaries: stats::describe(dataset),
                correlations: stats::correlation_matrix(dataset),
            },
        };
        Ok((dataset, self.stats.insert(stats)))
    }

    /// The classifier, loaded or trained on the first call. Training (and
    /// therefore the dataset load) only happens when no artifact exists.
    pub fn model(&mut self) -> Result<&TrainedModel> {
        let model = match self.model.take() {
            Some(model) => model,
            None => {
                let cache = &mut self.dataset;
                let path = self.dataset_path.as_path();
                self.store
                    .load_or_train(|| Ok(cached_dataset(cache, path)?))?
            }
        };
        Ok(self.model.insert(model))
    }

    /// Serve one prediction. Every failure on this path is captured in
    /// [`PredictError`] instead of propagating.
    pub fn submit_prediction(&mut self, record: &FeatureRecord) -> Result<Prediction, PredictError> {
        let model = self
            .model()
            .map_err(|e| PredictError::ModelUnavailable(format!("{e:#}")))?;
        Ok(Prediction {
            outcome: model.predict(record),
            probability: model.predict_proba(record),
        })
    }

    /// Peek at the cached dataset without triggering a load.
    pub fn dataset_cached(&self) -> Option<&DiabetesDataset> {
        self.dataset.as_ref()
    }

    /// Peek at the cached classifier without triggering load-or-train.
    pub fn model_cached(&self) -> Option<&TrainedModel> {
        self.model.as_ref()
    }
}

/// Populate the cache on first use, then hand out the cached value.
fn cached_dataset<'a>(
    cache: &'a mut Option<DiabetesDataset>,
    path: &Path,
) -> Result<&'a DiabetesDataset, DataError> {
    let dataset = match cache.take() {
        Some(dataset) => dataset,
        None => {
            let dataset = loader::load_dataset(path)?;
            log::info!("loaded dataset: {} rows from {}", dataset.len(), path.display());
            dataset
        }
    };
    Ok(cache.insert(dataset))
}

const OVERVIEW_TEXT: &str = "\
This application helps you explore the well-known diabetes screening \
dataset and estimate diabetes risk from personal health measurements. A \
logistic regression classifier processes eight values (pregnancies, \
glucose, blood pressure, skin-fold thickness, insulin, BMI, pedigree \
score, and age) and predicts whether the profile is more consistent \
with a positive or a negative diagnosis.

Use the menu on the left: browse the dataset and its descriptive \
statistics, inspect the charts, or enter your own values under Predict. \
The prediction is a statistical estimate, not a medical diagnosis.";
