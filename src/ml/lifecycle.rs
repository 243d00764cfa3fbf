use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::artifact::{self, ModelArtifact};
use super::logistic::LogisticRegression;
use super::split::{train_test_split, SPLIT_SEED, TEST_FRACTION};
use crate::data::model::{DiabetesDataset, FeatureRecord, Outcome};

// ---------------------------------------------------------------------------
// TrainedModel – a ready-to-use classifier
// ---------------------------------------------------------------------------

/// A fitted classifier together with the holdout accuracy recorded when it
/// was trained. Immutable once created; reused for every prediction.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    classifier: LogisticRegression,
    holdout_accuracy: f64,
}

impl TrainedModel {
    pub fn predict(&self, record: &FeatureRecord) -> Outcome {
        self.classifier.predict(record)
    }

    pub fn predict_proba(&self, record: &FeatureRecord) -> f64 {
        self.classifier.predict_proba(record)
    }

    pub fn holdout_accuracy(&self) -> f64 {
        self.holdout_accuracy
    }
}

// ---------------------------------------------------------------------------
// ModelStore – load-or-train-and-persist
// ---------------------------------------------------------------------------

/// Manages the single classifier artifact at a fixed path.
///
/// The artifact's presence on disk is the sole signal deciding load vs
/// train: when the file exists it is validated and reused without touching
/// the dataset; otherwise a fresh classifier is trained, evaluated on the
/// deterministic 20% holdout, persisted, and returned.
pub struct ModelStore {
    artifact_path: PathBuf,
}

impl ModelStore {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
        }
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Return a ready classifier, training one first if no artifact exists.
    ///
    /// `dataset` is only invoked on the training path, so a cached dataset
    /// upstream is reused and a pure reload never re-reads the data file.
    pub fn load_or_train<'a, F>(&self, dataset: F) -> Result<TrainedModel>
    where
        F: FnOnce() -> Result<&'a DiabetesDataset>,
    {
        if self.artifact_path.exists() {
            let artifact = artifact::load(&self.artifact_path)
                .with_context(|| format!("loading {}", self.artifact_path.display()))?;
            log::info!(
                "reloaded classifier from {} (holdout accuracy {:.4})",
                self.artifact_path.display(),
                artifact.holdout_accuracy
            );
            return Ok(TrainedModel {
                classifier: LogisticRegression::from_parameters(
                    artifact.coefficients,
                    artifact.intercept,
                ),
                holdout_accuracy: artifact.holdout_accuracy,
            });
        }

        let dataset = dataset().context("obtaining dataset for training")?;
        let trained = train(dataset)?;

        let stored = ModelArtifact::new(
            trained.classifier.coefficients().to_vec(),
            trained.classifier.intercept(),
            trained.holdout_accuracy,
        );
        artifact::save(&self.artifact_path, &stored)
            .with_context(|| format!("persisting {}", self.artifact_path.display()))?;

        Ok(trained)
    }
}

/// Split 80/20 with the fixed seed, fit on the training partition, and
/// evaluate on the holdout.
fn train(dataset: &DiabetesDataset) -> Result<TrainedModel> {
    let split = train_test_split(dataset.len(), TEST_FRACTION, SPLIT_SEED);

    let gather = |indices: &[usize]| -> (Vec<FeatureRecord>, Vec<Outcome>) {
        (
            indices.iter().map(|&i| dataset.records[i]).collect(),
            indices.iter().map(|&i| dataset.outcomes[i]).collect(),
        )
    };
    let (train_x, train_y) = gather(&split.train);
    let (test_x, test_y) = gather(&split.test);

    // Small step size: the features are raw (unstandardized) counts and
    // concentrations spanning a few orders of magnitude.
    let mut classifier = LogisticRegression::new()
        .with_learning_rate(1e-5)
        .with_max_iter(1000);
    classifier.fit(&train_x, &train_y).context("fitting classifier")?;

    let holdout_accuracy = classifier.accuracy(&test_x, &test_y);
    log::info!(
        "trained classifier on {} rows, holdout accuracy {holdout_accuracy:.4}",
        train_x.len()
    );

    Ok(TrainedModel {
        classifier,
        holdout_accuracy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synthetic::synthetic_dataset;

    #[test]
    fn training_reports_holdout_accuracy_in_unit_interval() {
        let dataset = synthetic_dataset(200, 5);
        let trained = train(&dataset).expect("train");
        let acc = trained.holdout_accuracy();
        assert!((0.0..=1.0).contains(&acc), "accuracy {acc}");
    }

    #[test]
    fn store_remembers_its_path() {
        let store = ModelStore::new("model/diabetes_logistic.json");
        assert_eq!(
            store.artifact_path(),
            Path::new("model/diabetes_logistic.json")
        );
    }
}
