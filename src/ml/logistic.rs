use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::model::{FeatureRecord, Outcome, FEATURE_COUNT};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Training input failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MlError {
    #[error("cannot fit with zero samples")]
    EmptyTrainingSet,

    #[error("records ({records}) and outcomes ({outcomes}) must have the same length")]
    LengthMismatch { records: usize, outcomes: usize },
}

// ---------------------------------------------------------------------------
// Logistic regression
// ---------------------------------------------------------------------------

/// Binary logistic regression over the eight raw feature values.
///
/// Trained with batch gradient descent on binary cross-entropy. Parameters
/// start at zero and no randomness is involved, so fitting the same data
/// twice yields bit-identical coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    learning_rate: f64,
    max_iter: usize,
    tol: f64,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 0.0,
            learning_rate: 0.01,
            max_iter: 1000,
            tol: 1e-4,
        }
    }

    /// Sets the gradient-descent step size.
    #[must_use]
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance on the gradient components.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Rebuild a fitted classifier from persisted parameters.
    pub fn from_parameters(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            ..Self::new()
        }
    }

    /// σ(z) = 1 / (1 + e^(-z))
    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }

    /// Probability of a positive outcome for one record.
    pub fn predict_proba(&self, record: &FeatureRecord) -> f64 {
        let values = record.values();
        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(values.iter())
                .map(|(c, v)| c * v)
                .sum::<f64>();
        Self::sigmoid(z)
    }

    /// Class prediction at the 0.5 probability threshold.
    pub fn predict(&self, record: &FeatureRecord) -> Outcome {
        if self.predict_proba(record) >= 0.5 {
            Outcome::Positive
        } else {
            Outcome::Negative
        }
    }

    /// Fraction of correct predictions over the given rows.
    pub fn accuracy(&self, records: &[FeatureRecord], outcomes: &[Outcome]) -> f64 {
        if records.is_empty() {
            return 0.0;
        }
        let correct = records
            .iter()
            .zip(outcomes)
            .filter(|(r, o)| self.predict(r) == **o)
            .count();
        correct as f64 / records.len() as f64
    }

    /// Fit on the given rows with batch gradient descent.
    pub fn fit(&mut self, records: &[FeatureRecord], outcomes: &[Outcome]) -> Result<(), MlError> {
        if records.len() != outcomes.len() {
            return Err(MlError::LengthMismatch {
                records: records.len(),
                outcomes: outcomes.len(),
            });
        }
        if records.is_empty() {
            return Err(MlError::EmptyTrainingSet);
        }

        self.coefficients = vec![0.0; FEATURE_COUNT];
        self.intercept = 0.0;

        let n = records.len() as f64;
        for _ in 0..self.max_iter {
            let mut coef_grad = [0.0; FEATURE_COUNT];
            let mut intercept_grad = 0.0;

            for (record, outcome) in records.iter().zip(outcomes) {
                let error = self.predict_proba(record) - outcome.as_f64();
                intercept_grad += error;
                for (grad, v) in coef_grad.iter_mut().zip(record.values()) {
                    *grad += error * v;
                }
            }

            intercept_grad /= n;
            for grad in &mut coef_grad {
                *grad /= n;
            }

            self.intercept -= self.learning_rate * intercept_grad;
            for (coef, grad) in self.coefficients.iter_mut().zip(coef_grad) {
                *coef -= self.learning_rate * grad;
            }

            if intercept_grad.abs() < self.tol && coef_grad.iter().all(|g| g.abs() < self.tol) {
                break;
            }
        }

        Ok(())
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records separable on the glucose field alone, scaled to small
    /// values so plain gradient descent converges quickly.
    fn separable_data() -> (Vec<FeatureRecord>, Vec<Outcome>) {
        let mut records = Vec::new();
        let mut outcomes = Vec::new();
        for i in 0..10 {
            let low = 0.1 + i as f64 * 0.02;
            let high = 0.8 + i as f64 * 0.02;
            records.push(FeatureRecord::from_values([0.0, low, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
            outcomes.push(Outcome::Negative);
            records.push(FeatureRecord::from_values([0.0, high, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
            outcomes.push(Outcome::Positive);
        }
        (records, outcomes)
    }

    #[test]
    fn learns_separable_data() {
        let (records, outcomes) = separable_data();
        let mut model = LogisticRegression::new()
            .with_learning_rate(0.5)
            .with_max_iter(5000);
        model.fit(&records, &outcomes).expect("fit");

        assert_eq!(model.accuracy(&records, &outcomes), 1.0);
        // Glucose carries all the signal, so its weight dominates.
        assert!(model.coefficients()[1] > 0.0);
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let (records, outcomes) = separable_data();
        let mut model = LogisticRegression::new().with_max_iter(200);
        model.fit(&records, &outcomes).expect("fit");

        for record in &records {
            let p = model.predict_proba(record);
            assert!((0.0..=1.0).contains(&p), "p = {p}");
        }
    }

    #[test]
    fn fitting_twice_is_deterministic() {
        let (records, outcomes) = separable_data();
        let mut a = LogisticRegression::new().with_max_iter(500);
        let mut b = LogisticRegression::new().with_max_iter(500);
        a.fit(&records, &outcomes).expect("fit a");
        b.fit(&records, &outcomes).expect("fit b");

        assert_eq!(a.coefficients(), b.coefficients());
        assert_eq!(a.intercept(), b.intercept());
    }

    #[test]
    fn rejects_bad_inputs() {
        let mut model = LogisticRegression::new();
        assert_eq!(model.fit(&[], &[]), Err(MlError::EmptyTrainingSet));

        let record = FeatureRecord::from_values([0.0; 8]);
        assert_eq!(
            model.fit(&[record], &[]),
            Err(MlError::LengthMismatch {
                records: 1,
                outcomes: 0
            })
        );
    }

    #[test]
    fn restored_parameters_predict() {
        let (records, outcomes) = separable_data();
        let mut trained = LogisticRegression::new()
            .with_learning_rate(0.5)
            .with_max_iter(5000);
        trained.fit(&records, &outcomes).expect("fit");

        let restored = LogisticRegression::from_parameters(
            trained.coefficients().to_vec(),
            trained.intercept(),
        );
        for record in &records {
            assert_eq!(restored.predict(record), trained.predict(record));
        }
    }

    #[test]
    fn all_zero_record_gets_a_label() {
        let zero = FeatureRecord::from_values([0.0; 8]);
        let model = LogisticRegression::new();
        let label = model.predict(&zero);
        assert!(label == Outcome::Positive || label == Outcome::Negative);
        // Zero parameters put the all-zero record exactly on the boundary.
        assert_eq!(model.predict_proba(&zero), 0.5);
    }
}
