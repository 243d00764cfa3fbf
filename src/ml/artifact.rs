use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::model::{FEATURE_COLUMNS, FEATURE_COUNT};

// ---------------------------------------------------------------------------
// Artifact format
// ---------------------------------------------------------------------------

/// Format tag embedded in every artifact. Bump when the layout changes so
/// stale files are rejected instead of silently mispredicting.
pub const FORMAT_VERSION: u32 = 1;

/// Artifact load/store failures.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact io: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact malformed: {0}")]
    Malformed(String),

    #[error("artifact format version {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("artifact schema {found:?} does not match {expected:?}")]
    SchemaMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },
}

/// The serialized form of a trained classifier: parameters plus the
/// feature schema and format version it was trained against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    /// Feature column names in training order.
    pub schema: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Accuracy on the 20% holdout partition, recorded at training time.
    pub holdout_accuracy: f64,
}

impl ModelArtifact {
    /// Wrap fitted parameters with the current version and schema tags.
    pub fn new(coefficients: Vec<f64>, intercept: f64, holdout_accuracy: f64) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            schema: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            coefficients,
            intercept,
            holdout_accuracy,
        }
    }
}

// ---------------------------------------------------------------------------
// Store / load
// ---------------------------------------------------------------------------

/// Write the artifact as pretty JSON, creating the parent directory if
/// absent. I/O errors propagate to the caller.
pub fn save(path: &Path, artifact: &ModelArtifact) -> Result<(), ArtifactError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(artifact)
        .map_err(|e| ArtifactError::Malformed(format!("serialization failed: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

/// Read and validate an artifact. Fails fast on a version or schema tag
/// that does not match this build, and on a coefficient count that does
/// not fit the eight-feature schema.
pub fn load(path: &Path) -> Result<ModelArtifact, ArtifactError> {
    let content = fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&content)
        .map_err(|e| ArtifactError::Malformed(format!("deserialization failed: {e}")))?;

    if artifact.format_version != FORMAT_VERSION {
        return Err(ArtifactError::VersionMismatch {
            found: artifact.format_version,
            expected: FORMAT_VERSION,
        });
    }

    let expected: Vec<String> = FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect();
    if artifact.schema != expected {
        return Err(ArtifactError::SchemaMismatch {
            found: artifact.schema,
            expected,
        });
    }

    if artifact.coefficients.len() != FEATURE_COUNT {
        return Err(ArtifactError::Malformed(format!(
            "expected {FEATURE_COUNT} coefficients, found {}",
            artifact.coefficients.len()
        )));
    }

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_artifact() -> ModelArtifact {
        ModelArtifact::new(vec![0.1, -0.2, 0.3, 0.0, 0.05, 0.4, 1.2, 0.02], -0.7, 0.78)
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model").join("diabetes_logistic.json");

        let artifact = sample_artifact();
        save(&path, &artifact).expect("save");
        assert!(path.exists(), "save creates the parent directory");

        let loaded = load(&path).expect("load");
        assert_eq!(loaded, artifact);
    }

    #[test]
    fn version_mismatch_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.json");

        let mut artifact = sample_artifact();
        artifact.format_version = FORMAT_VERSION + 1;
        let json = serde_json::to_string(&artifact).expect("json");
        std::fs::write(&path, json).expect("write");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::VersionMismatch { .. }));
    }

    #[test]
    fn schema_mismatch_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.json");

        let mut artifact = sample_artifact();
        artifact.schema.swap(0, 1);
        let json = serde_json::to_string(&artifact).expect("json");
        std::fs::write(&path, json).expect("write");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::SchemaMismatch { .. }));
    }

    #[test]
    fn wrong_coefficient_count_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.json");

        let mut artifact = sample_artifact();
        artifact.coefficients.pop();
        let json = serde_json::to_string(&artifact).expect("json");
        std::fs::write(&path, json).expect("write");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed(_)));
    }

    #[test]
    fn unparseable_file_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.json");
        std::fs::write(&path, "not json").expect("write");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed(_)));
    }
}
