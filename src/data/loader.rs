use std::path::Path;

use thiserror::Error;

use super::model::{DiabetesDataset, FeatureRecord, Outcome, COLUMNS, FEATURE_COUNT};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Loading failures. All of them are fatal for the view that triggered the
/// load; the UI surfaces them on the status line.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened or read at all.
    #[error("dataset unavailable: {0}")]
    Unavailable(String),

    /// The header row does not match the expected nine columns.
    #[error("dataset header mismatch: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A data row could not be parsed.
    #[error("malformed dataset row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the diabetes dataset from a comma-delimited file.
///
/// The header row must name the nine columns exactly (names and order);
/// every cell must parse as a number and the outcome column must be 0 or 1.
/// Literal zeros in the feature columns are kept as-is.
pub fn load_dataset(path: &Path) -> Result<DiabetesDataset, DataError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DataError::Unavailable(format!("{}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::Unavailable(format!("reading header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let expected: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    if headers != expected {
        return Err(DataError::SchemaMismatch {
            expected,
            found: headers,
        });
    }

    let mut records = Vec::new();
    let mut outcomes = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| DataError::Malformed {
            row: row_no,
            reason: e.to_string(),
        })?;

        if record.len() != COLUMNS.len() {
            return Err(DataError::Malformed {
                row: row_no,
                reason: format!("expected {} cells, found {}", COLUMNS.len(), record.len()),
            });
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (col, slot) in values.iter_mut().enumerate() {
            *slot = parse_cell(&record, row_no, col)?;
        }

        let raw_outcome = parse_cell(&record, row_no, FEATURE_COUNT)?;
        let outcome = Outcome::from_label(raw_outcome as i64)
            .filter(|_| raw_outcome.fract() == 0.0)
            .ok_or_else(|| DataError::Malformed {
                row: row_no,
                reason: format!("outcome must be 0 or 1, found '{raw_outcome}'"),
            })?;

        records.push(FeatureRecord::from_values(values));
        outcomes.push(outcome);
    }

    Ok(DiabetesDataset::new(records, outcomes))
}

fn parse_cell(record: &csv::StringRecord, row: usize, col: usize) -> Result<f64, DataError> {
    let raw = record.get(col).unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| DataError::Malformed {
        row,
        reason: format!("{}: '{raw}' is not a number", COLUMNS[col]),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    const HEADER: &str = "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome";

    #[test]
    fn loads_valid_file() {
        let file = write_csv(&format!(
            "{HEADER}\n6,148,72,35,0,33.6,0.627,50,1\n1,85,66,29,0,26.6,0.351,31,0\n"
        ));
        let ds = load_dataset(file.path()).expect("load");

        assert_eq!(ds.shape(), (2, 9));
        assert_eq!(ds.records[0].glucose, 148.0);
        assert_eq!(ds.records[1].bmi, 26.6);
        assert_eq!(ds.outcomes, vec![Outcome::Positive, Outcome::Negative]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_dataset(Path::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, DataError::Unavailable(_)));
    }

    #[test]
    fn reordered_header_is_schema_mismatch() {
        let file = write_csv(
            "Glucose,Pregnancies,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome\n148,6,72,35,0,33.6,0.627,50,1\n",
        );
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DataError::SchemaMismatch { .. }));
    }

    #[test]
    fn non_numeric_cell_names_row_and_column() {
        let file = write_csv(&format!("{HEADER}\n6,abc,72,35,0,33.6,0.627,50,1\n"));
        let err = load_dataset(file.path()).unwrap_err();
        match err {
            DataError::Malformed { row, reason } => {
                assert_eq!(row, 0);
                assert!(reason.contains("Glucose"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_outcome_is_malformed() {
        let file = write_csv(&format!("{HEADER}\n6,148,72,35,0,33.6,0.627,50,2\n"));
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Malformed { row: 0, .. }));
    }

    #[test]
    fn short_row_is_malformed() {
        let file = write_csv(&format!("{HEADER}\n6,148,72\n"));
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Malformed { row: 0, .. }));
    }
}
