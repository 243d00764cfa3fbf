use super::model::{DiabetesDataset, COLUMNS, COLUMN_COUNT};

// ---------------------------------------------------------------------------
// Per-column descriptive statistics
// ---------------------------------------------------------------------------

/// Descriptive statistics for one dataset column, mirroring the usual
/// count / mean / std / min / quartiles / max summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: &'static str,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarize every column of the dataset, in [`COLUMNS`] order.
pub fn describe(dataset: &DiabetesDataset) -> Vec<ColumnSummary> {
    (0..COLUMN_COUNT)
        .map(|col| summarize(COLUMNS[col], &dataset.column(col)))
        .collect()
}

fn summarize(column: &'static str, values: &[f64]) -> ColumnSummary {
    let count = values.len();
    let mean = mean(values);

    let std = if count > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    ColumnSummary {
        column,
        count,
        mean,
        std,
        min: sorted.first().copied().unwrap_or(0.0),
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(0.0),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Quantile with linear interpolation between the two nearest ranks.
/// `sorted` must be ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

// ---------------------------------------------------------------------------
// Pairwise Pearson correlations
// ---------------------------------------------------------------------------

/// 9×9 Pearson correlation matrix over all dataset columns, in
/// [`COLUMNS`] order. Feeds the heatmap view.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    values: [[f64; COLUMN_COUNT]; COLUMN_COUNT],
}

impl CorrelationMatrix {
    /// Correlation between columns `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// Compute the correlation matrix. A constant column correlates 1.0 with
/// itself and 0.0 with everything else.
pub fn correlation_matrix(dataset: &DiabetesDataset) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = (0..COLUMN_COUNT).map(|c| dataset.column(c)).collect();
    let means: Vec<f64> = columns.iter().map(|c| mean(c)).collect();

    let mut values = [[0.0; COLUMN_COUNT]; COLUMN_COUNT];
    for i in 0..COLUMN_COUNT {
        values[i][i] = 1.0;
        for j in (i + 1)..COLUMN_COUNT {
            let r = pearson(&columns[i], means[i], &columns[j], means[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { values }
}

fn pearson(a: &[f64], mean_a: f64, b: &[f64], mean_b: f64) -> f64 {
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}
