use std::path::Path;

use sugarscope::context::DATASET_PATH;
use sugarscope::data::synthetic::{synthetic_dataset, write_csv};

/// Number of rows in the canonical dataset file.
const ROWS: usize = 768;

const SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    let dataset = synthetic_dataset(ROWS, SEED);
    let path = Path::new(DATASET_PATH);
    write_csv(&dataset, path)?;

    let (negative, positive) = dataset.outcome_counts();
    println!(
        "Wrote {} rows ({negative} negative, {positive} positive) to {}",
        dataset.len(),
        path.display()
    );
    Ok(())
}
