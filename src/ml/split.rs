use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// Deterministic train/holdout split
// ---------------------------------------------------------------------------

/// Seed used for the training split so runs are reproducible.
pub const SPLIT_SEED: u64 = 42;

/// Fraction of rows withheld from training.
pub const TEST_FRACTION: f64 = 0.2;

/// Row indices partitioned into a training set and a holdout set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n_samples` with a seeded RNG and cut off the last
/// `test_fraction` (rounded up) as the holdout set.
pub fn train_test_split(n_samples: usize, test_fraction: f64, seed: u64) -> SplitIndices {
    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n_samples as f64) * test_fraction).ceil() as usize;
    let n_train = n_samples.saturating_sub(n_test);
    let test = indices.split_off(n_train);

    SplitIndices {
        train: indices,
        test,
    }
}
