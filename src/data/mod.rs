/// Data layer: core types, loading, and statistics.
///
/// Architecture:
/// ```text
///      data/diabetes.csv
///             │
///             ▼
///       ┌──────────┐
///       │  loader   │  parse file → DiabetesDataset
///       └──────────┘
///             │
///             ▼
///   ┌─────────────────┐
///   │ DiabetesDataset  │  Vec<FeatureRecord> + Vec<Outcome>
///   └─────────────────┘
///             │
///             ▼
///       ┌──────────┐
///       │  stats    │  describe() + correlation matrix
///       └──────────┘
/// ```
///
/// `synthetic` produces a deterministic stand-in dataset for local runs
/// (see `src/bin/generate_sample.rs`).

pub mod loader;
pub mod model;
pub mod stats;
pub mod synthetic;
