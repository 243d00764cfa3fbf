use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{DiabetesDataset, FeatureRecord, Outcome, COLUMNS};

// ---------------------------------------------------------------------------
// Deterministic synthetic dataset
// ---------------------------------------------------------------------------

/// Generate a synthetic diabetes dataset with plausible marginals.
///
/// Values are drawn from per-outcome gaussians loosely matched to the
/// well-known Pima dataset, including its zero-as-missing quirk in the
/// skin-thickness and insulin columns. Deterministic for a given seed.
pub fn synthetic_dataset(rows: usize, seed: u64) -> DiabetesDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(rows);
    let mut outcomes = Vec::with_capacity(rows);

    for _ in 0..rows {
        let positive = rng.gen::<f64>() < 0.35;
        records.push(synthetic_record(&mut rng, positive));
        outcomes.push(if positive {
            Outcome::Positive
        } else {
            Outcome::Negative
        });
    }

    DiabetesDataset::new(records, outcomes)
}

fn synthetic_record(rng: &mut StdRng, positive: bool) -> FeatureRecord {
    // (negative mean/std, positive mean/std) per column.
    let (g_mu, g_sd) = if positive { (142.0, 30.0) } else { (110.0, 24.0) };
    let (b_mu, b_sd) = if positive { (71.0, 19.0) } else { (68.0, 18.0) };
    let (s_mu, s_sd) = if positive { (22.0, 17.0) } else { (20.0, 15.0) };
    let (i_mu, i_sd) = if positive { (100.0, 130.0) } else { (68.0, 98.0) };
    let (m_mu, m_sd) = if positive { (35.1, 7.3) } else { (30.3, 7.7) };
    let (p_mu, p_sd) = if positive { (0.55, 0.37) } else { (0.43, 0.30) };
    let (a_mu, a_sd) = if positive { (37.0, 11.0) } else { (31.0, 11.8) };
    let preg_mu = if positive { 4.9 } else { 3.3 };

    let pregnancies = gauss(rng, preg_mu, 3.2).clamp(0.0, 17.0).round();
    let glucose = gauss(rng, g_mu, g_sd).clamp(44.0, 199.0).round();
    let glucose = zero_or(rng, 0.006, glucose);
    let blood_pressure = gauss(rng, b_mu, b_sd).clamp(24.0, 122.0).round();
    let blood_pressure = zero_or(rng, 0.045, blood_pressure);
    let skin_thickness = gauss(rng, s_mu, s_sd).clamp(7.0, 99.0).round();
    let skin_thickness = zero_or(rng, 0.30, skin_thickness);
    let insulin = gauss(rng, i_mu, i_sd).clamp(14.0, 846.0).round();
    let insulin = zero_or(rng, 0.48, insulin);
    let bmi = round_to(gauss(rng, m_mu, m_sd).clamp(18.2, 67.1), 10.0);
    let bmi = zero_or(rng, 0.014, bmi);
    let pedigree = round_to(gauss(rng, p_mu, p_sd).clamp(0.078, 2.42), 1000.0);
    let age = gauss(rng, a_mu, a_sd).clamp(21.0, 81.0).round();

    FeatureRecord {
        pregnancies,
        glucose,
        blood_pressure,
        skin_thickness,
        insulin,
        bmi,
        pedigree,
        age,
    }
}

/// Box–Muller transform.
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(1e-15);
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// With probability `p`, return the dataset's 0.0 missing marker.
fn zero_or(rng: &mut StdRng, p: f64, value: f64) -> f64 {
    if rng.gen::<f64>() < p {
        0.0
    } else {
        value
    }
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write the dataset as a comma-delimited file with the standard header,
/// creating the parent directory if needed. The output round-trips through
/// [`super::loader::load_dataset`].
pub fn write_csv(dataset: &DiabetesDataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(COLUMNS).context("writing header")?;

    for (record, outcome) in dataset.records.iter().zip(&dataset.outcomes) {
        let mut row: Vec<String> = record.values().iter().map(|v| v.to_string()).collect();
        row.push(outcome.as_f64().to_string());
        writer.write_record(&row).context("writing row")?;
    }

    writer.flush().context("flushing csv")?;
    Ok(())
}
