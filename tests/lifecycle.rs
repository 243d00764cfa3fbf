//! End-to-end checks of the model lifecycle: load-or-train, artifact
//! persistence, and the prediction boundary.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use sugarscope::context::AppContext;
use sugarscope::data::model::{DiabetesDataset, FeatureRecord, Outcome};
use sugarscope::data::synthetic::{synthetic_dataset, write_csv};
use sugarscope::ml::lifecycle::{ModelStore, TrainedModel};

/// The canonical example profile used as a regression fixture.
fn fixture_record() -> FeatureRecord {
    FeatureRecord::from_values([4.0, 85.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0])
}

fn artifact_path(dir: &Path) -> PathBuf {
    dir.join("model").join("diabetes_logistic.json")
}

/// load_or_train with a closure that counts how often the dataset is
/// actually requested.
fn load_or_train_counting(
    store: &ModelStore,
    dataset: &DiabetesDataset,
    calls: &Cell<u32>,
) -> TrainedModel {
    store
        .load_or_train(|| {
            calls.set(calls.get() + 1);
            Ok(dataset)
        })
        .expect("load_or_train")
}

#[test]
fn first_call_trains_and_persists_second_call_reloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ModelStore::new(artifact_path(dir.path()));
    let dataset = synthetic_dataset(400, 17);
    let calls = Cell::new(0);

    let trained = load_or_train_counting(&store, &dataset, &calls);
    assert_eq!(calls.get(), 1, "training must read the dataset once");
    assert!(store.artifact_path().exists(), "artifact written on train");

    let reloaded = load_or_train_counting(&store, &dataset, &calls);
    assert_eq!(calls.get(), 1, "reload must not touch the dataset");
    assert_eq!(reloaded.holdout_accuracy(), trained.holdout_accuracy());
    assert_eq!(
        reloaded.predict(&fixture_record()),
        trained.predict(&fixture_record())
    );
}

#[test]
fn deleting_the_artifact_triggers_retraining() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ModelStore::new(artifact_path(dir.path()));
    let dataset = synthetic_dataset(400, 17);
    let calls = Cell::new(0);

    load_or_train_counting(&store, &dataset, &calls);
    std::fs::remove_file(store.artifact_path()).expect("delete artifact");

    load_or_train_counting(&store, &dataset, &calls);
    assert_eq!(calls.get(), 2, "retraining must re-request the dataset");
    assert!(
        store.artifact_path().exists(),
        "artifact recreated at the expected path"
    );
}

#[test]
fn fixed_seed_training_is_reproducible() {
    let dataset = synthetic_dataset(400, 23);
    let calls = Cell::new(0);

    let dir_a = tempfile::tempdir().expect("tempdir");
    let dir_b = tempfile::tempdir().expect("tempdir");
    let a = load_or_train_counting(&ModelStore::new(artifact_path(dir_a.path())), &dataset, &calls);
    let b = load_or_train_counting(&ModelStore::new(artifact_path(dir_b.path())), &dataset, &calls);

    assert_eq!(a.holdout_accuracy(), b.holdout_accuracy());
    assert_eq!(a.predict(&fixture_record()), b.predict(&fixture_record()));
    assert_eq!(
        a.predict_proba(&fixture_record()),
        b.predict_proba(&fixture_record())
    );
}

#[test]
fn all_zero_record_gets_a_label_without_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ModelStore::new(artifact_path(dir.path()));
    let dataset = synthetic_dataset(200, 3);
    let calls = Cell::new(0);

    let trained = load_or_train_counting(&store, &dataset, &calls);
    let zero = FeatureRecord::from_values([0.0; 8]);
    let label = trained.predict(&zero);
    assert!(label == Outcome::Positive || label == Outcome::Negative);
}

#[test]
fn context_serves_full_shape_and_deterministic_predictions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset_path = dir.path().join("data").join("diabetes.csv");
    write_csv(&synthetic_dataset(768, 42), &dataset_path).expect("write dataset");

    let mut ctx = AppContext::new(&dataset_path, artifact_path(dir.path()));
    assert_eq!(ctx.dataset().expect("load").shape(), (768, 9));

    // First prediction trains and persists; the repeat must agree.
    let first = ctx.submit_prediction(&fixture_record()).expect("predict");
    let second = ctx.submit_prediction(&fixture_record()).expect("predict");
    assert_eq!(first, second);

    // A fresh context reuses the artifact and yields the same label.
    let mut fresh = AppContext::new(&dataset_path, artifact_path(dir.path()));
    let reloaded = fresh.submit_prediction(&fixture_record()).expect("predict");
    assert_eq!(reloaded.outcome, first.outcome);
    assert_eq!(reloaded.probability, first.probability);
}
