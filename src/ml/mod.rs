/// Model layer: training, persistence, and the load-or-train lifecycle.
///
/// ```text
///   model/diabetes_logistic.json ──exists?──► artifact::load ──► TrainedModel
///                                    │
///                                   no
///                                    ▼
///        dataset ──► split 80/20 ──► logistic::fit ──► holdout accuracy
///                                    │
///                                    ▼
///                              artifact::save
/// ```

pub mod artifact;
pub mod lifecycle;
pub mod logistic;
pub mod split;
