/// Presentation layer: the side menu, the status bar, and the four views
/// it dispatches between (Home, Dataset, Charts, Predict).

pub mod charts;
pub mod dataset;
pub mod home;
pub mod panels;
pub mod predict;
