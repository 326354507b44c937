//! Application state for the HTTP server.

use std::sync::Arc;

use crate::controls::ControlModel;
use crate::layout::{build_layout, LayoutNode};
use crate::models::LaunchDataset;
use crate::reactive::Dashboard;

/// Shared application state passed to all handlers. Read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    /// Dataset and registered chart listeners
    pub dashboard: Dashboard,
    /// Control domains derived from the dataset
    pub controls: Arc<ControlModel>,
    /// Page tree built once from the controls
    pub layout: Arc<LayoutNode>,
}

impl AppState {
    /// Build the state from a loaded dataset.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let controls = ControlModel::from_dataset(&dataset);
        let layout = build_layout(&controls);
        Self {
            dashboard: Dashboard::launch_dashboard(dataset),
            controls: Arc::new(controls),
            layout: Arc::new(layout),
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        self.dashboard.dataset()
    }
}
