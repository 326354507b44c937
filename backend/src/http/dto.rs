//! Data Transfer Objects for the HTTP API.
//!
//! Chart specs, layout nodes and control models already derive
//! Serialize/Deserialize and are returned as-is.

use serde::{Deserialize, Serialize};

pub use crate::charts::ChartSpec;
pub use crate::controls::{ControlModel, ControlState, PayloadRange, SiteSelection};
pub use crate::layout::LayoutNode;
pub use crate::reactive::{ChartUpdate, ControlEvent};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of loaded launch records
    pub records: usize,
}

/// Control domains plus the initial control state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsResponse {
    #[serde(flatten)]
    pub controls: ControlModel,
    pub initial_state: ControlState,
}

/// Query parameters for chart endpoints. Missing values fall back to the
/// initial control state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartQuery {
    /// Dropdown value (`ALL` or a site name)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (inclusive)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (inclusive)
    #[serde(default)]
    pub high: Option<f64>,
}

impl ChartQuery {
    /// Merge the query over `initial`.
    pub fn into_state(self, initial: ControlState) -> ControlState {
        ControlState {
            site: self
                .site
                .as_deref()
                .map(SiteSelection::from_value)
                .unwrap_or(initial.site),
            payload_range: PayloadRange::new(
                self.low.unwrap_or(initial.payload_range.low),
                self.high.unwrap_or(initial.payload_range.high),
            ),
        }
    }
}

/// A control change together with the client's current control state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    pub state: ControlState,
    pub event: ControlEvent,
}

/// Updated control state and the re-rendered outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub state: ControlState,
    pub updates: Vec<ChartUpdate>,
}
