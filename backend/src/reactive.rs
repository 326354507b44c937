//! Control-to-chart subscription runtime.
//!
//! Listeners subscribe to one or more controls and render one output region.
//! When a control changes, [`Dashboard::dispatch`] updates the control state
//! and re-renders only the outputs whose listeners subscribe to that control.
//! The dashboard holds no control state of its own; the caller owns it.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartSpec;
use crate::controls::{ControlId, ControlState, PayloadRange, SiteSelection};
use crate::models::LaunchDataset;
use crate::services;

/// Identifies a chart region on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl FromStr for OutputId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success-pie-chart" => Ok(OutputId::SuccessPieChart),
            "success-payload-scatter-chart" => Ok(OutputId::SuccessPayloadScatterChart),
            other => Err(format!("Unknown chart output: {}", other)),
        }
    }
}

/// A change delivered by one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value")]
pub enum ControlEvent {
    #[serde(rename = "site-dropdown")]
    SiteChanged(SiteSelection),
    #[serde(rename = "payload-slider")]
    PayloadRangeChanged(PayloadRange),
}

impl ControlEvent {
    pub fn control(&self) -> ControlId {
        match self {
            ControlEvent::SiteChanged(_) => ControlId::SiteDropdown,
            ControlEvent::PayloadRangeChanged(_) => ControlId::PayloadSlider,
        }
    }

    /// Write the new value into `state`.
    pub fn apply(self, state: &mut ControlState) {
        match self {
            ControlEvent::SiteChanged(site) => state.site = site,
            ControlEvent::PayloadRangeChanged(range) => state.payload_range = range,
        }
    }
}

/// Replacement figure for one output region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub output: OutputId,
    pub figure: ChartSpec,
}

/// Renders one output from the dataset and the current control values.
///
/// Implementations must be pure: equal inputs give equal specs.
pub trait Listener: Send + Sync {
    /// Controls whose changes trigger a re-render.
    fn inputs(&self) -> &[ControlId];

    fn output(&self) -> OutputId;

    fn render(&self, dataset: &LaunchDataset, state: &ControlState) -> ChartSpec;

    fn subscribes_to(&self, control: ControlId) -> bool {
        self.inputs().contains(&control)
    }
}

/// Pie chart listener: depends on the site dropdown only.
pub struct SuccessPieListener;

impl Listener for SuccessPieListener {
    fn inputs(&self) -> &[ControlId] {
        &[ControlId::SiteDropdown]
    }

    fn output(&self) -> OutputId {
        OutputId::SuccessPieChart
    }

    fn render(&self, dataset: &LaunchDataset, state: &ControlState) -> ChartSpec {
        services::success_pie_chart(dataset, &state.site)
    }
}

/// Scatter chart listener: depends on both controls.
pub struct PayloadScatterListener;

impl Listener for PayloadScatterListener {
    fn inputs(&self) -> &[ControlId] {
        &[ControlId::SiteDropdown, ControlId::PayloadSlider]
    }

    fn output(&self) -> OutputId {
        OutputId::SuccessPayloadScatterChart
    }

    fn render(&self, dataset: &LaunchDataset, state: &ControlState) -> ChartSpec {
        services::payload_scatter_chart(dataset, &state.site, state.payload_range)
    }
}

/// Shared dataset plus the registered listeners.
#[derive(Clone)]
pub struct Dashboard {
    dataset: Arc<LaunchDataset>,
    listeners: Vec<Arc<dyn Listener>>,
}

impl Dashboard {
    /// A dashboard with no listeners.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self {
            dataset,
            listeners: Vec::new(),
        }
    }

    /// The launch dashboard: pie and scatter listeners registered.
    pub fn launch_dashboard(dataset: Arc<LaunchDataset>) -> Self {
        let mut dashboard = Self::new(dataset);
        dashboard.subscribe(Arc::new(SuccessPieListener));
        dashboard.subscribe(Arc::new(PayloadScatterListener));
        dashboard
    }

    pub fn subscribe(&mut self, listener: Arc<dyn Listener>) {
        self.listeners.push(listener);
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    pub fn outputs(&self) -> Vec<OutputId> {
        self.listeners.iter().map(|l| l.output()).collect()
    }

    /// Render every output for `state`.
    pub fn initial_render(&self, state: &ControlState) -> Vec<ChartUpdate> {
        self.listeners
            .iter()
            .map(|listener| self.render(listener.as_ref(), state))
            .collect()
    }

    /// Render one output, if a listener for it is registered.
    pub fn render_output(&self, output: OutputId, state: &ControlState) -> Option<ChartSpec> {
        self.listeners
            .iter()
            .find(|l| l.output() == output)
            .map(|l| l.render(&self.dataset, state))
    }

    /// Apply `event` to `state` and re-render the subscribed outputs.
    pub fn dispatch(&self, state: &mut ControlState, event: ControlEvent) -> Vec<ChartUpdate> {
        let control = event.control();
        event.apply(state);

        let updates: Vec<ChartUpdate> = self
            .listeners
            .iter()
            .filter(|listener| listener.subscribes_to(control))
            .map(|listener| self.render(listener.as_ref(), state))
            .collect();

        debug!(
            control = control.as_str(),
            updated = updates.len(),
            "Dispatched control event"
        );
        updates
    }

    fn render(&self, listener: &dyn Listener, state: &ControlState) -> ChartUpdate {
        ChartUpdate {
            output: listener.output(),
            figure: listener.render(&self.dataset, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};

    fn dashboard() -> Dashboard {
        let dataset = LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "FT"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "FT"),
            LaunchRecord::new("B", 4000.0, Outcome::Failure, "B4"),
        ])
        .unwrap();
        Dashboard::launch_dashboard(Arc::new(dataset))
    }

    #[test]
    fn test_initial_render_covers_every_output() {
        let dashboard = dashboard();
        let state = ControlState::initial(dashboard.dataset());
        let updates = dashboard.initial_render(&state);

        let outputs: Vec<OutputId> = updates.iter().map(|u| u.output).collect();
        assert_eq!(
            outputs,
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(updates[1].figure.data_len(), 3);
    }

    #[test]
    fn test_site_change_updates_both_charts() {
        let dashboard = dashboard();
        let mut state = ControlState::initial(dashboard.dataset());

        let updates = dashboard.dispatch(
            &mut state,
            ControlEvent::SiteChanged(SiteSelection::Site("B".to_string())),
        );

        assert_eq!(state.site, SiteSelection::Site("B".to_string()));
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].figure.title, "Success vs Failure for B");
        assert_eq!(updates[1].figure.data_len(), 1);
    }

    #[test]
    fn test_payload_change_updates_scatter_only() {
        let dashboard = dashboard();
        let mut state = ControlState::initial(dashboard.dataset());

        let updates = dashboard.dispatch(
            &mut state,
            ControlEvent::PayloadRangeChanged(PayloadRange::new(0.0, 1000.0)),
        );

        assert_eq!(state.payload_range, PayloadRange::new(0.0, 1000.0));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].output, OutputId::SuccessPayloadScatterChart);
        assert_eq!(updates[0].figure.data_len(), 1);
    }

    #[test]
    fn test_dispatch_matches_direct_binding_calls() {
        let dashboard = dashboard();
        let mut state = ControlState::initial(dashboard.dataset());
        let updates = dashboard.dispatch(
            &mut state,
            ControlEvent::SiteChanged(SiteSelection::Site("A".to_string())),
        );

        assert_eq!(
            updates[0].figure,
            services::success_pie_chart(dashboard.dataset(), &state.site)
        );
        assert_eq!(
            updates[1].figure,
            services::payload_scatter_chart(dashboard.dataset(), &state.site, state.payload_range)
        );
    }

    #[test]
    fn test_render_output_without_listener() {
        let dataset = dashboard().dataset().clone();
        let empty = Dashboard::new(Arc::new(dataset));
        let state = ControlState::initial(empty.dataset());

        assert!(empty.render_output(OutputId::SuccessPieChart, &state).is_none());
        assert!(empty.initial_render(&state).is_empty());
    }

    #[test]
    fn test_output_id_round_trip_names() {
        for output in [OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart] {
            assert_eq!(output.as_str().parse::<OutputId>().unwrap(), output);
        }
        assert!("launch-map".parse::<OutputId>().is_err());
    }

    #[test]
    fn test_event_wire_format() {
        let event: ControlEvent =
            serde_json::from_str(r#"{"control":"payload-slider","value":[1000,5000]}"#).unwrap();
        assert_eq!(
            event,
            ControlEvent::PayloadRangeChanged(PayloadRange::new(1000.0, 5000.0))
        );

        let event: ControlEvent =
            serde_json::from_str(r#"{"control":"site-dropdown","value":"ALL"}"#).unwrap();
        assert_eq!(event, ControlEvent::SiteChanged(SiteSelection::All));
        assert_eq!(event.control(), ControlId::SiteDropdown);
    }
}
