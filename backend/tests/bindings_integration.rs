//! End-to-end checks of the chart bindings through the public API.

use std::sync::Arc;

use launch_dash::controls::{ControlModel, ControlState, PayloadRange, SiteSelection};
use launch_dash::models::Outcome;
use launch_dash::reactive::{ControlEvent, Dashboard, OutputId};
use launch_dash::services::{payload_scatter_chart, success_pie_chart};

mod support;

fn pairs(spec: &launch_dash::charts::ChartSpec) -> Vec<(String, u64)> {
    spec.slices()
        .expect("pie chart")
        .iter()
        .map(|s| (s.label.clone(), s.value))
        .collect()
}

#[test]
fn test_two_site_scenario_all_sites() {
    let dataset = support::two_site_dataset();
    let spec = success_pie_chart(&dataset, &SiteSelection::All);

    assert_eq!(pairs(&spec), vec![("A".to_string(), 3)]);
}

#[test]
fn test_two_site_scenario_site_b() {
    let dataset = support::two_site_dataset();
    let spec = success_pie_chart(&dataset, &SiteSelection::from_value("B"));

    assert_eq!(
        pairs(&spec),
        vec![("Success".to_string(), 0), ("Failure".to_string(), 2)]
    );
}

#[test]
fn test_zero_payload_range_without_zero_payloads() {
    let dataset = support::two_site_dataset();
    let spec = payload_scatter_chart(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 0.0));

    assert_eq!(spec.data_len(), 0);
    assert_eq!(spec.title, "Correlation between Payload Mass and Launch Success");
}

#[test]
fn test_scatter_points_match_filter() {
    let dataset = support::two_site_dataset();
    let range = PayloadRange::new(1500.0, 3000.0);
    let spec = payload_scatter_chart(&dataset, &SiteSelection::from_value("A"), range);

    let mut xs: Vec<f64> = spec.points().map(|p| p.x).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(xs, vec![2000.0, 3000.0]);
    assert!(spec
        .points()
        .all(|p| p.y == Outcome::Success.class() && p.launch_site == "A"));
}

#[test]
fn test_dashboard_session_flow() {
    let dataset = Arc::new(support::two_site_dataset());
    let controls = ControlModel::from_dataset(&dataset);
    let dashboard = Dashboard::launch_dashboard(Arc::clone(&dataset));

    let mut state = controls.initial_state();
    assert_eq!(state, ControlState::initial(&dataset));

    let first = dashboard.initial_render(&state);
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].figure.data_len(), dataset.len());

    let updates = dashboard.dispatch(&mut state, ControlEvent::SiteChanged(SiteSelection::from_value("B")));
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[1].figure.data_len(), 2);

    let updates = dashboard.dispatch(
        &mut state,
        ControlEvent::PayloadRangeChanged(PayloadRange::new(2000.0, 3000.0)),
    );
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].output, OutputId::SuccessPayloadScatterChart);
    assert_eq!(updates[0].figure.data_len(), 1);

    // Back to all sites keeps the narrowed payload range.
    let updates = dashboard.dispatch(&mut state, ControlEvent::SiteChanged(SiteSelection::All));
    assert_eq!(state.payload_range, PayloadRange::new(2000.0, 3000.0));
    assert_eq!(updates[1].figure.data_len(), 3);
}

#[test]
fn test_dataset_is_unchanged_by_bindings() {
    let dataset = support::two_site_dataset();
    let before = dataset.records().to_vec();

    let _ = success_pie_chart(&dataset, &SiteSelection::All);
    let _ = success_pie_chart(&dataset, &SiteSelection::from_value("A"));
    let _ = payload_scatter_chart(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 1.0e9));

    assert_eq!(dataset.records(), before.as_slice());
}
