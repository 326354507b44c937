//! Payload vs. outcome scatter chart binding.

use tracing::debug;

use crate::charts::{
    AxisSpec, ChartKind, ChartLayout, ChartSpec, MarkerStyle, ScatterPoint, ScatterSeries,
};
use crate::controls::{PayloadRange, SiteSelection};
use crate::models::{LaunchDataset, LaunchRecord, Outcome};

pub const SCATTER_TITLE: &str = "Correlation between Payload Mass and Launch Success";
pub const X_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const Y_AXIS_TITLE: &str = "Launch Outcome";
pub const LEGEND_TITLE: &str = "Booster Version";

/// Records inside the payload range (inclusive) and, unless `All`, at the selected site.
///
/// The range is used as given; `low > high` selects nothing.
pub fn filter_records<'a>(
    dataset: &'a LaunchDataset,
    selection: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |r| r.payload_within(range.low, range.high))
        .filter(move |r| selection.site().map_or(true, |site| r.launch_site == site))
}

/// Group records by booster version category, in order of first appearance.
pub fn group_by_category<'a>(
    records: impl Iterator<Item = &'a LaunchRecord>,
) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in records {
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y: record.outcome.class(),
            launch_site: record.launch_site.clone(),
            booster_version: record.booster_version.clone(),
        };
        match series
            .iter_mut()
            .find(|s| s.name == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }
    series
}

/// Build the scatter chart for the current dropdown and slider values.
///
/// An empty selection produces a chart with no series, never an error.
pub fn payload_scatter_chart(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ChartSpec {
    let series = group_by_category(filter_records(dataset, selection, range));

    let y_axis = AxisSpec::titled(Y_AXIS_TITLE).with_ticks(
        vec![
            f64::from(Outcome::Failure.class()),
            f64::from(Outcome::Success.class()),
        ],
        vec![
            Outcome::Failure.label().to_string(),
            Outcome::Success.label().to_string(),
        ],
    );

    let spec = ChartSpec {
        title: SCATTER_TITLE.to_string(),
        kind: ChartKind::Scatter {
            series,
            x_axis: AxisSpec::titled(X_AXIS_TITLE),
            y_axis,
            marker: MarkerStyle::default(),
        },
        layout: ChartLayout {
            legend_title: Some(LEGEND_TITLE.to_string()),
        },
    };

    debug!(
        site = selection.as_value(),
        low = range.low,
        high = range.high,
        points = spec.data_len(),
        "Rendered payload scatter chart"
    );
    spec
}
