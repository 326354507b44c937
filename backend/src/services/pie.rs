//! Success pie chart binding.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::charts::{ChartSpec, PieSlice};
use crate::controls::SiteSelection;
use crate::models::{LaunchDataset, Outcome};

pub const ALL_SITES_TITLE: &str = "Total Success Launch by site";

pub fn site_title(site: &str) -> String {
    format!("Success vs Failure for {}", site)
}

/// Count successful launches per site, keyed and ordered by site name.
///
/// Sites without a success do not appear.
pub fn success_counts_by_site(dataset: &LaunchDataset) -> BTreeMap<&str, u64> {
    let mut counts = BTreeMap::new();
    for record in dataset.records().iter().filter(|r| r.outcome.is_success()) {
        *counts.entry(record.launch_site.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Success and failure counts for one site. Unknown sites count zero of each.
pub fn outcome_counts_for_site(dataset: &LaunchDataset, site: &str) -> (u64, u64) {
    dataset
        .records()
        .iter()
        .filter(|r| r.launch_site == site)
        .fold((0, 0), |(success, failure), r| match r.outcome {
            Outcome::Success => (success + 1, failure),
            Outcome::Failure => (success, failure + 1),
        })
}

/// Build the pie chart for the current dropdown value.
///
/// `All` yields one slice per site with at least one success. A specific
/// site always yields exactly `Success` then `Failure`, zero counts included.
pub fn success_pie_chart(dataset: &LaunchDataset, selection: &SiteSelection) -> ChartSpec {
    let spec = match selection {
        SiteSelection::All => {
            let slices = success_counts_by_site(dataset)
                .into_iter()
                .map(|(site, value)| PieSlice {
                    label: site.to_string(),
                    value,
                })
                .collect();
            ChartSpec::pie(ALL_SITES_TITLE, slices)
        }
        SiteSelection::Site(site) => {
            if !dataset.has_site(site) {
                warn!(site = %site, "Pie chart requested for a site outside the catalog");
            }
            let (success, failure) = outcome_counts_for_site(dataset, site);
            ChartSpec::pie(
                site_title(site),
                vec![
                    PieSlice {
                        label: Outcome::Success.label().to_string(),
                        value: success,
                    },
                    PieSlice {
                        label: Outcome::Failure.label().to_string(),
                        value: failure,
                    },
                ],
            )
        }
    };

    debug!(
        site = selection.as_value(),
        slices = spec.data_len(),
        "Rendered success pie chart"
    );
    spec
}
