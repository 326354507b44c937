#![allow(dead_code)]

use std::path::PathBuf;

use launch_dash::models::{LaunchDataset, LaunchRecord, Outcome};

/// Path of the sample dataset bundled at the workspace root.
pub fn sample_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("spacex_launch_dash.csv")
}

pub fn record(site: &str, payload: f64, outcome: Outcome, category: &str) -> LaunchRecord {
    LaunchRecord::new(site, payload, outcome, category)
}

/// Sites {A, B}: A has 3 successes and 1 failure, B has 0 successes and 2 failures.
pub fn two_site_dataset() -> LaunchDataset {
    LaunchDataset::from_records(vec![
        record("A", 1000.0, Outcome::Success, "FT"),
        record("A", 2000.0, Outcome::Success, "FT"),
        record("A", 3000.0, Outcome::Success, "B4"),
        record("A", 4000.0, Outcome::Failure, "B4"),
        record("B", 1500.0, Outcome::Failure, "v1.1"),
        record("B", 2500.0, Outcome::Failure, "v1.1"),
    ])
    .expect("fixture is not empty")
}
