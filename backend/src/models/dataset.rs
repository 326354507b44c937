//! The in-memory launch table and the values derived from it at load time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::launch::LaunchRecord;

/// Closed interval `[min, max]` of observed payload masses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadDomain {
    pub min: f64,
    pub max: f64,
}

impl PayloadDomain {
    /// Returns `None` for an empty record set.
    pub fn from_records(records: &[LaunchRecord]) -> Option<Self> {
        let mut iter = records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Immutable launch table. Built once at start-up and shared by reference.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    payload_domain: PayloadDomain,
    sites: Vec<String>,
}

impl LaunchDataset {
    /// Build the dataset and its derived values.
    ///
    /// Returns `None` when `records` is empty since the payload domain is undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let payload_domain = PayloadDomain::from_records(&records)?;

        // Distinct sites in order of first appearance.
        let sites = {
            let mut seen = HashSet::new();
            records
                .iter()
                .filter(|r| seen.insert(r.launch_site.as_str()))
                .map(|r| r.launch_site.clone())
                .collect()
        };

        Some(Self {
            records,
            payload_domain,
            sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn payload_domain(&self) -> PayloadDomain {
        self.payload_domain
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}
