//! Launch record types.

use serde::{Deserialize, Serialize};

/// Outcome class of a launch attempt, stored as `0`/`1` in the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the numeric `class` column.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric encoding used on the scatter chart's y axis.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub flight_number: Option<i64>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Exact booster identifier (e.g. `F9 v1.1 B1011`), shown on hover.
    pub booster_version: Option<String>,
    /// Booster family used for colouring (e.g. `v1.1`, `FT`, `B4`).
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn with_flight_number(mut self, flight_number: i64) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    pub fn with_booster_version(mut self, booster_version: impl Into<String>) -> Self {
        self.booster_version = Some(booster_version.into());
        self
    }

    /// Inclusive on both ends. An inverted interval matches nothing.
    pub fn payload_within(&self, low: f64, high: f64) -> bool {
        self.payload_mass_kg >= low && self.payload_mass_kg <= high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.label(), "Failure");
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
    }

    #[test]
    fn test_payload_within_is_inclusive() {
        let record = LaunchRecord::new("CCAFS LC-40", 2500.0, Outcome::Success, "FT");
        assert!(record.payload_within(2500.0, 2500.0));
        assert!(record.payload_within(0.0, 2500.0));
        assert!(record.payload_within(2500.0, 10000.0));
        assert!(!record.payload_within(2500.5, 10000.0));
    }

    #[test]
    fn test_payload_within_inverted_range() {
        let record = LaunchRecord::new("CCAFS LC-40", 2500.0, Outcome::Success, "FT");
        assert!(!record.payload_within(5000.0, 0.0));
    }

    #[test]
    fn test_record_builders() {
        let record = LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Failure, "FT")
            .with_flight_number(33)
            .with_booster_version("F9 FT B1031.1");
        assert_eq!(record.flight_number, Some(33));
        assert_eq!(record.booster_version.as_deref(), Some("F9 FT B1031.1"));
    }
}
