//! Interactive controls: the site dropdown and the payload range slider.
//!
//! The display bounds of the slider are fixed constants; only its initial
//! value comes from the data. No control value is validated against the
//! dataset: bindings turn unknown sites and inverted ranges into empty charts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::LaunchDataset;

/// Wire value of the aggregate dropdown entry.
pub const ALL_SITES_VALUE: &str = "ALL";
/// Display label of the aggregate dropdown entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const SITE_DROPDOWN_PLACEHOLDER: &str = "place holder here";

pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;
pub const PAYLOAD_SLIDER_MARK_INTERVAL: f64 = 2500.0;

/// Identifies a control that can emit change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl ControlId {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => SITE_DROPDOWN_ID,
            ControlId::PayloadSlider => PAYLOAD_SLIDER_ID,
        }
    }
}

/// Current dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. Anything but `ALL` is taken as a site name.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site),
        }
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_value())
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SiteSelection::from_value(&value))
    }
}

/// Closed payload interval as delivered by the slider, `[low, high]`.
///
/// The pair is kept as given: `low > high` is legal and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// Values of every control at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// All sites and the full observed payload domain.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        let domain = dataset.payload_domain();
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(domain.min, domain.max),
        }
    }
}

/// A single dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Dropdown model: options (aggregate entry first) and default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<SiteOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

impl SiteDropdown {
    pub fn from_dataset(dataset: &LaunchDataset) -> Self {
        let mut options = Vec::with_capacity(dataset.sites().len() + 1);
        options.push(SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES_VALUE.to_string(),
        });
        options.extend(dataset.sites().iter().map(|site| SiteOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            id: SITE_DROPDOWN_ID.to_string(),
            options,
            value: SiteSelection::All,
            placeholder: SITE_DROPDOWN_PLACEHOLDER.to_string(),
            searchable: true,
        }
    }
}

/// Labelled tick on the slider track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Range slider model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

impl PayloadSlider {
    pub fn from_dataset(dataset: &LaunchDataset) -> Self {
        let domain = dataset.payload_domain();
        Self {
            id: PAYLOAD_SLIDER_ID.to_string(),
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
            marks: slider_marks(),
            value: PayloadRange::new(domain.min, domain.max),
        }
    }
}

fn slider_marks() -> Vec<SliderMark> {
    let count = (PAYLOAD_SLIDER_MAX / PAYLOAD_SLIDER_MARK_INTERVAL) as usize;
    (0..=count)
        .map(|i| {
            let value = PAYLOAD_SLIDER_MIN + i as f64 * PAYLOAD_SLIDER_MARK_INTERVAL;
            SliderMark {
                value,
                label: format!("{}", value as i64),
            }
        })
        .collect()
}

/// Both controls with their domains, built once from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlModel {
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
}

impl ControlModel {
    pub fn from_dataset(dataset: &LaunchDataset) -> Self {
        Self {
            site_dropdown: SiteDropdown::from_dataset(dataset),
            payload_slider: PayloadSlider::from_dataset(dataset),
        }
    }

    pub fn initial_state(&self) -> ControlState {
        ControlState {
            site: self.site_dropdown.value.clone(),
            payload_range: self.payload_slider.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 2296.0, Outcome::Success, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn test_site_selection_parsing() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        // The label is not the sentinel value.
        assert_eq!(
            SiteSelection::from_value("All Sites"),
            SiteSelection::Site("All Sites".to_string())
        );
    }

    #[test]
    fn test_site_selection_serde() {
        let json = serde_json::to_string(&SiteSelection::All).unwrap();
        assert_eq!(json, "\"ALL\"");
        let parsed: SiteSelection = serde_json::from_str("\"VAFB SLC-4E\"").unwrap();
        assert_eq!(parsed.site(), Some("VAFB SLC-4E"));
    }

    #[test]
    fn test_payload_range_serde_keeps_order() {
        let range: PayloadRange = serde_json::from_str("[5000, 1000]").unwrap();
        assert_eq!(range.low, 5000.0);
        assert_eq!(range.high, 1000.0);
        assert_eq!(serde_json::to_string(&range).unwrap(), "[5000.0,1000.0]");
    }

    #[test]
    fn test_dropdown_all_sites_first() {
        let dropdown = SiteDropdown::from_dataset(&dataset());

        assert_eq!(dropdown.options.len(), 3);
        assert_eq!(dropdown.options[0].label, "All Sites");
        assert_eq!(dropdown.options[0].value, "ALL");
        assert_eq!(dropdown.options[1].value, "CCAFS LC-40");
        assert_eq!(dropdown.options[2].value, "VAFB SLC-4E");
        assert_eq!(dropdown.value, SiteSelection::All);
        assert!(dropdown.searchable);
    }

    #[test]
    fn test_slider_fixed_bounds_and_observed_initial_value() {
        let slider = PayloadSlider::from_dataset(&dataset());

        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 10000.0);
        assert_eq!(slider.step, 1000.0);
        assert_eq!(slider.value, PayloadRange::new(0.0, 9600.0));

        let marks: Vec<f64> = slider.marks.iter().map(|m| m.value).collect();
        assert_eq!(marks, vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0]);
        assert_eq!(slider.marks[1].label, "2500");
    }

    #[test]
    fn test_initial_state() {
        let data = dataset();
        let model = ControlModel::from_dataset(&data);
        let state = model.initial_state();

        assert_eq!(state, ControlState::initial(&data));
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_control_id_wire_names() {
        assert_eq!(
            serde_json::to_string(&ControlId::SiteDropdown).unwrap(),
            "\"site-dropdown\""
        );
        assert_eq!(ControlId::PayloadSlider.as_str(), "payload-slider");
    }
}
