//! Declarative chart specifications.
//!
//! A [`ChartSpec`] describes what to draw, independent of the rendering
//! engine. The page script maps it onto the browser charting library.

use serde::{Deserialize, Serialize};

/// Chart type with its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Pie {
        slices: Vec<PieSlice>,
    },
    Scatter {
        series: Vec<ScatterSeries>,
        x_axis: AxisSpec,
        y_axis: AxisSpec,
        marker: MarkerStyle,
    },
}

/// One pie category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Points sharing one colour group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

/// A plotted launch with the fields shown on hover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    pub launch_site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

/// Explicit tick positions and their display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<AxisTicks>,
}

impl AxisSpec {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ticks: None,
        }
    }

    pub fn with_ticks(mut self, values: Vec<f64>, labels: Vec<String>) -> Self {
        self.ticks = Some(AxisTicks { values, labels });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: f64,
    pub opacity: f64,
    pub line_width: f64,
    pub line_color: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            opacity: 0.7,
            line_width: 1.0,
            line_color: "DarkSlateGrey".to_string(),
        }
    }
}

/// Layout options shared by every chart type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
}

/// Complete description of one rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    #[serde(flatten)]
    pub kind: ChartKind,
    #[serde(default)]
    pub layout: ChartLayout,
}

impl ChartSpec {
    pub fn pie(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Pie { slices },
            layout: ChartLayout::default(),
        }
    }

    /// Number of plotted elements: slices for a pie, points for a scatter.
    pub fn data_len(&self) -> usize {
        match &self.kind {
            ChartKind::Pie { slices } => slices.len(),
            ChartKind::Scatter { series, .. } => series.iter().map(|s| s.points.len()).sum(),
        }
    }

    pub fn slices(&self) -> Option<&[PieSlice]> {
        match &self.kind {
            ChartKind::Pie { slices } => Some(slices),
            _ => None,
        }
    }

    pub fn series(&self) -> Option<&[ScatterSeries]> {
        match &self.kind {
            ChartKind::Scatter { series, .. } => Some(series),
            _ => None,
        }
    }

    /// Iterate every scatter point regardless of series.
    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.series()
            .unwrap_or_default()
            .iter()
            .flat_map(|s| s.points.iter())
    }
}
