//! Static page layout.
//!
//! The tree is built once from the control model and never changes. It is
//! served as JSON and embedded into the HTML shell, whose script builds the
//! DOM from it and draws chart specs with the browser charting library.

use serde::{Deserialize, Serialize};

use crate::controls::{ControlModel, ControlState, PayloadSlider, SiteDropdown};
use crate::reactive::{ChartUpdate, OutputId};

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const PAYLOAD_LABEL: &str = "Payload range (Kg):";

const PAGE_SHELL: &str = include_str!("../static/index.html");
const BOOTSTRAP_PLACEHOLDER: &str = "{{BOOTSTRAP_JSON}}";
const TITLE_PLACEHOLDER: &str = "{{PAGE_TITLE}}";

/// Inline text styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

/// A node of the declarative page tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum LayoutNode {
    Container {
        children: Vec<LayoutNode>,
    },
    Heading {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<TextStyle>,
    },
    Paragraph {
        text: String,
    },
    Break,
    Dropdown(SiteDropdown),
    RangeSlider(PayloadSlider),
    Graph {
        id: OutputId,
    },
}

impl LayoutNode {
    /// Depth-first iteration over this node and its descendants.
    pub fn walk(&self) -> Vec<&LayoutNode> {
        let mut nodes = vec![self];
        if let LayoutNode::Container { children } = self {
            for child in children {
                nodes.extend(child.walk());
            }
        }
        nodes
    }

    /// Output regions in page order.
    pub fn graph_ids(&self) -> Vec<OutputId> {
        self.walk()
            .into_iter()
            .filter_map(|node| match node {
                LayoutNode::Graph { id } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

/// Compose the dashboard page: title, dropdown, pie, slider, scatter.
pub fn build_layout(controls: &ControlModel) -> LayoutNode {
    LayoutNode::Container {
        children: vec![
            LayoutNode::Heading {
                text: PAGE_TITLE.to_string(),
                style: Some(TextStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                }),
            },
            LayoutNode::Dropdown(controls.site_dropdown.clone()),
            LayoutNode::Break,
            LayoutNode::Graph {
                id: OutputId::SuccessPieChart,
            },
            LayoutNode::Break,
            LayoutNode::Paragraph {
                text: PAYLOAD_LABEL.to_string(),
            },
            LayoutNode::RangeSlider(controls.payload_slider.clone()),
            LayoutNode::Break,
            LayoutNode::Break,
            LayoutNode::Graph {
                id: OutputId::SuccessPayloadScatterChart,
            },
        ],
    }
}

/// Everything the page script needs for its first paint.
#[derive(Debug, Clone, Serialize)]
pub struct PageBootstrap<'a> {
    pub layout: &'a LayoutNode,
    pub state: &'a ControlState,
    pub figures: &'a [ChartUpdate],
}

/// Render the HTML document with the bootstrap data embedded.
pub fn render_page(bootstrap: &PageBootstrap<'_>) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(bootstrap)?;
    // Keep the payload from closing its <script> element.
    let json = json.replace("</", "<\\/");
    Ok(PAGE_SHELL
        .replace(TITLE_PLACEHOLDER, PAGE_TITLE)
        .replace(BOOTSTRAP_PLACEHOLDER, &json))
}
