use serde::{Deserialize, Serialize};

use crate::accordion::{Accordion, DisplaySize};
use crate::accordion_item::AccordionItem;
use crate::content::Content;
use crate::heading::HeadingLevel;
use crate::node::{self, Node};
use crate::toggle::Toggle;

// ============================================================================
// Render Requests
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccordionRequest {
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub display_size: DisplaySize,
    #[serde(default)]
    pub heading_level: HeadingLevel,
    #[serde(default)]
    pub bordered: bool,
    #[serde(default)]
    pub items: Vec<AccordionItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccordionItemRequest {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub expanded: bool,
}

impl AccordionRequest {
    pub fn to_accordion(&self) -> Accordion {
        let mut accordion = Accordion::default()
            .with_display_size(self.display_size)
            .with_heading_level(self.heading_level)
            .with_border(self.bordered)
            .set_accordion_items(self.items.iter().map(AccordionItemRequest::to_item).collect());
        if let Some(ref class_name) = self.class_name {
            accordion = accordion.with_class_name(class_name.as_str());
        }
        accordion
    }
}

impl AccordionItemRequest {
    pub fn to_item(&self) -> AccordionItem {
        let title: Vec<Node> = self.title.iter().map(|t| node::text(t.as_str())).collect();
        let body: Vec<Node> = self.body.iter().map(|b| node::text(b.as_str())).collect();

        AccordionItem::new(
            Toggle::new(self.id.as_str())
                .with_expanded(self.expanded)
                .set_children(title),
            Content::default()
                .with_hidden(!self.expanded)
                .set_children(body),
        )
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedComponent {
    pub html: String,
    pub node: Node,
}

impl From<Node> for RenderedComponent {
    fn from(node: Node) -> Self {
        Self {
            html: node.to_html(),
            node,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Tests
// ============================================================================
