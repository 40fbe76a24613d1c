//! Accordion container builder.
//!
//! ```
//! use shared::{Accordion, AccordionItem, Content, DisplaySize, Toggle};
//! use shared::node::text;
//!
//! let node = Accordion::default()
//!     .with_border(true)
//!     .with_display_size(DisplaySize::Large)
//!     .with_accordion_item(AccordionItem::new(
//!         Toggle::new("item-1").with_child(text("Item one")),
//!         Content::default().with_child(text("Body")),
//!     ))
//!     .to_html(vec![], vec![]);
//!
//! assert_eq!(node.classes(), vec!["pf-c-accordion", "pf-m-bordered", "pf-m-display-lg"]);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::accordion_item::AccordionItem;
use crate::error::ParseError;
use crate::heading::HeadingLevel;
use crate::node::{self, Attribute, Node};

pub const ACCORDION_CLASS: &str = "pf-c-accordion";
pub const BORDERED_CLASS: &str = "pf-m-bordered";
pub const DISPLAY_LARGE_CLASS: &str = "pf-m-display-lg";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySize {
    #[default]
    Default,
    Large,
}

impl FromStr for DisplaySize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(DisplaySize::Default),
            "large" | "lg" => Ok(DisplaySize::Large),
            _ => Err(ParseError::DisplaySize(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccordionOptions {
    pub class_name: Option<String>,
    pub display_size: DisplaySize,
    pub heading_level: HeadingLevel,
    pub is_bordered: bool,
    pub items: Vec<AccordionItem>,
    pub attributes: Vec<Attribute>,
}

/// Builder for a `pf-c-accordion` container.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    options: AccordionOptions,
}

impl Accordion {
    pub fn options(&self) -> &AccordionOptions {
        &self.options
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.class_name = Some(class_name.into());
        self
    }

    pub fn with_display_size(mut self, display_size: DisplaySize) -> Self {
        self.options.display_size = display_size;
        self
    }

    /// Applied to every item's toggle at render time.
    pub fn with_heading_level(mut self, heading_level: HeadingLevel) -> Self {
        self.options.heading_level = heading_level;
        self
    }

    pub fn with_border(mut self, is_bordered: bool) -> Self {
        self.options.is_bordered = is_bordered;
        self
    }

    pub fn with_accordion_item(mut self, item: AccordionItem) -> Self {
        self.options.items.push(item);
        self
    }

    pub fn set_accordion_items(mut self, items: Vec<AccordionItem>) -> Self {
        self.options.items = items;
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.options.attributes.push(attribute);
        self
    }

    pub fn set_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.options.attributes = attributes;
        self
    }

    /// Render the container. Caller attributes follow the configured ones and
    /// caller children follow the rendered items.
    pub fn to_html(&self, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
        let opts = &self.options;
        log::trace!(
            "rendering accordion with {} items (heading: {:?})",
            opts.items.len(),
            opts.heading_level
        );

        let class_name = opts.class_name.as_deref().unwrap_or_default();
        let classes = node::class_list(&[
            (ACCORDION_CLASS, true),
            (BORDERED_CLASS, opts.is_bordered),
            (DISPLAY_LARGE_CLASS, opts.display_size == DisplaySize::Large),
            (class_name, opts.class_name.is_some()),
        ]);

        let mut attrs = opts.attributes.clone();
        attrs.extend(attributes);
        attrs.push(classes);

        let mut nodes: Vec<Node> = opts
            .items
            .iter()
            .flat_map(|item| item.render(opts.heading_level))
            .collect();
        nodes.extend(children);

        node::element(opts.heading_level.container_tag(), attrs, nodes)
    }
}
