//! PatternFly accordion builders rendering to a small node tree.

pub mod accordion;
pub mod accordion_item;
pub mod content;
pub mod error;
pub mod gallery;
pub mod heading;
pub mod node;
pub mod toggle;
pub mod types;

pub use accordion::{Accordion, AccordionOptions, DisplaySize};
pub use accordion_item::AccordionItem;
pub use content::{Content, ContentOptions};
pub use error::ParseError;
pub use heading::HeadingLevel;
pub use node::{Attribute, AttributeValue, Node};
pub use toggle::{Toggle, ToggleOptions};
pub use types::*;
