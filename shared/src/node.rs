//! Minimal renderable node tree.
//!
//! Builders produce [`Node`] values; the backend serialises them to HTML
//! strings and the frontend converts them into Leptos views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elements that never take children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Signature shared by every tag-rendering function, e.g. [`button`].
pub type Render = fn(Vec<Attribute>, Vec<Node>) -> Node;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AttributeValue {
    Text { value: String },
    /// Boolean attribute, rendered as a bare name (`hidden`).
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            AttributeValue::Text { value } => Some(value),
            AttributeValue::Flag => None,
        }
    }

    pub fn is_class(&self) -> bool {
        self.name == "class"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Node {
    Element {
        tag: String,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    },
    Text { text: String },
}

impl Node {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text { .. } => None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Node::Element { attributes, .. } => attributes,
            Node::Text { .. } => &[],
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Last value of the named attribute. Class attributes are merged, see
    /// [`Node::classes`].
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes().iter().rev().find(|a| a.name == name)
    }

    /// Class tokens from every `class` attribute on the element, in order.
    pub fn classes(&self) -> Vec<&str> {
        self.attributes()
            .iter()
            .filter(|a| a.is_class())
            .filter_map(Attribute::value)
            .flat_map(str::split_whitespace)
            .collect()
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { text } => text.clone(),
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect()
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { text } => f.write_str(&escape(text)),
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                if !is_valid_name(tag) {
                    log::warn!("Dropping element with invalid tag name {:?}", tag);
                    for child in children {
                        write!(f, "{}", child)?;
                    }
                    return Ok(());
                }
                write!(f, "<{}", tag)?;

                let classes = self.classes();
                let mut written: Vec<&str> = Vec::new();
                for attr in attributes {
                    let name = attr.name.as_str();
                    if written.contains(&name) {
                        continue;
                    }
                    written.push(name);

                    if !is_valid_name(name) {
                        log::warn!("Dropping attribute with invalid name {:?}", name);
                        continue;
                    }
                    if attr.is_class() {
                        // All class attributes collapse into the first one.
                        if !classes.is_empty() {
                            write!(f, " class=\"{}\"", escape(&classes.join(" ")))?;
                        }
                        continue;
                    }
                    // Written where the name first appears, with its last value.
                    let last = self.attribute(name).unwrap_or(attr);
                    match &last.value {
                        AttributeValue::Text { value } => {
                            write!(f, " {}=\"{}\"", name, escape(value))?
                        }
                        AttributeValue::Flag => write!(f, " {}", name)?,
                    }
                }
                f.write_str(">")?;

                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return Ok(());
                }
                for child in children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", tag)
            }
        }
    }
}

/// The render primitive: an element with the given tag, attributes and children.
pub fn element(tag: &str, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    Node::Element {
        tag: tag.to_string(),
        attributes,
        children,
    }
}

pub fn text(text: impl Into<String>) -> Node {
    Node::Text { text: text.into() }
}

pub fn attribute(name: &str, value: impl Into<String>) -> Attribute {
    Attribute {
        name: name.to_string(),
        value: AttributeValue::Text {
            value: value.into(),
        },
    }
}

pub fn flag(name: &str) -> Attribute {
    Attribute {
        name: name.to_string(),
        value: AttributeValue::Flag,
    }
}

/// Build a single class attribute from `(name, included)` pairs.
pub fn class_list(classes: &[(&str, bool)]) -> Attribute {
    let joined = classes
        .iter()
        .filter(|(name, included)| *included && !name.is_empty())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ");
    attribute("class", joined)
}

pub fn div(attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    element("div", attributes, children)
}

pub fn span(attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    element("span", attributes, children)
}

pub fn button(attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    element("button", attributes, children)
}

pub fn i(attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    element("i", attributes, children)
}

/// Whether `name` can be written as a tag or attribute name without
/// breaking out of the markup.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
