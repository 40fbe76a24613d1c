//! Accordion toggle: the clickable header of an accordion item.

use crate::heading::HeadingLevel;
use crate::node::{self, Attribute, Node, Render};

pub const TOGGLE_CLASS: &str = "pf-c-accordion__toggle";
pub const TOGGLE_TEXT_CLASS: &str = "pf-c-accordion__toggle-text";
pub const TOGGLE_ICON_CLASS: &str = "pf-c-accordion__toggle-icon";
pub const EXPANDED_CLASS: &str = "pf-m-expanded";

#[derive(Debug, Clone)]
pub struct ToggleOptions {
    pub class_name: Option<String>,
    pub id: String,
    pub component: Render,
    pub is_expanded: bool,
    pub heading_level: HeadingLevel,
    pub children: Vec<Node>,
    pub attributes: Vec<Attribute>,
}

/// Builder for an accordion toggle.
///
/// Every setter consumes the builder and hands back a new one; clone a
/// configured toggle to reuse it.
#[derive(Debug, Clone)]
pub struct Toggle {
    options: ToggleOptions,
}

impl Toggle {
    /// The id is used as-is, empty and duplicate ids included.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            options: ToggleOptions {
                class_name: None,
                id: id.into(),
                component: node::button,
                is_expanded: false,
                heading_level: HeadingLevel::default(),
                children: Vec::new(),
                attributes: Vec::new(),
            },
        }
    }

    pub fn options(&self) -> &ToggleOptions {
        &self.options
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.class_name = Some(class_name.into());
        self
    }

    /// Replace the element rendered for the toggle (a `button` by default).
    pub fn with_component(mut self, component: Render) -> Self {
        self.options.component = component;
        self
    }

    pub fn with_expanded(mut self, is_expanded: bool) -> Self {
        self.options.is_expanded = is_expanded;
        self
    }

    /// Ignored when the toggle is rendered by an accordion, which applies its own level.
    pub fn with_heading_level(mut self, heading_level: HeadingLevel) -> Self {
        self.options.heading_level = heading_level;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.options.children.push(child);
        self
    }

    pub fn set_children(mut self, children: Vec<Node>) -> Self {
        self.options.children = children;
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

    pub fn to_html(&self, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
        self.render_with_heading(self.options.heading_level, attributes, children)
    }

    /// Render wrapped in `heading_level`'s tag instead of the configured one.
    pub fn render_with_heading(
        &self,
        heading_level: HeadingLevel,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Node {
        let opts = &self.options;
        log::trace!(
            "rendering toggle '{}' (expanded: {}, heading: {:?})",
            opts.id,
            opts.is_expanded,
            heading_level
        );

        let class_name = opts.class_name.as_deref().unwrap_or_default();
        let classes = node::class_list(&[
            (TOGGLE_CLASS, true),
            (EXPANDED_CLASS, opts.is_expanded),
            (class_name, opts.class_name.is_some()),
        ]);

        let mut attrs = opts.attributes.clone();
        attrs.extend(attributes);
        attrs.push(node::attribute("id", opts.id.as_str()));
        attrs.push(node::attribute(
            "aria-expanded",
            opts.is_expanded.to_string(),
        ));
        attrs.push(node::attribute("type", "button"));
        attrs.push(classes);

        let mut text_children = opts.children.clone();
        text_children.extend(children);

        let toggle = (opts.component)(
            attrs,
            vec![
                node::span(
                    vec![node::attribute("class", TOGGLE_TEXT_CLASS)],
                    text_children,
                ),
                node::span(vec![node::attribute("class", TOGGLE_ICON_CLASS)], vec![icon()]),
            ],
        );

        node::element(heading_level.tag(), Vec::new(), vec![toggle])
    }
}

fn icon() -> Node {
    node::i(
        vec![
            node::attribute("class", "fas fa-angle-right"),
            node::attribute("aria-hidden", "true"),
        ],
        Vec::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{text, AttributeValue};

    fn inner(node: &Node) -> &Node {
        &node.children()[0]
    }

    fn link(attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
        node::element("a", attributes, children)
    }

    #[test]
    fn test_default_toggle_markup() {
        let html = Toggle::new("item-1").to_html(vec![], vec![text("Item one")]).to_html();
        assert_eq!(
            html,
            concat!(
                r#"<h3><button id="item-1" aria-expanded="false" type="button" class="pf-c-accordion__toggle">"#,
                r#"<span class="pf-c-accordion__toggle-text">Item one</span>"#,
                r#"<span class="pf-c-accordion__toggle-icon"><i class="fas fa-angle-right" aria-hidden="true"></i></span>"#,
                r#"</button></h3>"#
            )
        );
    }

    #[test]
    fn test_expanded_adds_modifier() {
        let node = Toggle::new("t").with_expanded(true).to_html(vec![], vec![]);
        let button = inner(&node);
        assert_eq!(button.classes(), vec![TOGGLE_CLASS, EXPANDED_CLASS]);
        assert_eq!(
            button.attribute("aria-expanded").and_then(Attribute::value),
            Some("true")
        );

        let collapsed = Toggle::new("t").with_expanded(false).to_html(vec![], vec![]);
        assert_eq!(inner(&collapsed).classes(), vec![TOGGLE_CLASS]);
    }

    #[test]
    fn test_custom_class_name() {
        let node = Toggle::new("t").with_class_name("mine").to_html(vec![], vec![]);
        assert_eq!(inner(&node).classes(), vec![TOGGLE_CLASS, "mine"]);
    }

    #[test]
    fn test_heading_levels() {
        for level in HeadingLevel::ALL {
            let node = Toggle::new("t").with_heading_level(level).to_html(vec![], vec![]);
            assert_eq!(node.tag(), Some(level.tag()));
        }
    }

    #[test]
    fn test_render_with_heading_overrides_configured_level() {
        let toggle = Toggle::new("t").with_heading_level(HeadingLevel::H1);
        let node = toggle.render_with_heading(HeadingLevel::H5, vec![], vec![]);
        assert_eq!(node.tag(), Some("h5"));
        assert_eq!(toggle.options().heading_level, HeadingLevel::H1);
    }

    #[test]
    fn test_custom_component_keeps_button_type() {
        let node = Toggle::new("t").with_component(link).to_html(vec![], vec![]);
        let anchor = inner(&node);
        assert_eq!(anchor.tag(), Some("a"));
        assert_eq!(
            anchor.attribute("type").map(|a| a.value.clone()),
            Some(AttributeValue::Text {
                value: "button".to_string()
            })
        );
    }

    #[test]
    fn test_children_order_and_override() {
        let node = Toggle::new("t")
            .with_child(text("dropped"))
            .set_children(vec![text("a"), text("b")])
            .with_child(text("c"))
            .to_html(vec![], vec![text("d")]);
        let text_span = &inner(&node).children()[0];
        assert_eq!(text_span.text_content(), "abcd");
    }

    #[test]
    fn test_attributes_order_and_override() {
        let node = Toggle::new("t")
            .with_attribute(node::attribute("data-dropped", "1"))
            .set_attributes(vec![
                node::attribute("data-a", "1"),
                node::attribute("data-b", "2"),
            ])
            .to_html(vec![node::attribute("data-c", "3")], vec![]);
        let names: Vec<&str> = inner(&node)
            .attributes()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["data-a", "data-b", "data-c", "id", "aria-expanded", "type", "class"]
        );
    }

    #[test]
    fn test_fixed_attributes_win_over_caller_attributes() {
        let html = Toggle::new("t")
            .with_attribute(node::attribute("type", "submit"))
            .to_html(vec![node::attribute("id", "caller")], vec![])
            .to_html();
        assert!(html.starts_with(
            r#"<h3><button type="button" id="t" aria-expanded="false" class="pf-c-accordion__toggle">"#
        ));
        assert!(!html.contains("submit"));
        assert!(!html.contains("caller"));
    }

    #[test]
    fn test_empty_id_is_accepted() {
        let node = Toggle::new("").to_html(vec![], vec![]);
        assert_eq!(inner(&node).attribute("id").and_then(Attribute::value), Some(""));
    }
}
