//! Accordion content: the collapsible body of an accordion item.

use crate::heading::HeadingLevel;
use crate::node::{self, Attribute, Node};
use crate::toggle::EXPANDED_CLASS;

pub const CONTENT_CLASS: &str = "pf-c-accordion__expanded-content";
pub const CONTENT_BODY_CLASS: &str = "pf-c-accordion__expanded-content-body";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOptions {
    pub class_name: Option<String>,
    pub is_hidden: bool,
    pub children: Vec<Node>,
    pub attributes: Vec<Attribute>,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            class_name: None,
            is_hidden: true,
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

/// Builder for an accordion content panel. Hidden until told otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    options: ContentOptions,
}

impl Content {
    pub fn options(&self) -> &ContentOptions {
        &self.options
    }

    pub fn with_hidden(mut self, is_hidden: bool) -> Self {
        self.options.is_hidden = is_hidden;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.class_name = Some(class_name.into());
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
        self.render_in(HeadingLevel::default(), attributes, children)
    }

    /// Render as a child of an accordion using `heading_level`; a definition
    /// list accordion needs `dd` panels.
    pub fn render_in(
        &self,
        heading_level: HeadingLevel,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Node {
        let opts = &self.options;
        log::trace!("rendering content panel (hidden: {})", opts.is_hidden);

        let class_name = opts.class_name.as_deref().unwrap_or_default();
        let classes = node::class_list(&[
            (CONTENT_CLASS, true),
            (EXPANDED_CLASS, !opts.is_hidden),
            (class_name, opts.class_name.is_some()),
        ]);

        let mut attrs = opts.attributes.clone();
        attrs.extend(attributes);
        if opts.is_hidden {
            attrs.push(node::flag("hidden"));
        }
        attrs.push(classes);

        let mut body = opts.children.clone();
        body.extend(children);

        node::element(
            heading_level.content_tag(),
            attrs,
            vec![node::div(
                vec![node::attribute("class", CONTENT_BODY_CLASS)],
                body,
            )],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::text;

    #[test]
    fn test_default_content_is_hidden() {
        let node = Content::default().to_html(vec![], vec![text("Body")]);
        assert_eq!(
            node.to_html(),
            concat!(
                r#"<div hidden class="pf-c-accordion__expanded-content">"#,
                r#"<div class="pf-c-accordion__expanded-content-body">Body</div></div>"#
            )
        );
    }

    #[test]
    fn test_visible_content_is_expanded() {
        let node = Content::default().with_hidden(false).to_html(vec![], vec![]);
        assert_eq!(node.classes(), vec![CONTENT_CLASS, EXPANDED_CLASS]);
        assert!(node.attribute("hidden").is_none());
    }

    #[test]
    fn test_custom_class_and_definition_list_tag() {
        let node = Content::default()
            .with_class_name("extra")
            .render_in(HeadingLevel::DefinitionList, vec![], vec![]);
        assert_eq!(node.tag(), Some("dd"));
        assert_eq!(node.classes(), vec![CONTENT_CLASS, "extra"]);
    }

    #[test]
    fn test_set_children_and_attributes_replace() {
        let node = Content::default()
            .with_child(text("dropped"))
            .with_attribute(node::attribute("data-dropped", "1"))
            .set_children(vec![text("x"), text("y")])
            .set_attributes(vec![node::attribute("id", "panel")])
            .with_hidden(false)
            .to_html(vec![], vec![]);
        assert_eq!(node.text_content(), "xy");
        let names: Vec<&str> = node.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "class"]);
    }
}
