use leptos::*;
use shared::node::{is_valid_name, AttributeValue, Node};

/// Turn a rendered node tree into Leptos DOM elements.
///
/// Class attributes are merged and invalid names dropped, the same way the
/// HTML output does.
pub fn into_view(node: &Node) -> View {
    match node {
        Node::Text { text } => text.clone().into_view(),
        Node::Element {
            tag,
            attributes,
            children,
        } => {
            if !is_valid_name(tag) {
                return children.iter().map(into_view).collect_view();
            }
            let mut el = leptos::html::custom(leptos::html::Custom::new(tag.clone()));

            for attr in attributes.iter().filter(|a| !a.is_class() && is_valid_name(&a.name))
            {
                el = match &attr.value {
                    AttributeValue::Text { value } => el.attr(attr.name.clone(), value.clone()),
                    AttributeValue::Flag => el.attr(attr.name.clone(), true),
                };
            }

            let classes = node.classes();
            if !classes.is_empty() {
                el = el.attr("class", classes.join(" "));
            }

            for child in children {
                el = el.child(into_view(child));
            }

            el.into_view()
        }
    }
}
