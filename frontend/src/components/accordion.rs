use leptos::*;
use shared::Accordion;

use crate::render::into_view;

/// Mounts an accordion builder's markup.
#[component]
pub fn AccordionView(
    accordion: Accordion,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let accordion = match class {
        Some(extra) => accordion.with_class_name(extra),
        None => accordion,
    };

    into_view(&accordion.to_html(Vec::new(), Vec::new()))
}
