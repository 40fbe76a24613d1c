//! Sample accordions shown by both the server-rendered page and the
//! client-side app.

use crate::accordion::{Accordion, DisplaySize};
use crate::accordion_item::AccordionItem;
use crate::content::Content;
use crate::heading::HeadingLevel;
use crate::node::text;
use crate::toggle::Toggle;

const ITEMS: &[(&str, &str)] = &[
    ("Item one", "Vivamus et tortor sed arcu congue vehicula eget et diam."),
    ("Item two", "Praesent et ante sit amet est pulvinar tempor."),
    ("Item three", "Morbi vitae urna quis nunc convallis hendrerit."),
];

pub struct Example {
    pub title: &'static str,
    pub accordion: Accordion,
}

fn items(prefix: &str, expanded: usize) -> Vec<AccordionItem> {
    ITEMS
        .iter()
        .enumerate()
        .map(|(index, (title, body))| {
            let is_expanded = index == expanded;
            AccordionItem::new(
                Toggle::new(format!("{}-toggle-{}", prefix, index + 1))
                    .with_expanded(is_expanded)
                    .with_child(text(*title)),
                Content::default()
                    .with_hidden(!is_expanded)
                    .with_child(text(*body)),
            )
        })
        .collect()
}

pub fn examples() -> Vec<Example> {
    vec![
        Example {
            title: "Default",
            accordion: Accordion::default().set_accordion_items(items("default", 0)),
        },
        Example {
            title: "Bordered, large",
            accordion: Accordion::default()
                .with_border(true)
                .with_display_size(DisplaySize::Large)
                .set_accordion_items(items("bordered", 1)),
        },
        Example {
            title: "Definition list",
            accordion: Accordion::default()
                .with_heading_level(HeadingLevel::DefinitionList)
                .set_accordion_items(items("definition", usize::MAX)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_have_unique_toggle_ids() {
        let mut ids: Vec<String> = examples()
            .iter()
            .flat_map(|e| e.accordion.options().items.clone())
            .map(|item| item.toggle().options().id.clone())
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 9);
    }

    #[test]
    fn test_only_one_item_expanded_per_example() {
        let examples = examples();
        let expanded: Vec<usize> = examples
            .iter()
            .map(|e| {
                e.accordion
                    .options()
                    .items
                    .iter()
                    .filter(|item| item.toggle().options().is_expanded)
                    .count()
            })
            .collect();
        assert_eq!(expanded, vec![1, 1, 0]);
    }
}
