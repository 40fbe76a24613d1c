use crate::content::Content;
use crate::heading::HeadingLevel;
use crate::node::Node;
use crate::toggle::Toggle;

/// A toggle and the content panel it controls.
#[derive(Debug, Clone)]
pub struct AccordionItem {
    toggle: Toggle,
    content: Content,
}

impl AccordionItem {
    pub fn new(toggle: Toggle, content: Content) -> Self {
        Self { toggle, content }
    }

    pub fn toggle(&self) -> &Toggle {
        &self.toggle
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn with_toggle(mut self, toggle: Toggle) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Render the toggle under `heading_level`, whatever level it was given.
    pub fn render(&self, heading_level: HeadingLevel) -> Vec<Node> {
        vec![
            self.toggle
                .render_with_heading(heading_level, Vec::new(), Vec::new()),
            self.content.render_in(heading_level, Vec::new(), Vec::new()),
        ]
    }
}
