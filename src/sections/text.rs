use super::Section;
use crate::document::MarkdownDocument;

/// Heading followed by a paragraph of prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSection {
    heading: String,
    text: String,
}

impl TextSection {
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Section for TextSection {
    fn heading(&self) -> &str {
        &self.heading
    }

    fn is_valid(&self) -> bool {
        !self.text.is_empty()
    }

    fn render(&self, document: &mut dyn MarkdownDocument) {
        document.new_header(1, &self.heading);
        document.new_paragraph(&self.text);
        document.new_line("");
    }
}
