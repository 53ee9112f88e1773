use super::Section;
use crate::document::MarkdownDocument;

/// Heading followed by a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSection {
    heading: String,
    code: String,
    language: String,
}

impl CodeSection {
    /// An empty `language` renders an untagged fence.
    pub fn new(
        heading: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            code: code.into(),
            language: language.into(),
        }
    }

    pub fn without_language(heading: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(heading, code, String::new())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Section for CodeSection {
    fn heading(&self) -> &str {
        &self.heading
    }

    fn is_valid(&self) -> bool {
        !self.code.is_empty()
    }

    fn render(&self, document: &mut dyn MarkdownDocument) {
        document.new_header(1, &self.heading);
        document.insert_code(&self.code, &self.language);
        document.new_line("");
    }
}
