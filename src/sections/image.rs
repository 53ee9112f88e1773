use super::Section;
use crate::document::MarkdownDocument;

/// Heading followed by an inline reference to an image on disk.
///
/// The image itself is written by the report when the section is added; this
/// type only carries the link target, relative to the report directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSection {
    heading: String,
    image_path: String,
}

impl ImageSection {
    pub fn new(heading: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            image_path: image_path.into(),
        }
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }
}

impl Section for ImageSection {
    fn heading(&self) -> &str {
        &self.heading
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn render(&self, document: &mut dyn MarkdownDocument) {
        document.new_header(1, &self.heading);
        document.new_line("");
        document.new_line(&format!("![{}]({})", self.heading, self.image_path));
        document.new_line("");
    }
}
