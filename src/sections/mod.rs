//! Report sections.
//!
//! A section is one self-contained block of a report. The report only asks two
//! things of it: whether it has anything to show ([`Section::is_valid`]) and to
//! write itself into the document ([`Section::render`]). Sections that are not
//! valid are skipped when the report is saved.

mod code;
mod image;
mod text;

pub use code::CodeSection;
pub use image::ImageSection;
pub use text::TextSection;

use crate::document::MarkdownDocument;

/// Contract implemented by every entry of a report, including caller-defined ones.
pub trait Section {
    /// Heading shown above the section.
    fn heading(&self) -> &str;

    /// Whether the section is rendered. Must not have side effects.
    fn is_valid(&self) -> bool;

    /// Writes the section into the shared document.
    fn render(&self, document: &mut dyn MarkdownDocument);
}
