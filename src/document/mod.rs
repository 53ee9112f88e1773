//! Markdown emission.
//!
//! Sections never format markdown files themselves; they call the primitives
//! on a [`MarkdownDocument`] handle which accumulates text and later persists
//! it. [`MarkdownFile`] is the handle used by default.

mod markdown_file;

pub use markdown_file::MarkdownFile;

use anyhow::Result;
use std::path::PathBuf;

/// Accumulates markdown for one output file.
pub trait MarkdownDocument {
    /// Appends a header of the given level (1 = `#`).
    fn new_header(&mut self, level: usize, title: &str);

    /// Appends a paragraph separated from the previous content by a blank line.
    fn new_paragraph(&mut self, text: &str);

    /// Appends a raw line. Inline markdown such as image links passes through.
    fn new_line(&mut self, text: &str);

    /// Appends a fenced code block. An empty `language` leaves the fence untagged.
    fn insert_code(&mut self, code: &str, language: &str);

    /// Drops every body element appended so far. Title and target path stay.
    fn reset(&mut self);

    /// Full document text as it would be written to disk.
    fn contents(&self) -> String;

    /// Writes the document to its target path, overwriting any previous file.
    fn write_to_disk(&mut self) -> Result<PathBuf>;
}
