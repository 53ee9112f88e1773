use super::MarkdownDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSION: &str = "md";

/// Markdown document backed by a single file on disk.
///
/// Nothing touches the filesystem until [`MarkdownDocument::write_to_disk`].
#[derive(Debug, Clone)]
pub struct MarkdownFile {
    path: PathBuf,
    title: String,
    author: String,
    body: String,
}

impl MarkdownFile {
    /// `path` may omit the `.md` extension, it is appended when missing.
    pub fn new(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let mut path = path.into();
        if path.extension().and_then(|ext| ext.to_str()) != Some(MARKDOWN_EXTENSION) {
            let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
            name.push(".");
            name.push(MARKDOWN_EXTENSION);
            path.set_file_name(name);
        }
        Self {
            path,
            title: title.into(),
            author: author.into(),
            body: String::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    fn title_block(&self) -> String {
        if self.title.is_empty() {
            return String::new();
        }
        let underline = "=".repeat(self.title.chars().count());
        format!("\n{}\n{underline}\n", self.title)
    }
}

impl MarkdownDocument for MarkdownFile {
    fn new_header(&mut self, level: usize, title: &str) {
        let marks = "#".repeat(level.max(1));
        self.body.push_str(&format!("\n{marks} {title}\n"));
    }

    fn new_paragraph(&mut self, text: &str) {
        self.body.push_str("\n\n");
        self.body.push_str(text);
    }

    fn new_line(&mut self, text: &str) {
        self.body.push('\n');
        self.body.push_str(text);
    }

    fn insert_code(&mut self, code: &str, language: &str) {
        self.body.push_str(&format!("\n\n```{language}\n{code}\n```"));
    }

    fn reset(&mut self) {
        self.body.clear();
    }

    fn contents(&self) -> String {
        let mut out = self.title_block();
        out.push_str(&self.body);
        out
    }

    fn write_to_disk(&mut self) -> Result<PathBuf> {
        fs::write(&self.path, self.contents())
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(self.path.clone())
    }
}
