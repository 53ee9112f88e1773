//! The report aggregate.
//!
//! A [`Report`] owns an ordered list of sections and the document they are
//! rendered into. Sections are rendered in the order they were added; the
//! order is the layout of the final markdown file.

pub mod layout;

pub use layout::{ReportLayout, FIGURE_EXTENSION};

use crate::config::ReportSettings;
use crate::document::{MarkdownDocument, MarkdownFile};
use crate::figures::Figure;
use crate::sections::{CodeSection, ImageSection, Section, TextSection};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Markdown report written to `<save_directory>/<file_name>.md`.
pub struct Report<D = MarkdownFile> {
    layout: ReportLayout,
    file_name: String,
    title: String,
    settings: ReportSettings,
    document: D,
    sections: Vec<Box<dyn Section>>,
}

impl Report<MarkdownFile> {
    /// Opens a report with [`ReportSettings::default`] (300 dpi, author "Unknown").
    pub fn new(save_directory: impl Into<PathBuf>, file_name: &str, title: &str) -> Result<Self> {
        Self::with_settings(save_directory, file_name, title, ReportSettings::default())
    }

    /// Creates the save directory if needed and targets `<file_name>.md` inside it.
    pub fn with_settings(
        save_directory: impl Into<PathBuf>,
        file_name: &str,
        title: &str,
        settings: ReportSettings,
    ) -> Result<Self> {
        let layout = ReportLayout::new(save_directory, file_name, &settings.figures_dir);
        let document = MarkdownFile::new(&layout.markdown_path, title, &settings.author);
        Self::assemble(layout, file_name, title, settings, document)
    }
}

impl<D: MarkdownDocument> Report<D> {
    /// Same as [`Report::with_settings`] but renders into a caller-supplied document.
    pub fn with_document(
        save_directory: impl Into<PathBuf>,
        file_name: &str,
        title: &str,
        settings: ReportSettings,
        document: D,
    ) -> Result<Self> {
        let layout = ReportLayout::new(save_directory, file_name, &settings.figures_dir);
        Self::assemble(layout, file_name, title, settings, document)
    }

    fn assemble(
        layout: ReportLayout,
        file_name: &str,
        title: &str,
        settings: ReportSettings,
        document: D,
    ) -> Result<Self> {
        if file_name.is_empty() {
            bail!("Report file name must not be empty");
        }
        if file_name.contains(|c: char| c == '/' || c == '\\') {
            bail!("Report file name must not contain path separators: {file_name}");
        }
        settings.validate()?;
        layout.ensure_save_directory()?;
        debug!(
            path = %layout.markdown_path.display(),
            dpi = settings.dpi,
            "opened report"
        );
        Ok(Self {
            layout,
            file_name: file_name.to_string(),
            title: title.to_string(),
            settings,
            document,
            sections: Vec::new(),
        })
    }

    /// Appends a text section. Empty text is accepted here and skipped on save.
    pub fn add_text_report(&mut self, heading: impl Into<String>, text: impl Into<String>) {
        self.sections.push(Box::new(TextSection::new(heading, text)));
    }

    /// Saves `figure` under the figures folder and appends a section linking it.
    ///
    /// The image is named after the number of sections already in the report,
    /// so every image gets a distinct index no matter what kind of sections
    /// precede it. Returns the path the image was written to.
    pub fn add_image_report<F>(
        &mut self,
        heading: impl Into<String>,
        figure: &F,
    ) -> Result<PathBuf>
    where
        F: Figure + ?Sized,
    {
        let image_path = self.layout.figure_path(self.sections.len());
        if self.layout.ensure_figures_dir()? {
            debug!(path = %self.layout.figures_dir.display(), "created figures folder");
        }
        figure
            .save_figure(&image_path, self.settings.dpi)
            .with_context(|| format!("Failed to save figure {}", image_path.display()))?;
        let link = self.layout.relative_link(&image_path)?;
        debug!(path = %image_path.display(), dpi = self.settings.dpi, "saved figure");
        self.sections.push(Box::new(ImageSection::new(heading, link)));
        Ok(image_path)
    }

    /// Appends a code section. Pass an empty `language` for an untagged fence.
    pub fn add_code_report(
        &mut self,
        heading: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
    ) {
        self.sections
            .push(Box::new(CodeSection::new(heading, code, language)));
    }

    /// Appends any other kind of section.
    pub fn add_section(&mut self, section: Box<dyn Section>) {
        self.sections.push(section);
    }

    /// Renders every valid section and writes the markdown file.
    ///
    /// Each call starts from an empty document, so saving twice without adding
    /// sections produces the same file.
    pub fn save_report(&mut self) -> Result<PathBuf> {
        let rendered = self.render_sections();
        let path = self.document.write_to_disk()?;
        info!(
            path = %path.display(),
            sections = self.sections.len(),
            rendered,
            "saved report"
        );
        Ok(path)
    }

    /// Markdown the next [`Report::save_report`] would write, without touching disk.
    pub fn render_markdown(&mut self) -> String {
        self.render_sections();
        self.document.contents()
    }

    fn render_sections(&mut self) -> usize {
        self.document.reset();
        let mut rendered = 0;
        for (index, section) in self.sections.iter().enumerate() {
            if !section.is_valid() {
                debug!(index, heading = section.heading(), "skipping empty section");
                continue;
            }
            section.render(&mut self.document);
            rendered += 1;
        }
        rendered
    }

    pub fn sections(&self) -> &[Box<dyn Section>] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn save_directory(&self) -> &Path {
        &self.layout.save_directory
    }

    pub fn markdown_path(&self) -> &Path {
        &self.layout.markdown_path
    }

    pub fn figures_dir(&self) -> &Path {
        &self.layout.figures_dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}
