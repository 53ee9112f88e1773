//! Filesystem layout of a single report.
//!
//! ```text
//! <save_directory>/<file_name>.md
//! <save_directory>/<figures_dir>/<file_name>_<index>.png
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Extension of every figure image produced by a report.
pub const FIGURE_EXTENSION: &str = "png";

/// Locates every path a report reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub save_directory: PathBuf,
    pub markdown_path: PathBuf,
    pub figures_dir: PathBuf,
    file_name: String,
}

impl ReportLayout {
    pub fn new(save_directory: impl Into<PathBuf>, file_name: &str, figures_dir: &str) -> Self {
        let save_directory = save_directory.into();
        let markdown_path = save_directory.join(format!("{file_name}.md"));
        let figures_dir = save_directory.join(figures_dir);
        Self {
            save_directory,
            markdown_path,
            figures_dir,
            file_name: file_name.to_string(),
        }
    }

    /// Path of the figure stored for the section at `index`.
    pub fn figure_path(&self, index: usize) -> PathBuf {
        self.figures_dir
            .join(format!("{}_{index}.{FIGURE_EXTENSION}", self.file_name))
    }

    /// Markdown link target for `path`, relative to the save directory.
    pub fn relative_link(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(&self.save_directory).with_context(|| {
            format!(
                "{} is outside report directory {}",
                path.display(),
                self.save_directory.display()
            )
        })?;
        Ok(to_link(relative))
    }

    /// Creates the save directory. Succeeds when it already exists.
    pub fn ensure_save_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.save_directory).with_context(|| {
            format!(
                "Failed to create report directory {}",
                self.save_directory.display()
            )
        })
    }

    /// Creates the figures folder if missing. Returns true when it was created.
    pub fn ensure_figures_dir(&self) -> Result<bool> {
        if self.figures_dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.figures_dir).with_context(|| {
            format!(
                "Failed to create figures folder {}",
                self.figures_dir.display()
            )
        })?;
        Ok(true)
    }
}

// Markdown links use forward slashes on every platform.
fn to_link(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
