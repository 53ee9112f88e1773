//! Settings shared by every report built in a process.
//!
//! Settings can be built in code or read from a TOML file such as:
//!
//! ```toml
//! dpi = 150
//! author = "Lab 3"
//! figures_dir = "plots"
//! ```
//!
//! Missing keys fall back to their defaults, so a partial file is valid.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-report rendering and layout preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Resolution handed to figures when they are saved.
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    /// Author recorded on the markdown document.
    #[serde(default = "default_author")]
    pub author: String,
    /// Sub-folder of the save directory that receives figure images.
    #[serde(default = "default_figures_dir")]
    pub figures_dir: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            author: default_author(),
            figures_dir: default_figures_dir(),
        }
    }
}

const fn default_dpi() -> u32 {
    300
}

fn default_author() -> String {
    "Unknown".into()
}

fn default_figures_dir() -> String {
    "figures".into()
}

impl ReportSettings {
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_figures_dir(mut self, figures_dir: impl Into<String>) -> Self {
        self.figures_dir = figures_dir.into();
        self
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let settings: Self = toml::from_str(raw).context("Invalid report settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report settings {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid report settings {}", path.display()))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.figures_dir.trim().is_empty() {
            bail!("figures_dir must not be empty");
        }
        if Path::new(&self.figures_dir).is_absolute() {
            bail!(
                "figures_dir must be relative to the save directory, got {}",
                self.figures_dir
            );
        }
        Ok(())
    }
}
