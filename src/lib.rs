//! Markdown reports for experiment results.
//!
//! ```no_run
//! use image::RgbImage;
//! use mdreport::Report;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut report = Report::new("reports", "example_report", "Example Report")?;
//! report.add_text_report("Heading 1", "This is a text section.");
//! report.add_image_report("Heading 2", &RgbImage::new(64, 48))?;
//! report.add_code_report("Heading 3", "print('Hello World!')", "python");
//! report.save_report()?; // reports/example_report.md
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod figures;
pub mod report;
pub mod sections;

// Re-export commonly used types for convenience.
pub use config::ReportSettings;
pub use document::{MarkdownDocument, MarkdownFile};
pub use figures::Figure;
pub use report::{Report, ReportLayout};
pub use sections::{CodeSection, ImageSection, Section, TextSection};
