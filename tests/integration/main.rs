use mdreport::{Report, ReportSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    /// Report directory that does not exist yet, so construction has to create it.
    pub fn report_dir(&self) -> PathBuf {
        self.workspace.path().join("reports")
    }

    pub fn report(&self, file_name: &str, title: &str) -> Report {
        Report::new(self.report_dir(), file_name, title).expect("failed to open report")
    }

    pub fn report_with(&self, file_name: &str, settings: ReportSettings) -> Report {
        Report::with_settings(self.report_dir(), file_name, "Experiment", settings)
            .expect("failed to open report")
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.report_dir().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
    }
}

/// Lines of a markdown document that are level-1 headings, without the `# `.
pub fn headings(markdown: &str) -> Vec<&str> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("# "))
        .collect()
}

mod report_figures;
