use super::{headings, IntegrationHarness};
use anyhow::Result;
use image::{Rgb, RgbImage};
use mdreport::ReportSettings;
use std::path::Path;

fn sample_plot() -> RgbImage {
    RgbImage::from_fn(16, 9, |x, y| Rgb([(x * 15) as u8, (y * 28) as u8, 128]))
}

#[test]
fn first_image_is_saved_and_linked() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut report = harness.report("exp1", "Experiment 1");
    let written = report.add_image_report("Plot", &sample_plot())?;
    report.save_report()?;

    let expected = harness.report_dir().join("figures").join("exp1_0.png");
    assert_eq!(written, expected);
    assert!(expected.is_file());
    let decoded = image::open(&expected)?;
    assert_eq!((decoded.width(), decoded.height()), (16, 9));

    let markdown = harness.read("exp1.md");
    assert!(
        markdown.contains("![Plot](figures/exp1_0.png)"),
        "missing image link in {markdown}"
    );
    Ok(())
}

#[test]
fn consecutive_images_get_consecutive_indices() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut report = harness.report("exp1", "Experiment 1");
    report.add_image_report("First", &sample_plot())?;
    report.add_image_report("Second", &sample_plot())?;
    report.save_report()?;

    let figures = harness.report_dir().join("figures");
    assert!(figures.join("exp1_0.png").is_file());
    assert!(figures.join("exp1_1.png").is_file());
    let markdown = harness.read("exp1.md");
    assert!(markdown.contains("![First](figures/exp1_0.png)"));
    assert!(markdown.contains("![Second](figures/exp1_1.png)"));
    Ok(())
}

#[test]
fn image_index_is_section_position_not_image_count() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut report = harness.report("exp1", "Experiment 1");
    report.add_text_report("Intro", "Hello");
    report.add_image_report("Plot A", &sample_plot())?;
    report.add_code_report("Code", "x = 1", "python");
    report.add_text_report("Empty", "");
    report.add_image_report("Plot B", &sample_plot())?;
    report.save_report()?;

    let figures = harness.report_dir().join("figures");
    assert!(figures.join("exp1_1.png").is_file());
    assert!(figures.join("exp1_4.png").is_file());
    assert!(!figures.join("exp1_0.png").exists());
    assert_eq!(
        headings(&harness.read("exp1.md")),
        vec!["Intro", "Plot A", "Code", "Plot B"]
    );
    Ok(())
}

#[test]
fn configured_figures_folder_and_dpi_are_used() -> Result<()> {
    let harness = IntegrationHarness::new();
    let settings = ReportSettings::default()
        .with_dpi(120)
        .with_figures_dir("plots")
        .with_author("Lab 3");
    let mut report = harness.report_with("run", settings);
    let figure = |path: &Path, dpi: u32| -> Result<()> {
        let side = dpi / 40;
        RgbImage::new(side, side).save(path)?;
        Ok(())
    };
    report.add_image_report("Scaled", &figure)?;
    report.save_report()?;

    let image_path = harness.report_dir().join("plots").join("run_0.png");
    let decoded = image::open(&image_path)?;
    assert_eq!(decoded.width(), 3);
    assert!(harness.read("run.md").contains("![Scaled](plots/run_0.png)"));
    assert_eq!(report.document().author(), "Lab 3");
    Ok(())
}

#[test]
fn dynamic_images_can_be_embedded() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut report = harness.report("exp1", "Experiment 1");
    let figure: Box<dyn mdreport::Figure> = Box::new(image::DynamicImage::new_rgba8(5, 5));
    report.add_image_report("Boxed", figure.as_ref())?;
    assert!(harness.report_dir().join("figures/exp1_0.png").is_file());
    Ok(())
}
