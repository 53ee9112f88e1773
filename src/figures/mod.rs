//! Figures that a report can embed.
//!
//! The report never draws anything. It hands a target path and a resolution to
//! a [`Figure`] and links whatever file ends up there. Raster buffers from the
//! `image` crate work out of the box; any plotting backend can be plugged in
//! through a closure:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let plot = |path: &Path, dpi: u32| -> anyhow::Result<()> {
//!     // render with the plotting library of choice
//!     # let _ = (path, dpi);
//!     Ok(())
//! };
//! # let _ = plot;
//! ```

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use std::path::Path;
use tracing::debug;

/// Something that can persist itself as a PNG file.
pub trait Figure {
    /// Writes the figure to `path` as PNG at `dpi` dots per inch.
    fn save_figure(&self, path: &Path, dpi: u32) -> Result<()>;
}

impl<F> Figure for F
where
    F: Fn(&Path, u32) -> Result<()>,
{
    fn save_figure(&self, path: &Path, dpi: u32) -> Result<()> {
        self(path, dpi)
    }
}

// Raster buffers are already rasterized, the resolution cannot change their pixels.
macro_rules! raster_figure {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Figure for $ty {
                fn save_figure(&self, path: &Path, dpi: u32) -> Result<()> {
                    debug!(
                        path = %path.display(),
                        dpi,
                        width = self.width(),
                        height = self.height(),
                        "encoding raster figure"
                    );
                    self.save_with_format(path, ImageFormat::Png)
                        .with_context(|| format!("Failed to encode figure {}", path.display()))
                }
            }
        )+
    };
}

raster_figure!(DynamicImage, RgbImage, RgbaImage, GrayImage);
