/// Image decoding and fit-resizing for asciigen.
///
/// This crate is the pipeline's only contact with the filesystem and with
/// image file formats. It hands the core a rectangular `PixelGrid` and
/// nothing else.

pub mod image;
pub mod resize;

pub use image::load_image;
pub use resize::{fit_dimensions, fit_to_width};

use ag_core::grid::PixelGrid;
use anyhow::Result;

/// Decode `path` and fit-resize it so the larger dimension equals `width`.
///
/// # Errors
/// Returns an error if the image cannot be decoded or resized.
///
/// # Example
/// ```no_run
/// use ag_source::load_fitted;
/// let grid = load_fitted("photo.png".as_ref(), 80).unwrap();
/// assert!(grid.width.max(grid.height) <= 80);
/// ```
pub fn load_fitted(path: &std::path::Path, width: u32) -> Result<PixelGrid> {
    let grid = image::load_image(path)?;
    log::debug!(
        "Image décodée : {}×{} → fit {width}",
        grid.width,
        grid.height
    );
    resize::fit_to_width(&grid, width)
}
