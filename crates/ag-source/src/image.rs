use std::path::Path;

use ag_core::grid::PixelGrid;
use anyhow::{Context, Result};

/// Load an image from disk into an RGB pixel grid.
///
/// The alpha channel, if any, is dropped; brightness mapping only looks at
/// the color channels.
///
/// # Errors
/// Returns an error if the path is unreadable or the format unsupported,
/// with the path in the context chain.
///
/// # Example
/// ```no_run
/// use ag_source::image::load_image;
/// use std::path::Path;
/// let grid = load_image(Path::new("test.png")).unwrap();
/// assert!(grid.height >= 1);
/// ```
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let img = ::image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelGrid::from_raw_rgb(rgb.as_raw(), width, height))
}
