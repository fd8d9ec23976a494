use ag_core::grid::PixelGrid;
use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer};

/// Dimensions d'un resize "fit" : la plus grande dimension devient `target`,
/// ratio préservé, la plus petite plancher à 1.
///
/// Target 0 est la borne dégénérée et donne (0, 0).
///
/// # Example
/// ```
/// use ag_source::resize::fit_dimensions;
/// assert_eq!(fit_dimensions(200, 100, 50), (50, 25));
/// assert_eq!(fit_dimensions(100, 200, 50), (25, 50));
/// assert_eq!(fit_dimensions(1000, 1, 10), (10, 1));
/// assert_eq!(fit_dimensions(200, 100, 0), (0, 0));
/// ```
#[must_use]
pub fn fit_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    if target == 0 || width == 0 || height == 0 {
        return (0, 0);
    }
    if width >= height {
        let h = (u64::from(height) * u64::from(target) / u64::from(width)) as u32;
        (target, h.max(1))
    } else {
        let w = (u64::from(width) * u64::from(target) / u64::from(height)) as u32;
        (w.max(1), target)
    }
}

/// Resize `src` so its larger dimension equals `target`.
///
/// Same-size input is copied through untouched; target 0 returns an empty
/// grid without touching the resizer.
///
/// # Errors
/// Returns an error if the underlying resize operation fails.
///
/// # Example
/// ```
/// use ag_core::grid::PixelGrid;
/// use ag_source::resize::fit_to_width;
/// let src = PixelGrid::new(100, 50);
/// let dst = fit_to_width(&src, 20).unwrap();
/// assert_eq!((dst.width, dst.height), (20, 10));
/// ```
pub fn fit_to_width(src: &PixelGrid, target: u32) -> Result<PixelGrid> {
    let (dst_w, dst_h) = fit_dimensions(src.width, src.height, target);
    if (dst_w, dst_h) == (0, 0) {
        return Ok(PixelGrid::new(0, 0));
    }
    if (dst_w, dst_h) == (src.width, src.height) {
        return Ok(PixelGrid::from_raw_rgb(
            &interleave(src),
            src.width,
            src.height,
        ));
    }

    let src_image = Image::from_vec_u8(src.width, src.height, interleave(src), PixelType::U8x3)
        .context("Invalid source dimensions")?;
    let mut dst_image = Image::new(dst_w, dst_h, PixelType::U8x3);

    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&ResizeOptions::new()))
        .context("Resize failed")?;

    Ok(PixelGrid::from_raw_rgb(dst_image.buffer(), dst_w, dst_h))
}

/// Flatten the grid back into interleaved RGB bytes for the resizer.
fn interleave(grid: &PixelGrid) -> Vec<u8> {
    let mut raw = Vec::with_capacity(grid.data.len() * 3);
    for px in &grid.data {
        raw.extend_from_slice(&[px.r, px.g, px.b]);
    }
    raw
}
