use ag_core::brightness::{BrightnessMode, invert};
use ag_core::grid::{BrightnessGrid, PixelGrid};
use rayon::prelude::*;

/// Map every pixel to a brightness value under `mode`, inverting if asked.
///
/// Chaque cellule est une fonction pure de son propre pixel ; les lignes
/// sont traitées en parallèle, l'ordre d'exécution n'affecte pas le
/// résultat. Les dimensions de sortie égalent exactement celles d'entrée.
///
/// # Example
/// ```
/// use ag_core::brightness::BrightnessMode;
/// use ag_core::grid::{PixelGrid, Rgb};
/// use ag_ascii::mapper::map_brightness;
///
/// let mut grid = PixelGrid::new(1, 1);
/// grid.data[0] = Rgb { r: 255, g: 255, b: 255 };
/// let bright = map_brightness(&grid, BrightnessMode::Average, false);
/// assert_eq!(bright.data[0], 255);
/// let inverted = map_brightness(&grid, BrightnessMode::Average, true);
/// assert_eq!(inverted.data[0], 0);
/// ```
#[must_use]
pub fn map_brightness(pixels: &PixelGrid, mode: BrightnessMode, invert_flag: bool) -> BrightnessGrid {
    let width = pixels.width.max(1) as usize;
    let data: Vec<u8> = pixels
        .data
        .par_chunks(width)
        .flat_map_iter(|row| {
            row.iter().map(move |&px| {
                let b = mode.compute(px);
                if invert_flag { invert(b) } else { b }
            })
        })
        .collect();

    BrightnessGrid {
        data,
        width: pixels.width,
        height: pixels.height,
    }
}
