/// Pixel RGB 8 bits par canal.
///
/// # Example
/// ```
/// use ag_core::grid::Rgb;
/// let px = Rgb { r: 255, g: 0, b: 0 };
/// assert_eq!(px.r, 255);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Grille de pixels RGB, row-major. Rectangulaire par construction.
///
/// Le buffer plat garantit l'invariant "toutes les lignes ont la même
/// longueur" sans vérification par ligne.
///
/// # Example
/// ```
/// use ag_core::grid::PixelGrid;
/// let grid = PixelGrid::new(10, 4);
/// assert_eq!(grid.data.len(), 40);
/// ```
#[derive(Debug)]
pub struct PixelGrid {
    /// Pixels row-major, `width * height` entries.
    pub data: Vec<Rgb>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelGrid {
    /// Crée une grille noire aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ag_core::grid::PixelGrid;
    /// let grid = PixelGrid::new(3, 2);
    /// assert_eq!((grid.width, grid.height), (3, 2));
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![Rgb { r: 0, g: 0, b: 0 }; (width * height) as usize],
            width,
            height,
        }
    }

    /// Construit une grille depuis un buffer RGB entrelacé (3 bytes/pixel).
    ///
    /// # Panics
    /// Panics in debug builds if `raw.len() != width * height * 3`.
    ///
    /// # Example
    /// ```
    /// use ag_core::grid::PixelGrid;
    /// let grid = PixelGrid::from_raw_rgb(&[255, 0, 0, 0, 255, 0], 2, 1);
    /// assert_eq!(grid.data[1].g, 255);
    /// ```
    #[must_use]
    pub fn from_raw_rgb(raw: &[u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(raw.len(), (width * height * 3) as usize, "raw buffer size");
        let data = raw
            .chunks_exact(3)
            .map(|px| Rgb {
                r: px[0],
                g: px[1],
                b: px[2],
            })
            .collect();
        Self {
            data,
            width,
            height,
        }
    }

    /// Lignes de la grille, dans l'ordre haut → bas.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }
}

/// Grille de brightness [0..255], mêmes dimensions que la PixelGrid source.
///
/// # Example
/// ```
/// use ag_core::grid::BrightnessGrid;
/// let grid = BrightnessGrid::new(4, 2);
/// assert_eq!(grid.data.len(), 8);
/// ```
pub struct BrightnessGrid {
    /// Brightness values row-major, `width * height` entries.
    pub data: Vec<u8>,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl BrightnessGrid {
    /// Crée une grille à zéro aux dimensions données.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height) as usize],
            width,
            height,
        }
    }

    /// Lignes de la grille, dans l'ordre haut → bas.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rgb_preserves_order() {
        let grid = PixelGrid::from_raw_rgb(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12], 2, 2);
        assert_eq!(grid.data[0], Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(grid.data[3], Rgb { r: 10, g: 11, b: 12 });
    }

    #[test]
    fn rows_are_rectangular() {
        let grid = PixelGrid::new(5, 3);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 5));
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let grid = BrightnessGrid::new(0, 0);
        assert_eq!(grid.rows().count(), 0);
    }
}
