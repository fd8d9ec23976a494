use ag_core::charset::GlyphRamp;
use ag_core::grid::BrightnessGrid;

/// Render a brightness grid into text lines, one per row, top first.
///
/// Chaque glyphe est émis deux fois consécutivement : les pixels source
/// sont carrés, les glyphes terminal environ deux fois plus hauts que
/// larges, le doublement compense. Longueur de ligne = 2 × largeur.
///
/// Each line is built into one pre-sized buffer, no per-glyph
/// re-concatenation.
///
/// # Example
/// ```
/// use ag_core::charset::GlyphRamp;
/// use ag_core::grid::BrightnessGrid;
/// use ag_ascii::render::render_lines;
///
/// let mut grid = BrightnessGrid::new(2, 1);
/// grid.data = vec![0, 255];
/// let lines = render_lines(&grid, &GlyphRamp::standard());
/// assert_eq!(lines, vec!["``$$".to_string()]);
/// ```
#[must_use]
pub fn render_lines(grid: &BrightnessGrid, ramp: &GlyphRamp) -> Vec<String> {
    grid.rows()
        .map(|row| {
            let mut line = String::with_capacity(row.len() * 2);
            for &b in row {
                let ch = ramp.map(b);
                line.push(ch);
                line.push(ch);
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_length_is_twice_row_width() {
        let grid = BrightnessGrid::new(9, 4);
        let lines = render_lines(&grid, &GlyphRamp::standard());
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == 18));
    }

    #[test]
    fn row_order_is_top_first() {
        let mut grid = BrightnessGrid::new(1, 2);
        grid.data = vec![255, 0];
        let lines = render_lines(&grid, &GlyphRamp::standard());
        assert_eq!(lines, vec!["$$".to_string(), "``".to_string()]);
    }

    #[test]
    fn empty_grid_renders_no_lines() {
        let grid = BrightnessGrid::new(0, 0);
        assert!(render_lines(&grid, &GlyphRamp::standard()).is_empty());
    }
}
