use ag_ascii::{map_brightness, render_lines};
use ag_core::charset::GlyphRamp;
use ag_core::config::RunConfig;
use ag_core::grid::PixelGrid;

/// Run the pure pipeline: pixel grid → brightness grid → text lines.
///
/// Decode and configuration failures abort before this is reached; here
/// nothing can fail.
#[must_use]
pub fn render(pixels: &PixelGrid, config: &RunConfig) -> Vec<String> {
    let bright = map_brightness(pixels, config.mode, config.invert);
    let ramp = GlyphRamp::standard();
    render_lines(&bright, &ramp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::brightness::BrightnessMode;
    use ag_core::grid::Rgb;

    fn one_pixel(px: Rgb) -> PixelGrid {
        let mut grid = PixelGrid::new(1, 1);
        grid.data[0] = px;
        grid
    }

    fn config(mode: BrightnessMode, invert: bool) -> RunConfig {
        RunConfig {
            mode,
            invert,
            ..RunConfig::default()
        }
    }

    #[test]
    fn white_pixel_average_no_invert() {
        let grid = one_pixel(Rgb { r: 255, g: 255, b: 255 });
        let lines = render(&grid, &config(BrightnessMode::Average, false));
        assert_eq!(lines, vec!["$$".to_string()]);
    }

    #[test]
    fn white_pixel_average_inverted() {
        let grid = one_pixel(Rgb { r: 255, g: 255, b: 255 });
        let lines = render(&grid, &config(BrightnessMode::Average, true));
        assert_eq!(lines, vec!["``".to_string()]);
    }

    #[test]
    fn black_pixel_minmax_inverted() {
        let grid = one_pixel(Rgb { r: 0, g: 0, b: 0 });
        let lines = render(&grid, &config(BrightnessMode::MinMax, true));
        assert_eq!(lines, vec!["$$".to_string()]);
    }

    #[test]
    fn line_count_and_length_follow_grid() {
        let grid = PixelGrid::new(6, 3);
        let lines = render(&grid, &config(BrightnessMode::Luminosity, true));
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
    }

    #[test]
    fn degenerate_grid_renders_nothing() {
        let grid = PixelGrid::new(0, 0);
        let lines = render(&grid, &config(BrightnessMode::Luminosity, true));
        assert!(lines.is_empty());
    }
}
