/// Brightness mapping and text rendering for asciigen.
///
/// Two pure passes: `mapper` turns a pixel grid into a brightness grid,
/// `render` turns a brightness grid into text lines.

pub mod mapper;
pub mod render;

pub use mapper::map_brightness;
pub use render::render_lines;
