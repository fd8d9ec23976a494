/// Configuration, types, and shared structures for asciigen.
///
/// This crate contains the brightness formulas, the glyph ramp with its
/// quantization LUT, the pixel/brightness grids, and the run configuration
/// shared across the asciigen workspace.

pub mod brightness;
pub mod charset;
pub mod config;
pub mod error;
pub mod grid;

pub use brightness::BrightnessMode;
pub use charset::GlyphRamp;
pub use config::RunConfig;
pub use error::CoreError;
pub use grid::{BrightnessGrid, PixelGrid, Rgb};
