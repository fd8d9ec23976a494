/// 69 caractères — Paul Bourke sans l'espace, du plus sombre au plus dense.
///
/// Index 0 = `` ` `` (le plus vide), index 68 = `$` (le plus dense).
/// Constante process-wide, jamais mutée, partageable entre threads.
pub const GLYPH_RAMP: &str =
    "`.'^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Lookup table mapping brightness [0..255] → glyph.
///
/// Pre-computed at startup for O(1) per-pixel cost. Quantization is
/// `index = b * (len - 1) / 255` with floor division, so `map(0)` is the
/// darkest glyph and `map(255)` the densest, monotonically in between.
///
/// # Example
/// ```
/// use ag_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::standard();
/// assert_eq!(ramp.map(0), '`');
/// assert_eq!(ramp.map(255), '$');
/// ```
pub struct GlyphRamp {
    lut: [char; 256],
}

impl GlyphRamp {
    /// Build a LUT from a glyph sequence ordered darkest→densest.
    ///
    /// Sequences shorter than 2 glyphs fall back to a minimal default.
    #[must_use]
    pub fn new(glyphs: &str) -> Self {
        let chars: Vec<char> = glyphs.chars().collect();
        if chars.len() < 2 {
            return Self::new("`$");
        }
        let len = chars.len();
        let mut lut = [' '; 256];
        for (b, slot) in lut.iter_mut().enumerate() {
            *slot = chars[b * (len - 1) / 255];
        }
        Self { lut }
    }

    /// The built-in 69-glyph ramp.
    ///
    /// # Example
    /// ```
    /// use ag_core::charset::GlyphRamp;
    /// let ramp = GlyphRamp::standard();
    /// assert_eq!(ramp.map(128), 'n');
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GLYPH_RAMP)
    }

    /// Map a brightness value [0..255] to a glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, brightness: u8) -> char {
        self.lut[brightness as usize]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::standard()
    }
}
