use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::grid::Rgb;

/// Formule de conversion RGB → brightness.
///
/// Variante fermée : le dispatch se fait par `match`, jamais par chaîne de
/// caractères au moment du calcul.
///
/// # Example
/// ```
/// use ag_core::brightness::BrightnessMode;
/// use ag_core::grid::Rgb;
/// let px = Rgb { r: 128, g: 128, b: 128 };
/// assert_eq!(BrightnessMode::Average.compute(px), 128);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrightnessMode {
    /// `(r + g + b) / 3`, division entière.
    Average,
    /// `(min + max) / 2`, division entière.
    MinMax,
    /// `r*0.21 + g*0.72 + b*0.07`, tronqué. Défaut.
    #[default]
    Luminosity,
}

/// Noms valides, dans l'ordre de déclaration. Matching sensible à la casse.
pub const MODE_NAMES: &[&str] = &["Average", "MinMax", "Luminosity"];

impl BrightnessMode {
    /// Compute the brightness of one pixel under this formula.
    ///
    /// The Luminosity weights sum to 1.0 only up to f32 rounding, so the
    /// raw sum can land epsilon-above 255.0 for near-white pixels; the
    /// saturating `as` cast clamps it back into [0, 255].
    ///
    /// # Example
    /// ```
    /// use ag_core::brightness::BrightnessMode;
    /// use ag_core::grid::Rgb;
    /// let px = Rgb { r: 255, g: 0, b: 0 };
    /// assert_eq!(BrightnessMode::Average.compute(px), 85);
    /// assert_eq!(BrightnessMode::MinMax.compute(px), 127);
    /// assert_eq!(BrightnessMode::Luminosity.compute(px), 53);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn compute(self, px: Rgb) -> u8 {
        let (r, g, b) = (px.r, px.g, px.b);
        match self {
            Self::Average => ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8,
            Self::MinMax => {
                let lo = r.min(g).min(b);
                let hi = r.max(g).max(b);
                ((u16::from(lo) + u16::from(hi)) / 2) as u8
            }
            Self::Luminosity => {
                let lum = f32::from(r) * 0.21 + f32::from(g) * 0.72 + f32::from(b) * 0.07;
                lum as u8
            }
        }
    }
}

impl fmt::Display for BrightnessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Average => "Average",
            Self::MinMax => "MinMax",
            Self::Luminosity => "Luminosity",
        };
        f.write_str(name)
    }
}

impl FromStr for BrightnessMode {
    type Err = CoreError;

    /// Matching exact, sensible à la casse ("average" est rejeté).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Average" => Ok(Self::Average),
            "MinMax" => Ok(Self::MinMax),
            "Luminosity" => Ok(Self::Luminosity),
            other => Err(CoreError::UnknownMode {
                name: other.to_string(),
            }),
        }
    }
}

/// Inversion de polarité : `255 - value`.
///
/// Les terminaux rendent typiquement clair-sur-sombre ; l'inversion (activée
/// par défaut) aligne la densité visuelle des glyphes sur la brightness
/// perçue de l'image source.
///
/// # Example
/// ```
/// use ag_core::brightness::invert;
/// assert_eq!(invert(0), 255);
/// assert_eq!(invert(invert(42)), 42);
/// ```
#[inline(always)]
#[must_use]
pub const fn invert(value: u8) -> u8 {
    255 - value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Rgb {
        Rgb { r: v, g: v, b: v }
    }

    #[test]
    fn grayscale_identity_all_formulas() {
        for v in [0u8, 128, 255] {
            assert_eq!(BrightnessMode::Average.compute(gray(v)), v);
            assert_eq!(BrightnessMode::MinMax.compute(gray(v)), v);
            assert_eq!(BrightnessMode::Luminosity.compute(gray(v)), v);
        }
    }

    #[test]
    fn average_truncates() {
        // (200 + 100 + 0) / 3 = 100
        let px = Rgb { r: 200, g: 100, b: 0 };
        assert_eq!(BrightnessMode::Average.compute(px), 100);
    }

    #[test]
    fn minmax_ignores_middle_channel() {
        let px = Rgb { r: 10, g: 200, b: 90 };
        assert_eq!(BrightnessMode::MinMax.compute(px), 105);
    }

    #[test]
    fn luminosity_truncates_fraction() {
        // 0.21*100 + 0.72*50 + 0.07*25 = 21 + 36 + 1.75 = 58.75 → 58
        let px = Rgb { r: 100, g: 50, b: 25 };
        assert_eq!(BrightnessMode::Luminosity.compute(px), 58);
    }

    #[test]
    fn invert_is_self_inverse() {
        for v in 0..=255u8 {
            assert_eq!(invert(invert(v)), v);
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert_eq!(
            "Luminosity".parse::<BrightnessMode>().ok(),
            Some(BrightnessMode::Luminosity)
        );
        assert!("luminosity".parse::<BrightnessMode>().is_err());
        assert!("Mean".parse::<BrightnessMode>().is_err());
    }

    #[test]
    fn unknown_mode_error_lists_valid_names() {
        let err = "Mean".parse::<BrightnessMode>().unwrap_err();
        let msg = err.to_string();
        for name in MODE_NAMES {
            assert!(msg.contains(name), "message should list {name}: {msg}");
        }
    }

    #[test]
    fn default_is_luminosity() {
        assert_eq!(BrightnessMode::default(), BrightnessMode::Luminosity);
    }
}
