use std::path::PathBuf;

use crate::brightness::BrightnessMode;
use crate::error::CoreError;

/// Largeur cible maximale, en pixels.
pub const MAX_WIDTH: u32 = 105;

/// Configuration d'un run, construite une fois depuis la CLI.
///
/// Immuable pour toute la durée du run ; passée par référence à chaque
/// étape du pipeline. Aucun état global mutable.
///
/// # Example
/// ```
/// use ag_core::config::RunConfig;
/// let config = RunConfig::default();
/// assert_eq!(config.width, 105);
/// assert!(config.invert);
/// ```
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Chemin de l'image source.
    pub image: PathBuf,
    /// Largeur cible [0..=105]. 0 = sortie dégénérée vide.
    pub width: u32,
    /// Formule de brightness.
    pub mode: BrightnessMode,
    /// Inverser la brightness (pour terminaux sombres). Défaut : true.
    pub invert: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::new(),
            width: MAX_WIDTH,
            mode: BrightnessMode::default(),
            invert: true,
        }
    }
}

impl RunConfig {
    /// Validate field ranges.
    ///
    /// The CLI layer already range-checks its inputs; this is the
    /// authoritative check for configs built programmatically.
    ///
    /// # Errors
    /// Returns `CoreError::WidthOutOfRange` if `width > 105`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width > MAX_WIDTH {
            return Err(CoreError::WidthOutOfRange { value: self.width });
        }
        Ok(())
    }
}
