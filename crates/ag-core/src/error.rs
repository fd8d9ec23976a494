use thiserror::Error;

use crate::brightness::MODE_NAMES;
use crate::config::MAX_WIDTH;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Target width outside the accepted range.
    #[error("Largeur invalide : {value} (attendu 0..={MAX_WIDTH})")]
    WidthOutOfRange {
        /// The rejected width value.
        value: u32,
    },

    /// Brightness mode name not among the recognized variants.
    #[error("Mode de brightness inconnu : \"{name}\" (valides : {})", MODE_NAMES.join(", "))]
    UnknownMode {
        /// The rejected mode name.
        name: String,
    },

    /// Invert flag not a boolean literal.
    #[error("Flag invert invalide : \"{value}\" (attendu true ou false)")]
    InvalidInvert {
        /// The rejected flag value.
        value: String,
    },
}
