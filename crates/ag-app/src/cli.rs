use std::path::PathBuf;

use ag_core::brightness::BrightnessMode;
use ag_core::config::{MAX_WIDTH, RunConfig};
use ag_core::error::CoreError;
use clap::Parser;

/// asciigen — Image to ASCII art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image source (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Largeur cible en pixels [0..=105]. 0 = sortie vide.
    #[arg(default_value_t = MAX_WIDTH, value_parser = clap::value_parser!(u32).range(0..=105))]
    pub width: u32,

    /// Formule de brightness : Average, MinMax, Luminosity (sensible à la casse).
    #[arg(default_value_t = BrightnessMode::Luminosity, value_parser = parse_mode)]
    pub mode: BrightnessMode,

    /// Inverser la brightness : true ou false (insensible à la casse).
    #[arg(action = clap::ArgAction::Set, default_value_t = true, value_parser = parse_invert)]
    pub invert: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Build the immutable run configuration from the parsed arguments.
    #[must_use]
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            image: self.image,
            width: self.width,
            mode: self.mode,
            invert: self.invert,
        }
    }
}

/// Matching exact des noms de variantes ; l'erreur liste les noms valides.
fn parse_mode(s: &str) -> Result<BrightnessMode, CoreError> {
    s.parse()
}

/// Littéral booléen, insensible à la casse ("True", "FALSE" acceptés).
fn parse_invert(s: &str) -> Result<bool, CoreError> {
    s.to_ascii_lowercase()
        .parse()
        .map_err(|_| CoreError::InvalidInvert {
            value: s.to_string(),
        })
}
