use anyhow::Result;
use clap::{CommandFactory, Parser};

pub mod cli;
pub mod pipeline;

fn main() {
    // 1. Parser CLI — clap affiche diagnostic + usage et sort non-zéro.
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    if let Err(err) = run(cli) {
        // Diagnostic avec la chaîne de causes, puis l'usage.
        eprintln!("Erreur : {err:#}");
        eprintln!();
        let _ = cli::Cli::command().print_help();
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let config = cli.into_config();
    log::info!(
        "Run : {} largeur={} mode={} invert={}",
        config.image.display(),
        config.width,
        config.mode,
        config.invert
    );

    // 3. Décoder + fit-resize (seul I/O bloquant du run).
    let pixels = ag_source::load_fitted(&config.image, config.width)?;

    // 4. Echo de la configuration effective.
    println!("Image   : {}", config.image.display());
    println!("Largeur : {}", config.width);
    println!("Mode    : {}", config.mode);
    println!("Invert  : {}", config.invert);

    // 5. Pipeline pur, puis sortie ligne par ligne, haut → bas.
    for line in pipeline::render(&pixels, &config) {
        println!("{line}");
    }
    Ok(())
}
