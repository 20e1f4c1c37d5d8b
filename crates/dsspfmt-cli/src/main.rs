mod cli;
mod error;
mod logging;

use crate::cli::{Cli, OutputFormat};
use crate::error::Result;
use clap::Parser;
use dsspfmt::io::document;
use dsspfmt::io::dssp::DsspReport;
use dsspfmt::io::traits::AnnotationFormat;
use dsspfmt::records::conformation::CifAnnotation;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    debug!("Full CLI arguments parsed: {:?}", &cli);

    let annotation = document::load_from_path(&cli.input)?;
    info!(
        "Loaded annotation for '{}': {} residues, {} chains.",
        annotation.metadata.id,
        annotation.residues.len(),
        annotation.statistics.chains
    );

    let format = cli.resolved_format();
    match (&cli.output, format) {
        (Some(path), OutputFormat::Dssp) => DsspReport::write_to_path(&annotation, path)?,
        (Some(path), OutputFormat::Mmcif) => CifAnnotation::write_to_path(&annotation, path)?,
        (None, OutputFormat::Dssp) => {
            DsspReport::write_to(&annotation, &mut std::io::stdout().lock())?;
        }
        (None, OutputFormat::Mmcif) => {
            CifAnnotation::write_to(&annotation, &mut std::io::stdout().lock())?;
        }
    }

    info!("Rendering finished.");
    Ok(())
}
