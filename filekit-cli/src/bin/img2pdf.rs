//! img2pdf - combine images into a single PDF.

use clap::Parser;
use std::process;

use filekit::error::FileKitError;
use filekit::images::{AssemblyEvent, ImageAssembler};
use filekit::output::{OutputFormatter, display_write_statistics};
use filekit_cli::cli::Img2PdfCli;
use filekit_cli::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Img2PdfCli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

async fn run(cli: Img2PdfCli) -> Result<(), FileKitError> {
    cli.validate()?;
    let config = cli.to_config()?;
    tracing::debug!(?config, "parsed arguments");
    let formatter = OutputFormatter::new(config.quiet, config.verbose);

    let report = ImageAssembler::new()
        .assemble(&config, |event| match event {
            AssemblyEvent::Processing { index, total, path } => {
                formatter.progress(index, total, path);
            }
            AssemblyEvent::Skipped { path, error } => {
                formatter.warning(&format!("Skipping '{}': {error}", path.display()));
            }
        })
        .await?;

    formatter.success(&format!(
        "Created {} with {} page(s)",
        report.write.output_path.display(),
        report.pages
    ));

    if !report.skipped.is_empty() {
        formatter.warning(&format!("{} image(s) skipped", report.skipped.len()));
    }

    if formatter.is_verbose() {
        formatter.blank_line();
        formatter.section("Statistics");
        display_write_statistics(&formatter, &report.write);
    }

    Ok(())
}
