//! pdf2img - render PDF pages to image files.

use clap::Parser;
use std::process;

use filekit::error::FileKitError;
use filekit::output::OutputFormatter;
use filekit::render::PageRasterizer;
use filekit_cli::cli::Pdf2ImgCli;
use filekit_cli::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Pdf2ImgCli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

async fn run(cli: Pdf2ImgCli) -> Result<(), FileKitError> {
    cli.validate()?;
    let config = cli.to_config()?;
    tracing::debug!(?config, "parsed arguments");
    let formatter = OutputFormatter::new(config.quiet, config.verbose);

    formatter.info(&format!("Rendering {}...", config.input.display()));

    let report = PageRasterizer::new().rasterize(&config).await?;

    for (i, (_, path)) in report.written.iter().enumerate() {
        formatter.progress(i + 1, report.written.len(), path);
    }

    formatter.success(&format!(
        "Wrote {} of {} page(s) to {}",
        report.written.len(),
        report.total_pages,
        report.output_dir.display()
    ));

    Ok(())
}
