//! pdfsplit - split a PDF into parts or extract a page range.

use clap::Parser;
use std::process;

use filekit::error::FileKitError;
use filekit::output::{
    OutputFormatter, display_document_info, display_split_report, display_write_statistics,
};
use filekit::split::PdfSplitter;
use filekit_cli::cli::{ExtractArgs, PdfSplitCli, PdfSplitCommand, SplitArgs};
use filekit_cli::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = PdfSplitCli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

async fn run(cli: PdfSplitCli) -> Result<(), FileKitError> {
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    match &cli.command {
        PdfSplitCommand::Split(args) => split(args, &cli, &formatter).await,
        PdfSplitCommand::Extract(args) => extract(args, &cli, &formatter).await,
    }
}

async fn split(
    args: &SplitArgs,
    cli: &PdfSplitCli,
    formatter: &OutputFormatter,
) -> Result<(), FileKitError> {
    let config = args.to_config(cli.verbose, cli.quiet)?;
    tracing::debug!(?config, "parsed arguments");

    formatter.info(&format!("Splitting {}...", config.input.display()));
    let report = PdfSplitter::new().split(&config).await?;

    if formatter.is_verbose() {
        formatter.section("Input");
        display_document_info(formatter, &report.document);
    }
    display_split_report(formatter, &report);

    let failed = report.failures().count();
    let total = report.parts.len();

    if config.dry_run {
        formatter.blank_line();
        formatter.success(&format!("Dry run: {total} part(s) would be written"));
        formatter.info("  Run without --dry-run to write them");
        return Ok(());
    }

    formatter.success(&format!(
        "Created {} part(s) in {}",
        total - failed,
        config.output_dir.display()
    ));

    if failed > 0 {
        return Err(FileKitError::PartialFailure { failed, total });
    }

    Ok(())
}

async fn extract(
    args: &ExtractArgs,
    cli: &PdfSplitCli,
    formatter: &OutputFormatter,
) -> Result<(), FileKitError> {
    let config = args.to_config(cli.verbose, cli.quiet)?;
    tracing::debug!(?config, "parsed arguments");

    let report = PdfSplitter::new().extract(&config).await?;
    let range = report.range;

    if formatter.is_verbose() {
        formatter.section("Input");
        display_document_info(formatter, &report.document);
    }

    if let Some(warning) = report.clamp_warning(formatter.is_verbose()) {
        formatter.warning(&warning);
    }

    match &report.write {
        None => {
            formatter.success(&format!(
                "Dry run: pages {}-{} ({} page(s)) would be written to {}",
                range.start,
                range.end,
                range.len(),
                report.output.display()
            ));
        }
        Some(stats) => {
            formatter.success(&format!(
                "Extracted pages {}-{} to {} ({})",
                range.start,
                range.end,
                report.output.display(),
                stats.format_file_size()
            ));

            if formatter.is_verbose() {
                formatter.blank_line();
                formatter.section("Statistics");
                display_write_statistics(formatter, stats);
            }
        }
    }

    Ok(())
}
