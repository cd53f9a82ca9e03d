//! rename-files - batch-rename the files of a directory.

use clap::Parser;
use std::process;
use tokio::task;

use filekit::error::FileKitError;
use filekit::output::{OutputFormatter, display_rename_report};
use filekit::rename::{RenameOutcome, RenameStatus, rename_files};
use filekit_cli::cli::RenameCli;
use filekit_cli::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = RenameCli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

async fn run(cli: RenameCli) -> Result<(), FileKitError> {
    cli.validate()?;
    let config = cli.to_config()?;
    tracing::debug!(?config, "parsed arguments");
    let formatter = OutputFormatter::new(config.quiet || cli.json, config.verbose);

    let outcome = {
        let config = config.clone();
        task::spawn_blocking(move || rename_files(&config))
            .await
            .map_err(|e| FileKitError::other(format!("Rename task failed: {e}")))??
    };

    let report = match outcome {
        RenameOutcome::NoFiles => {
            formatter.info("No files found.");
            return Ok(());
        }
        RenameOutcome::NoMatches => {
            formatter.info("No files matched the given source extension(s).");
            return Ok(());
        }
        RenameOutcome::Completed(report) => report,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_rename_report(&formatter, &report);

        let changed = report.changes().count();
        if report.dry_run {
            formatter.success(&format!("Dry run: {changed} file(s) would be renamed"));
        } else {
            formatter.success(&format!(
                "Renamed {} file(s)",
                report.count(RenameStatus::Renamed)
            ));
        }
    }

    report.check()
}
