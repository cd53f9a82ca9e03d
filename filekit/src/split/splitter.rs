//! Splitting a PDF into parts and extracting page ranges.

use lopdf::Document;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

use super::pages::PageExtractor;
use crate::config::{ExtractConfig, ResolvedRange, SplitConfig};
use crate::error::{FileKitError, Result};
use crate::io::{PdfReader, PdfWriter, WriteStatistics};
use crate::validation::{DocumentInfo, InputValidator};

/// File name of the `index`-th part (1-based) of a document named `stem`.
///
/// ```
/// use filekit::split::part_file_name;
///
/// assert_eq!(part_file_name("report", 7), "report_part007.pdf");
/// ```
pub fn part_file_name(stem: &str, index: usize) -> String {
    format!("{stem}_part{index:03}.pdf")
}

/// One output file of a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartPlan {
    /// 1-based part number.
    pub index: usize,
    /// First page (1-based, inclusive).
    pub first_page: u32,
    /// Last page (1-based, inclusive).
    pub last_page: u32,
    /// Where the part is written.
    pub path: PathBuf,
}

impl PartPlan {
    /// Pages in this part, 1-based.
    pub fn pages(&self) -> Vec<u32> {
        (self.first_page..=self.last_page).collect()
    }

    /// Number of pages in this part.
    pub fn page_count(&self) -> usize {
        (self.last_page - self.first_page + 1) as usize
    }
}

/// Partition `total_pages` pages into parts of `pages_per_file`.
///
/// The last part holds the remainder.
pub fn plan_parts(
    input: &Path,
    output_dir: &Path,
    total_pages: usize,
    pages_per_file: usize,
) -> Vec<PartPlan> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let per_file = pages_per_file.max(1);

    (0..total_pages)
        .step_by(per_file)
        .enumerate()
        .map(|(k, start)| {
            let end = (start + per_file).min(total_pages);
            PartPlan {
                index: k + 1,
                first_page: (start + 1) as u32,
                last_page: end as u32,
                path: output_dir.join(part_file_name(&stem, k + 1)),
            }
        })
        .collect()
}

/// What happened to one part.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PartStatus {
    /// Written to disk.
    Written {
        /// Size of the written file in bytes.
        file_size: u64,
    },
    /// Dry run: would have been written.
    Planned,
    /// Extraction or saving failed; the split continued.
    Failed {
        /// Failure details.
        reason: String,
    },
}

/// A part together with its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct PartOutcome {
    /// The planned part.
    #[serde(flatten)]
    pub plan: PartPlan,
    /// What happened to it.
    #[serde(flatten)]
    pub status: PartStatus,
}

/// Result of a split run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    /// Facts about the input document.
    pub document: DocumentInfo,
    /// One outcome per part, in order.
    pub parts: Vec<PartOutcome>,
}

impl SplitReport {
    /// Parts that could not be written.
    pub fn failures(&self) -> impl Iterator<Item = &PartOutcome> {
        self.parts
            .iter()
            .filter(|p| matches!(p.status, PartStatus::Failed { .. }))
    }
}

/// Result of an extract run.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Facts about the input document.
    pub document: DocumentInfo,
    /// Requested end page, before clamping.
    pub requested_end: u32,
    /// Range actually extracted.
    pub range: ResolvedRange,
    /// Output file.
    pub output: PathBuf,
    /// Write statistics, absent in dry-run mode.
    pub write: Option<WriteStatistics>,
}

impl ExtractReport {
    /// Warning about a clamped end page, shown only in verbose mode.
    pub fn clamp_warning(&self, verbose: bool) -> Option<String> {
        if !(self.range.clamped && verbose) {
            return None;
        }
        Some(format!(
            "End page {} exceeds total pages ({}), using {} instead",
            self.requested_end, self.document.page_count, self.range.end
        ))
    }
}

/// Splits documents and extracts page ranges.
#[derive(Debug, Clone, Default)]
pub struct PdfSplitter {
    reader: PdfReader,
    writer: PdfWriter,
    extractor: PageExtractor,
}

impl PdfSplitter {
    /// Create a splitter with the default reader and writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split the input into consecutive parts of `pages_per_file` pages.
    ///
    /// A part that fails to save is recorded as failed and the remaining
    /// parts are still written.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or input is invalid, the
    /// document cannot be loaded, the output directory cannot be created,
    /// or a part fails in a way that is not recoverable.
    pub async fn split(&self, config: &SplitConfig) -> Result<SplitReport> {
        config.validate()?;
        InputValidator::pdf_file(&config.input)?;

        let loaded = self.reader.load(&config.input).await?;
        let document = DocumentInfo::from_loaded(&loaded);
        let total_pages = loaded.page_count;
        let plans = plan_parts(
            &config.input,
            &config.output_dir,
            total_pages,
            config.pages_per_file,
        );

        tracing::info!(
            input = %config.input.display(),
            total_pages,
            parts = plans.len(),
            "splitting pdf"
        );

        if config.dry_run {
            return Ok(SplitReport {
                document,
                parts: plans
                    .into_iter()
                    .map(|plan| PartOutcome {
                        plan,
                        status: PartStatus::Planned,
                    })
                    .collect(),
            });
        }

        tokio::fs::create_dir_all(&config.output_dir)
            .await
            .map_err(|e| FileKitError::FailedToCreateOutput {
                path: config.output_dir.clone(),
                source: e,
            })?;

        let source = Arc::new(loaded.document);
        let mut parts = Vec::with_capacity(plans.len());

        for plan in plans {
            let status = match self.write_part(&source, &plan).await {
                Ok(stats) => PartStatus::Written {
                    file_size: stats.file_size,
                },
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(
                        part = %plan.path.display(),
                        error = %err,
                        "could not save part"
                    );
                    PartStatus::Failed {
                        reason: err.to_string(),
                    }
                }
                Err(err) => return Err(err),
            };
            parts.push(PartOutcome { plan, status });
        }

        Ok(SplitReport { document, parts })
    }

    async fn write_part(
        &self,
        source: &Arc<Document>,
        plan: &PartPlan,
    ) -> Result<WriteStatistics> {
        let doc = self.extract_blocking(Arc::clone(source), plan.pages()).await?;
        self.writer.save(doc, &plan.path).await
    }

    async fn extract_blocking(&self, source: Arc<Document>, pages: Vec<u32>) -> Result<Document> {
        let extractor = self.extractor;
        task::spawn_blocking(move || extractor.extract_pages(&source, &pages))
            .await
            .map_err(|e| FileKitError::other(format!("Extract task failed: {e}")))?
    }

    /// Extract a contiguous page range into a new document.
    ///
    /// An end page beyond the document is clamped to the last page; the
    /// report records whether that happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or input is invalid, the start
    /// page lies beyond the document, or extraction or saving fails.
    pub async fn extract(&self, config: &ExtractConfig) -> Result<ExtractReport> {
        config.validate()?;
        InputValidator::pdf_file(&config.input)?;

        let loaded = self.reader.load(&config.input).await?;
        let document = DocumentInfo::from_loaded(&loaded);
        let total_pages = loaded.page_count;
        let range = config.range.resolve(total_pages)?;

        if range.clamped {
            tracing::debug!(
                requested = config.range.end,
                total_pages,
                "end page exceeds document, clamping"
            );
        }

        let mut report = ExtractReport {
            document,
            requested_end: config.range.end,
            range,
            output: config.output.clone(),
            write: None,
        };

        if config.dry_run {
            return Ok(report);
        }

        let doc = self
            .extract_blocking(Arc::new(loaded.document), range.pages())
            .await?;
        report.write = Some(self.writer.save(doc, &config.output).await?);

        Ok(report)
    }
}
