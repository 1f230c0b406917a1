//! Batch command - extract numerals from many text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use kazu_core::ExtractionResult;

use super::extract::{format_rows, OutputFormat, OutputRow};
use super::{apply_overrides, load_config, ModeArg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Extraction mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Custom definition bundle (JSON)
    #[arg(short, long)]
    bundle: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers (0 = all cores)
    #[arg(short = 'j', long, default_value = "0")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    results: Vec<ExtractionResult>,
    error: Option<String>,
}

/// Files read per extraction round; the progress bar advances per round.
const FILES_PER_ROUND: usize = 64;

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, args.mode, args.bundle.clone());
    let format = OutputFormat::resolve(args.format, &config)?;
    let extractor = config.extractor()?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text" | "md")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut file_results = Vec::with_capacity(files.len());
    for round in files.chunks(FILES_PER_ROUND) {
        let mut reads = Vec::with_capacity(round.len());
        for path in round {
            match fs::read_to_string(path) {
                Ok(text) => reads.push(Ok(text)),
                Err(e) => {
                    let error_msg = e.to_string();
                    if !args.continue_on_error {
                        error!("Failed to read {}: {}", path.display(), error_msg);
                        pb.abandon();
                        anyhow::bail!("Processing failed: {}", error_msg);
                    }
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    reads.push(Err(error_msg));
                }
            }
        }

        let texts: Vec<&str> = reads.iter().filter_map(|r| r.as_deref().ok()).collect();
        let mut extracted = extractor.extract_batch(&texts, args.jobs).into_iter();

        // Results stay in input order, failed reads included.
        for (path, read) in round.iter().zip(reads.iter()) {
            let file_result = match read {
                Ok(text) => {
                    let results = extracted.next().unwrap_or_default();
                    let written =
                        write_file_output(path, text, &results, format, &args, config.output.pretty);
                    match written {
                        Ok(()) => FileResult {
                            path: path.clone(),
                            results,
                            error: None,
                        },
                        Err(e) if args.continue_on_error => {
                            warn!("Failed to write output for {}: {}", path.display(), e);
                            FileResult {
                                path: path.clone(),
                                results,
                                error: Some(e.to_string()),
                            }
                        }
                        Err(e) => {
                            error!("Failed to write output for {}: {}", path.display(), e);
                            pb.abandon();
                            return Err(e);
                        }
                    }
                }
                Err(error_msg) => FileResult {
                    path: path.clone(),
                    results: Vec::new(),
                    error: Some(error_msg.clone()),
                },
            };
            file_results.push(file_result);
        }

        pb.inc(round.len() as u64);
    }

    pb.finish_with_message("Complete");

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &file_results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed = file_results.iter().filter(|r| r.error.is_some()).count();
    let numerals: usize = file_results.iter().map(|r| r.results.len()).sum();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}: {} numerals found",
        style("✓").green(),
        file_results.len(),
        start.elapsed(),
        numerals
    );
    if failed > 0 {
        eprintln!("{} {} files failed", style("✗").red(), failed);
    }

    Ok(())
}

fn write_file_output(
    path: &Path,
    text: &str,
    results: &[ExtractionResult],
    format: OutputFormat,
    args: &BatchArgs,
    pretty: bool,
) -> anyhow::Result<()> {
    let rows: Vec<OutputRow> = results
        .iter()
        .map(|r| OutputRow::new(r, text, false))
        .collect();
    let content = format_rows(&rows, format, pretty)?;

    match &args.output_dir {
        Some(output_dir) => {
            let output_name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let output_path = output_dir.join(format!("{}.{}", output_name, format.extension()));

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
        None => {
            println!("== {}", path.display());
            print!("{}", content);
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "numerals", "error"])?;
    for result in results {
        wtr.write_record([
            result.path.display().to_string(),
            result.results.len().to_string(),
            result.error.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
