//! Extract command - find numerals in a single text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use kazu_core::{ExtractionResult, Extractor, KazuConfig};

use super::{apply_overrides, load_config, ModeArg};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text to scan (reads --input or stdin when omitted)
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Extraction mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Custom definition bundle (JSON)
    #[arg(short, long)]
    bundle: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report character offsets instead of byte offsets
    #[arg(long)]
    chars: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text, one span per line
    Text,
}

impl OutputFormat {
    /// Resolve the format from the flag, falling back to the config file.
    pub fn resolve(flag: Option<OutputFormat>, config: &KazuConfig) -> anyhow::Result<Self> {
        match flag {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                anyhow::anyhow!("Unknown output format in config: {}", config.output.format)
            }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Flat, serializable view of a result.
#[derive(Debug, Serialize)]
pub struct OutputRow {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub tag: String,
    pub domain: String,
}

impl OutputRow {
    pub fn new(result: &ExtractionResult, source: &str, chars: bool) -> Self {
        let (start, end) = if chars {
            result.char_span(source)
        } else {
            (result.start, result.end())
        };
        Self {
            start,
            end,
            text: result.text.clone(),
            tag: result.tag.to_string(),
            domain: result.domain.clone(),
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, args.mode, args.bundle.clone());
    let format = OutputFormat::resolve(args.format, &config)?;

    let text = read_input(&args)?;
    debug!("Read {} bytes of input", text.len());

    let extractor = config.extractor()?;
    let results = extractor.extract(&text);
    info!(
        "Found {} numerals ({} mode)",
        results.len(),
        config.extraction.mode
    );

    let rows: Vec<OutputRow> = results
        .iter()
        .map(|r| OutputRow::new(r, &text, args.chars))
        .collect();
    let output = format_rows(&rows, format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn read_input(args: &ExtractArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.input {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub fn format_rows(rows: &[OutputRow], format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = if pretty {
                serde_json::to_string_pretty(rows)?
            } else {
                serde_json::to_string(rows)?
            };
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => format_csv(rows),
        OutputFormat::Text => Ok(format_text(rows)),
    }
}

fn format_csv(rows: &[OutputRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["start", "end", "text", "tag", "domain"])?;
    for row in rows {
        wtr.write_record([
            &row.start.to_string(),
            &row.end.to_string(),
            &row.text,
            &row.tag,
            &row.domain,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(rows: &[OutputRow]) -> String {
    let mut output = String::new();

    for row in rows {
        output.push_str(&format!(
            "{}..{}\t{}\t{}\n",
            row.start, row.end, row.tag, row.text
        ));
    }

    output
}
