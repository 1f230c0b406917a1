//! Rules command - show the active rule table.

use std::path::PathBuf;

use clap::Args;
use console::style;

use super::{apply_overrides, load_config, ModeArg};

/// Arguments for the rules command.
#[derive(Args)]
pub struct RulesArgs {
    /// Extraction mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Custom definition bundle (JSON)
    #[arg(short, long)]
    bundle: Option<PathBuf>,

    /// Also print each rule's pattern
    #[arg(long)]
    patterns: bool,
}

pub fn run(args: RulesArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, args.mode, args.bundle);

    let extractor = config.extractor()?;
    let table = extractor.table();

    println!(
        "{} {} rules, mode {}, domain {}",
        style("ℹ").blue(),
        table.len(),
        config.extraction.mode,
        table.domain()
    );

    for (index, entry) in table.entries().iter().enumerate() {
        println!(
            "{:>2}. {:<22} {}",
            index + 1,
            entry.name(),
            style(entry.tag()).cyan()
        );
        if args.patterns {
            println!("    {}", style(entry.matcher().key()).dim());
        }
    }

    Ok(())
}
