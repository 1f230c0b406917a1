//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod rules;

use std::path::{Path, PathBuf};

use kazu_core::{KazuConfig, Mode};

/// Extraction mode as accepted on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ModeArg {
    /// Allow-listed native numerals only
    Default,
    /// Every native numeral run
    ExtractAll,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Default => Mode::Default,
            ModeArg::ExtractAll => Mode::ExtractAll,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kazu")
        .join("config.json")
}

/// Load the config from `config_path`, else the default location, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KazuConfig> {
    if let Some(path) = config_path {
        return Ok(KazuConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(KazuConfig::from_file(&default_path)?)
    } else {
        Ok(KazuConfig::default())
    }
}

/// Apply command-line overrides to a loaded config.
pub fn apply_overrides(config: &mut KazuConfig, mode: Option<ModeArg>, bundle: Option<PathBuf>) {
    if let Some(mode) = mode {
        config.extraction.mode = mode.into();
    }
    if let Some(bundle) = bundle {
        config.extraction.bundle_path = Some(bundle);
    }
}
