//! Value types shared by the rule table and the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Semantic category of a match: an extraction-domain prefix plus a subtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeTag {
    /// Extraction domain, e.g. `integer`.
    pub prefix: String,
    /// How the match was recognized, e.g. `number-suffix`.
    pub subtype: String,
}

impl TypeTag {
    pub fn new(prefix: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            subtype: subtype.into(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.subtype)
    }
}

/// Extraction strictness.
///
/// Selects which native-numeral rule a table carries. Fixed once per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Conservative: native numerals only outside of longer words.
    #[default]
    Default,
    /// Aggressive: every native numeral run, no allow list.
    #[serde(alias = "extractall", alias = "extract_all")]
    ExtractAll,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::ExtractAll => "extract-all",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Mode::Default),
            "extract-all" | "extractall" | "extract_all" => Ok(Mode::ExtractAll),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Languages with a built-in definition bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "ja", alias = "ja-jp")]
    Japanese,
}

impl Language {
    /// BCP 47 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja-JP",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "ja-jp" | "japanese" => Ok(Language::Japanese),
            _ => Err(ConfigError::UnknownLanguage(s.to_string())),
        }
    }
}
