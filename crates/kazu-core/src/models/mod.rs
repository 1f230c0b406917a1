//! Data models for numeral extraction.

pub mod config;
pub mod result;
pub mod types;

pub use config::KazuConfig;
pub use result::ExtractionResult;
pub use types::{Language, Mode, TypeTag};
