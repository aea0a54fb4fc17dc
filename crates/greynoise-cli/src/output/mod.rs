//! Output formatting for different formats.

pub mod json;
pub mod text;
pub mod xml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON with sorted keys
    #[default]
    Json,
    /// XML document with typed elements
    Xml,
    /// One-line plain text summary per record (quick checks only)
    Txt,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
            Self::Txt => write!(f, "txt"),
        }
    }
}
