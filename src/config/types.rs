//! Configuration type definitions.
//!
//! This module contains the data structures used in `latexpage.yaml`.
//! These types are pure data - no I/O or complex logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Root configuration
// =============================================================================

/// The complete configuration. Every field has a default, so an absent or
/// empty config file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub format: FormatConfig,
    /// Sources converted when none are given on the command line
    pub documents: Vec<PathBuf>,
}

// =============================================================================
// Output configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// First line of every converted file
    pub marker: String,
    /// Extension replacing `.tex` on the output file (without the dot)
    pub extension: String,
    /// Directory for output files (defaults to next to each source)
    pub dir: Option<PathBuf>,
}

fn default_marker() -> String {
    "[latexpage]".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            extension: default_extension(),
            dir: None,
        }
    }
}

// =============================================================================
// Format configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Break paragraphs and lists onto separate lines
    pub pretty: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}
