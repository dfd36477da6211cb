//! Error types for the JSON boundary
//!
//! Conversion itself never fails: malformed ranges, unknown styles, and
//! unknown entities all degrade to silent fallbacks. Errors only exist where
//! raw JSON enters the pipeline.

use std::fmt;

/// Errors from the JSON-level entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The input was not valid raw editor content JSON.
    InvalidContent(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidContent(msg) => {
                write!(f, "Invalid raw content: {msg}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
