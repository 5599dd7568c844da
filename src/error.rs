//! Error types for tempo analysis

use std::fmt;

/// Errors that can occur during tempo analysis
///
/// The peak extractor and interval voter never fail; these errors come from
/// buffer construction, configuration validation and the top-level entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
