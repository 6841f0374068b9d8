//! Error types for the library layer.

use std::fmt;

use crate::export::ExportError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding cache, serialization, input validation and export failures.
///
/// Network-facing stages never surface these during a normal run; they
/// degrade to empty or sentinel data instead.
#[derive(Debug)]
pub enum LeadGenError {
    /// An error from the underlying API client.
    Api(leadgen_api::Error),
    /// A cache operation failed (e.g. deserialization of cached data).
    Cache(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// Writing a CSV or PDF export failed.
    Export(ExportError),
}

impl fmt::Display for LeadGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Cache(msg) => write!(f, "Cache error: {}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Export(e) => write!(f, "Export error: {}", e),
        }
    }
}

impl std::error::Error for LeadGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Export(e) => Some(e),
            _ => None,
        }
    }
}

impl From<leadgen_api::Error> for LeadGenError {
    fn from(e: leadgen_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for LeadGenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<ExportError> for LeadGenError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}
