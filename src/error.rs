//! Error types for pomelo operations.
//!
//! The classification and analysis core is total over its inputs and never
//! returns an error: malformed XML degrades to best-effort extraction and
//! unexpected path shapes degrade to the `Other`/`false` defaults. The only
//! fallible operations live at the retrieval boundary (`fetch`), whose
//! failures surface here as distinct kinds and propagate unrecovered.

use thiserror::Error;

/// Result type for pomelo operations.
pub type Result<T> = std::result::Result<T, PomeloError>;

/// Error types for pomelo operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PomeloError {
    /// Local template file does not exist
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Remote server answered with a non-success status code
    #[error("Request for '{url}' failed with HTTP status {status}")]
    Http { url: String, status: u16 },

    /// Template source failed validation before any I/O was attempted
    #[error("Invalid template source: {0}")]
    InvalidSource(String),

    /// Transport-level failure while fetching a remote template
    #[cfg(feature = "fetch")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
