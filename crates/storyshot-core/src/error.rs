//! Error types for Storyshot

use thiserror::Error;

/// Main error type for Storyshot operations
#[derive(Error, Debug)]
pub enum StoryError {
    /// Gallery backend is not configured (missing URL or key)
    #[error("gallery backend is not configured")]
    Disabled,

    /// HTTP transport error talking to the backend
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned status {0}")]
    Backend(u16),

    /// Backend answered with a body we could not interpret
    #[error("unexpected backend response: {0}")]
    Serialization(String),

    /// Card rasterization failed (no partial output is produced)
    #[error("card export failed: {0}")]
    Export(String),
}

impl StoryError {
    /// True when the failure points at a missing or misconfigured backend
    /// rather than a transient fetch problem. The gallery page shows a
    /// setup hint for these.
    pub fn is_setup_problem(&self) -> bool {
        matches!(self, StoryError::Disabled)
    }
}
