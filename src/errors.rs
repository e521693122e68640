//! Error types for the dashboard core.

use thiserror::Error;

/// Errors that can occur when loading or deriving dashboard data.
#[derive(Debug, Error)]
pub enum DashError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },
}

/// Convenience result type for dashboard operations.
pub type DashResult<T> = Result<T, DashError>;
