//! Error handling module for the cap-table sidebar
//!
//! The derivations and the drag dispatcher never fail; malformed input there
//! resolves to empty results or a no-op intent. Errors only come from the host
//! side: loading snapshots, validating them, and applying intents.

use thiserror::Error;

/// Main error type for the sidebar crate
#[derive(Error, Debug)]
pub enum SidebarError {
    /// IO errors (reading or writing snapshot files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot invariant violations (duplicate holder names, empty names)
    #[error("Validation error: {0}")]
    Validation(String),

    /// An intent that cannot be applied to the current snapshot
    #[error("Intent rejected: {0}")]
    Intent(String),
}

/// Result type alias for sidebar operations
pub type Result<T> = std::result::Result<T, SidebarError>;

impl SidebarError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an intent rejection error
    pub fn intent(msg: impl Into<String>) -> Self {
        Self::Intent(msg.into())
    }
}
