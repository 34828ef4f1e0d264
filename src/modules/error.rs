use thiserror::Error;

/// Errors reported by privacy modules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModuleError {
    /// The underlying service is not reachable.
    #[error("Module '{module}' unavailable")]
    Unavailable { module: &'static str },

    #[error("{what} not found")]
    NotFound { what: String },

    /// The service refused the change.
    #[error("Request rejected: {reason}")]
    Rejected { reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
