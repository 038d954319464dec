//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Severity level string did not match any known level
    #[error("Invalid severity level: {0}")]
    InvalidSeverityLevel(String),
}
