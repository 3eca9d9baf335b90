//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the template
//! model. Model errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No stack with this name in the catalog.
    #[error("Stack not found: {name}")]
    StackNotFound {
        name: String,
        available: Vec<String>,
    },

    /// A stack with this name is already in the catalog.
    #[error("Stack already registered: {name}")]
    DuplicateStack { name: String },

    /// Turning the document into text failed.
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// The sink could not accept the document.
    #[error("Failed to write to {destination}: {reason}")]
    SinkFailed { destination: String, reason: String },

    /// The destination file exists and overwriting was not requested.
    #[error("Output already exists at {path}")]
    DestinationExists { path: PathBuf },

    /// Catalog access failed (lock poisoned).
    #[error("Stack catalog error")]
    CatalogLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StackNotFound { name, available } => {
                let mut out = vec![format!("No stack named '{}'", name)];
                if !available.is_empty() {
                    out.push(format!("Available stacks: {}", available.join(", ")));
                }
                out.push("Try: stratus list".into());
                out
            }
            Self::DuplicateStack { name } => vec![
                format!("Two stack definitions are named '{}'", name),
                "Stack names must be unique within a catalog".into(),
            ],
            Self::SinkFailed { destination, .. } => vec![
                format!("Failed to write: {}", destination),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different --output path".into(),
            ],
            Self::CatalogLockError => vec![
                "A stack definition panicked while the catalog was locked".into(),
                "Use -v to see which stack was being built".into(),
            ],
            Self::SerializationFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StackNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateStack { .. } => ErrorCategory::Configuration,
            Self::DestinationExists { .. } => ErrorCategory::Validation,
            Self::SerializationFailed { .. } | Self::SinkFailed { .. } => ErrorCategory::Internal,
            Self::CatalogLockError => ErrorCategory::Internal,
        }
    }
}
