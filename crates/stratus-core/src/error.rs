//! Unified error handling for Stratus Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stratus Core operations.
///
/// This enum wraps all possible errors that can occur when using stratus-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StratusError {
    /// Errors from the template model (registration or render failures).
    #[error("Template error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StratusError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stratus".into(),
                "Please report this issue at: https://github.com/cosecruz/stratus/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Integrity => ErrorCategory::Integrity,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Integrity,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StratusResult<T> = Result<T, StratusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;

    #[test]
    fn domain_categories_are_mapped() {
        let dup: StratusError = DomainError::DuplicateName {
            name: "A".into(),
            existing: EntityKind::Resource,
        }
        .into();
        assert_eq!(dup.category(), ErrorCategory::Validation);

        let dangling: StratusError = DomainError::DanglingReference {
            target: "B".into(),
            referenced_from: "Resources.A".into(),
        }
        .into();
        assert_eq!(dangling.category(), ErrorCategory::Integrity);
        assert!(dangling.suggestions().iter().any(|s| s.contains("'B'")));
    }
}
