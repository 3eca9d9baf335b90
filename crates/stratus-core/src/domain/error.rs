// ============================================================================
// domain/error.rs - TEMPLATE MODEL ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::EntityKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (services hand them back by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Every variant names the offending logical name or value path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Registration Errors
    // ========================================================================
    #[error("name '{name}' is already registered as a {existing}")]
    DuplicateName { name: String, existing: EntityKind },

    #[error("invalid logical name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Render Errors
    // ========================================================================
    #[error("'{referenced_from}' references '{target}', which is not registered")]
    DanglingReference {
        target: String,
        referenced_from: String,
    },

    #[error("invalid value at {path}: {reason}")]
    InvalidValue { path: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateName { name, existing } => vec![
                format!("'{}' is already used by a {}", name, existing),
                "Parameters and resources share one namespace".into(),
                "Rename one of the entities".into(),
            ],
            Self::InvalidName { name, .. } => vec![
                format!("'{}' cannot be used as a logical name", name),
                "Logical names may only contain A-Z, a-z and 0-9".into(),
            ],
            Self::DanglingReference { target, .. } => vec![
                format!("Register a parameter or resource named '{}'", target),
                "Or fix the spelling of the reference".into(),
            ],
            Self::InvalidValue { path, .. } => {
                vec![format!("Check the value defined at {}", path)]
            }
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateName { .. } | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::InvalidValue { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::DanglingReference { .. } => ErrorCategory::Integrity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Integrity,
}
