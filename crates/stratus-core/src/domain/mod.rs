// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stratus.
//!
//! This module contains the template document model and its renderer. All
//! I/O (writing documents, discovering stacks) is handled via ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std + thiserror + serde_json for the document
//! - **Immutable entities**: definitions are frozen once built
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod document;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use document::{Document, JsonStyle};
pub use entities::{
    parameter::{Parameter, ParameterBuilder},
    resource::{Resource, ResourceBuilder},
    stack::{StackDefinition, StackInfo},
    template::{DEFAULT_FORMAT_VERSION, Template},
    value::{Intrinsic, Reference, Value, base64, get_att, join, pseudo},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{EntityKind, LogicalName, PseudoParam};

pub use validation::DomainValidator;
