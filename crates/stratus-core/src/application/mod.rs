//! Application layer for Stratus.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RenderService, StackService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! template logic itself. All model rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    RenderService,
    RenderSummary, // DTO for render results
    StackService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentSink, StackCatalog};

pub use error::ApplicationError;
