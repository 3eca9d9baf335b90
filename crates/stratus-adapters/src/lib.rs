//! Infrastructure adapters for Stratus.
//!
//! This crate implements the ports defined in `stratus-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod sink;
pub mod stacks;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use sink::{FileSink, MemorySink, StdoutSink};
pub use stacks::EcsClusterStack;
