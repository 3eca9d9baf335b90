//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stratus-adapters` crate provides implementations.

use crate::domain::{StackInfo, Template};
use crate::error::StratusResult;

/// Port for delivering a rendered document.
///
/// Implemented by:
/// - `stratus_adapters::sink::StdoutSink` (production default)
/// - `stratus_adapters::sink::FileSink` (`--output FILE`)
/// - `stratus_adapters::sink::MemorySink` (testing)
///
/// ## Design Notes
///
/// - Receives the complete text at once; a sink never sees partial output
/// - Implementations must not append anything to the text
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSink: Send + Sync {
    /// Deliver the full document text.
    fn write(&self, contents: &str) -> StratusResult<()>;

    /// Human-readable destination, e.g. `stdout` or a file path.
    fn destination(&self) -> String;
}

/// Port for stack definition lookup.
///
/// Implemented by:
/// - `stratus_adapters::catalog::InMemoryCatalog` (built-in stacks)
#[cfg_attr(test, mockall::automock)]
pub trait StackCatalog: Send + Sync {
    /// Build the template of the named stack.
    fn build(&self, name: &str) -> StratusResult<Template>;

    /// Describe every stack, in catalog order.
    fn list(&self) -> StratusResult<Vec<StackInfo>>;

    /// Whether a stack with this name exists.
    fn contains(&self, name: &str) -> bool;
}
