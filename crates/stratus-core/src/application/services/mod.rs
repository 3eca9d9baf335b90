//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render a stack" or "list the catalog".

pub mod render_service;
pub mod stack_service;

pub use render_service::{RenderService, RenderSummary};
pub use stack_service::StackService;
