//! Built-in stack definitions.
//!
//! Each stack is a plain [`StackDefinition`]; [`builtin`] is the list the
//! default catalog is seeded with.

use std::sync::Arc;

use stratus_core::domain::StackDefinition;

pub mod ecs_cluster;

pub use ecs_cluster::EcsClusterStack;

/// Every stack that ships with Stratus, in listing order.
pub fn builtin() -> Vec<Arc<dyn StackDefinition>> {
    vec![Arc::new(EcsClusterStack)]
}
