//! Stack definitions: named recipes that build a [`Template`].

use std::fmt;

use crate::domain::{entities::template::Template, error::DomainError};

/// A named, reusable template recipe.
///
/// Implementations are pure: `build` constructs a fresh template on every
/// call and never performs I/O. Adapters ship the concrete stacks.
pub trait StackDefinition: Send + Sync {
    /// Catalog key, e.g. `ecs-cluster`.
    fn name(&self) -> &'static str;

    /// One-line human description.
    fn summary(&self) -> &'static str;

    /// Construct the template.
    fn build(&self) -> Result<Template, DomainError>;
}

/// Display-oriented description of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StackInfo {
    pub name: String,
    pub summary: String,
    pub parameters: usize,
    pub resources: usize,
}

impl StackInfo {
    /// Describe `definition` by building it once.
    pub fn describe(definition: &dyn StackDefinition) -> Result<Self, DomainError> {
        let template = definition.build()?;
        Ok(Self {
            name: definition.name().to_string(),
            summary: definition.summary().to_string(),
            parameters: template.parameters().len(),
            resources: template.resources().len(),
        })
    }
}

impl fmt::Display for StackInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} parameters, {} resources)",
            self.name, self.parameters, self.resources
        )
    }
}
