//! Stack Service - catalog queries.
//!
//! Handles listing and building stacks without rendering them.
//! Separated from RenderService for single responsibility.

use crate::{
    application::ports::StackCatalog,
    domain::{DomainValidator as validator, StackInfo, Template},
    error::StratusResult,
};

/// Service for catalog operations.
pub struct StackService {
    catalog: Box<dyn StackCatalog>,
}

impl StackService {
    /// Create a new stack service.
    pub fn new(catalog: Box<dyn StackCatalog>) -> Self {
        Self { catalog }
    }

    /// Describe every stack in the catalog.
    pub fn list(&self) -> StratusResult<Vec<StackInfo>> {
        self.catalog.list()
    }

    /// Build a stack's template without rendering it.
    pub fn build(&self, name: &str) -> StratusResult<Template> {
        self.catalog.build(name)
    }

    /// Build a stack and run the full integrity check on it.
    pub fn check(&self, name: &str) -> StratusResult<Template> {
        let template = self.catalog.build(name)?;
        validator::validate_template(&template)?;
        Ok(template)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }
}
