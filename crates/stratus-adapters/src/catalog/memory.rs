//! In-memory stack catalog with built-in stacks.

use std::sync::{Arc, RwLock};

use tracing::{debug, instrument};

use stratus_core::{
    application::{ApplicationError, ports::StackCatalog},
    domain::{DomainValidator as validator, StackDefinition, StackInfo, Template},
    error::StratusResult,
};

use crate::stacks;

/// Thread-safe in-memory stack catalog.
///
/// Stacks are kept in registration order so `list` is stable.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Vec<Arc<dyn StackDefinition>>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in stacks registered.
    pub fn with_builtin() -> StratusResult<Self> {
        let catalog = Self::new();
        for stack in stacks::builtin() {
            catalog.register(stack)?;
        }
        Ok(catalog)
    }

    /// Add a stack definition. Names must be unique kebab-case.
    pub fn register(&self, stack: Arc<dyn StackDefinition>) -> StratusResult<()> {
        validator::validate_stack_name(stack.name())?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        if inner.iter().any(|s| s.name() == stack.name()) {
            return Err(ApplicationError::DuplicateStack {
                name: stack.name().to_string(),
            }
            .into());
        }

        debug!(stack = stack.name(), "Registered stack");
        inner.push(stack);
        Ok(())
    }

    /// Names of all registered stacks, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.iter().map(|s| s.name().to_string()).collect())
            .unwrap_or_default()
    }

    /// Get the number of stacks.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, name: &str) -> StratusResult<Arc<dyn StackDefinition>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        inner
            .iter()
            .find(|s| s.name() == name)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::StackNotFound {
                    name: name.to_string(),
                    available: inner.iter().map(|s| s.name().to_string()).collect(),
                }
                .into()
            })
    }
}

impl std::fmt::Debug for InMemoryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCatalog")
            .field("stacks", &self.names())
            .finish()
    }
}

impl StackCatalog for InMemoryCatalog {
    #[instrument(skip(self))]
    fn build(&self, name: &str) -> StratusResult<Template> {
        // Lock is released before the definition runs.
        let stack = self.find(name)?;
        Ok(stack.build()?)
    }

    fn list(&self) -> StratusResult<Vec<StackInfo>> {
        let stacks: Vec<_> = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?
            .clone();

        stacks
            .iter()
            .map(|s| StackInfo::describe(s.as_ref()).map_err(Into::into))
            .collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }
}
