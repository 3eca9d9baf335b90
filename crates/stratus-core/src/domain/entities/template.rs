//! Template aggregate: the registry of parameters and resources.
//!
//! The template is the root of the document model. It owns every parameter
//! and resource by logical name and is the only thing that can render.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Template (Aggregate Root)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  version: "2010-09-09"                                      │
//! │  description: Option<String>                                │
//! │  parameters: Vec<Parameter>    (registration order)         │
//! │  resources:  Vec<Resource>     (registration order)         │
//! │  names: HashMap<LogicalName, EntityKind>  (one namespace)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  add_parameter(Parameter) -> Reference                      │
//! │  add_resource(Resource)   -> Reference                      │
//! │  render()                 -> Document                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Decisions
//!
//! ### 1. Explicit registration
//!
//! Definitions are plain values built with `Parameter::builder` /
//! `Resource::builder` and handed to `add_*`. Nothing registers itself as a
//! side effect of construction, so whoever holds `&mut Template` owns the
//! session.
//!
//! ### 2. Lazy reference checks
//!
//! `add_resource` does not look at the references inside properties. A
//! resource may point at one registered later; integrity is checked when the
//! template renders (see `domain::document`).
//!
//! ### 3. Vec + index instead of a map
//!
//! Output order must follow registration order. The entities live in plain
//! vectors and a `HashMap` guards the shared namespace.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    document::{self, Document},
    entities::{parameter::Parameter, resource::Resource, value::Reference},
    error::DomainError,
    value_objects::{EntityKind, LogicalName},
};

/// The only format version CloudFormation has ever published.
pub const DEFAULT_FORMAT_VERSION: &str = "2010-09-09";

/// Aggregate document model of parameters and resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    version: String,
    description: Option<String>,
    parameters: Vec<Parameter>,
    resources: Vec<Resource>,
    names: HashMap<LogicalName, EntityKind>,
}

impl Template {
    /// Create an empty template with the default format version.
    pub fn new() -> Self {
        Self {
            version: DEFAULT_FORMAT_VERSION.to_string(),
            description: None,
            parameters: Vec::new(),
            resources: Vec::new(),
            names: HashMap::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Header
    // -------------------------------------------------------------------------

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Register a parameter.
    ///
    /// # Errors
    /// - `DuplicateName`: the name is already used by a parameter or resource
    pub fn add_parameter(&mut self, parameter: Parameter) -> Result<Reference, DomainError> {
        let name = parameter.name().clone();
        self.claim(&name, EntityKind::Parameter)?;
        debug!(name = %name, param_type = parameter.param_type(), "parameter registered");
        self.parameters.push(parameter);
        Ok(Reference::to(name.into_string()))
    }

    /// Register a resource.
    ///
    /// # Errors
    /// - `DuplicateName`: the name is already used by a parameter or resource
    pub fn add_resource(&mut self, resource: Resource) -> Result<Reference, DomainError> {
        let name = resource.name().clone();
        self.claim(&name, EntityKind::Resource)?;
        debug!(
            name = %name,
            resource_type = resource.resource_type(),
            properties = resource.properties().len(),
            "resource registered"
        );
        self.resources.push(resource);
        Ok(Reference::to(name.into_string()))
    }

    fn claim(&mut self, name: &LogicalName, kind: EntityKind) -> Result<(), DomainError> {
        if let Some(existing) = self.names.get(name) {
            return Err(DomainError::DuplicateName {
                name: name.to_string(),
                existing: *existing,
            });
        }
        self.names.insert(name.clone(), kind);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Which registry, if any, holds `name`.
    pub fn kind_of(&self, name: &str) -> Option<EntityKind> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name().as_str() == name)
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name().as_str() == name)
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Number of registered entities across both registries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the whole template into a document.
    ///
    /// All-or-nothing: the first dangling reference or malformed value
    /// aborts the render. The template itself is never modified.
    ///
    /// # Errors
    /// - `DanglingReference`: a Ref, GetAtt or DependsOn names nothing registered
    /// - `InvalidValue`: a value cannot be represented in the document
    pub fn render(&self) -> Result<Document, DomainError> {
        document::render(self)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}
