use std::collections::HashSet;

use crate::domain::{
    entities::{Template, value::Value},
    error::DomainError,
    value_objects::LogicalName,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// Full integrity check: everything `Template::render` would reject.
    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.render().map(|_| ())
    }

    /// Catalog keys are lowercase kebab-case, e.g. `ecs-cluster`.
    pub fn validate_stack_name(name: &str) -> Result<(), DomainError> {
        let well_formed = !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && !name.contains("--")
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if well_formed {
            Ok(())
        } else {
            Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: "stack names are lowercase kebab-case".into(),
            })
        }
    }

    /// Parameters that no property, constraint or expression refers to.
    pub fn unused_parameters(template: &Template) -> Vec<&LogicalName> {
        let referenced: HashSet<&str> = template
            .resources()
            .iter()
            .flat_map(|r| r.properties().iter().map(|(_, v)| v))
            .chain(
                template
                    .parameters()
                    .iter()
                    .flat_map(|p| p.constraints().iter().map(|(_, v)| v)),
            )
            .flat_map(Value::references)
            .collect();

        template
            .parameters()
            .iter()
            .map(|p| p.name())
            .filter(|name| !referenced.contains(name.as_str()))
            .collect()
    }
}
