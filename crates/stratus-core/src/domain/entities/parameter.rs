//! Template parameters: named, typed input slots.

use crate::domain::{entities::value::Value, error::DomainError, value_objects::LogicalName};

/// Keys the renderer emits itself; constraints may not shadow them.
const RESERVED_KEYS: [&str; 2] = ["Type", "Description"];

/// A named, typed external input slot.
///
/// Immutable once built. `param_type` is an opaque tag such as `Number` or
/// `List<AWS::EC2::Subnet::Id>`; constraints are passed through unvalidated
/// in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: LogicalName,
    param_type: String,
    description: Option<String>,
    constraints: Vec<(String, Value)>,
}

impl Parameter {
    /// Start building a parameter.
    pub fn builder(name: impl Into<String>, param_type: impl Into<String>) -> ParameterBuilder {
        ParameterBuilder::new(name, param_type)
    }

    pub fn name(&self) -> &LogicalName {
        &self.name
    }

    pub fn param_type(&self) -> &str {
        &self.param_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn constraints(&self) -> &[(String, Value)] {
        &self.constraints
    }

    /// Look up a single constraint by key.
    pub fn constraint(&self, key: &str) -> Option<&Value> {
        self.constraints
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// Builder for [`Parameter`].
///
/// Setting the same constraint twice keeps the position of the first call
/// and the value of the last.
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    name: String,
    param_type: String,
    description: Option<String>,
    constraints: Vec<(String, Value)>,
}

impl ParameterBuilder {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            description: None,
            constraints: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Arbitrary pass-through constraint.
    pub fn constraint(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.constraints.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.constraints.push((key, value)),
        }
        self
    }

    pub fn default_value(self, value: impl Into<Value>) -> Self {
        self.constraint("Default", value)
    }

    pub fn allowed_values<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.constraint("AllowedValues", Value::list(values))
    }

    pub fn allowed_pattern(self, pattern: impl Into<String>) -> Self {
        self.constraint("AllowedPattern", Value::String(pattern.into()))
    }

    pub fn constraint_description(self, text: impl Into<String>) -> Self {
        self.constraint("ConstraintDescription", Value::String(text.into()))
    }

    pub fn min_value(self, n: impl Into<Value>) -> Self {
        self.constraint("MinValue", n)
    }

    pub fn max_value(self, n: impl Into<Value>) -> Self {
        self.constraint("MaxValue", n)
    }

    pub fn min_length(self, n: u32) -> Self {
        self.constraint("MinLength", n)
    }

    pub fn max_length(self, n: u32) -> Self {
        self.constraint("MaxLength", n)
    }

    pub fn no_echo(self, no_echo: bool) -> Self {
        self.constraint("NoEcho", no_echo)
    }

    /// Validate and build.
    pub fn build(self) -> Result<Parameter, DomainError> {
        let name = LogicalName::try_new(self.name)?;

        if self.param_type.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Type" });
        }

        if let Some((key, _)) = self
            .constraints
            .iter()
            .find(|(k, _)| k.is_empty() || RESERVED_KEYS.contains(&k.as_str()))
        {
            return Err(DomainError::InvalidValue {
                path: format!("Parameters.{name}"),
                reason: format!("'{key}' cannot be used as a constraint key"),
            });
        }

        Ok(Parameter {
            name,
            param_type: self.param_type,
            description: self.description,
            constraints: self.constraints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_constraint_order() {
        let param = Parameter::builder("InstanceType", "String")
            .description("EC2 instance type")
            .default_value("t2.micro")
            .allowed_values(["t2.micro", "t2.small"])
            .build()
            .unwrap();

        let keys: Vec<_> = param.constraints().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Default", "AllowedValues"]);
        assert_eq!(param.description(), Some("EC2 instance type"));
    }

    #[test]
    fn repeated_constraint_replaces_value_in_place() {
        let param = Parameter::builder("Size", "Number")
            .min_value(1)
            .max_value(10)
            .min_value(2)
            .build()
            .unwrap();

        assert_eq!(param.constraints()[0].0, "MinValue");
        assert_eq!(param.constraint("MinValue"), Some(&Value::Integer(2)));
    }

    #[test]
    fn empty_type_is_rejected() {
        let err = Parameter::builder("Size", " ").build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "Type" });
    }

    #[test]
    fn reserved_constraint_key_is_rejected() {
        let result = Parameter::builder("Size", "Number")
            .constraint("Type", "String")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn invalid_name_is_rejected() {
        let result = Parameter::builder("vpc-id", "String").build();
        assert!(matches!(result, Err(DomainError::InvalidName { .. })));
    }
}
