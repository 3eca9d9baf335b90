//! Template resources: named, typed infrastructure entities.

use crate::domain::{entities::value::Value, error::DomainError, value_objects::LogicalName};

/// A named, typed entity with an ordered property bag.
///
/// `resource_type` is an opaque provider-qualified tag
/// (`AWS::EC2::SecurityGroup`). Properties are not checked against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    name: LogicalName,
    resource_type: String,
    properties: Vec<(String, Value)>,
    depends_on: Vec<LogicalName>,
}

impl Resource {
    /// Start building a resource.
    pub fn builder(name: impl Into<String>, resource_type: impl Into<String>) -> ResourceBuilder {
        ResourceBuilder::new(name, resource_type)
    }

    pub fn name(&self) -> &LogicalName {
        &self.name
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn properties(&self) -> &[(String, Value)] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn depends_on(&self) -> &[LogicalName] {
        &self.depends_on
    }
}

/// Builder for [`Resource`].
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    name: String,
    resource_type: String,
    properties: Vec<(String, Value)>,
    depends_on: Vec<String>,
}

impl ResourceBuilder {
    pub fn new(name: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            properties: Vec::new(),
            depends_on: Vec::new(),
        }
    }

    /// Set a property. A repeated key keeps its first position.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((key, value)),
        }
        self
    }

    /// Add an explicit ordering dependency on another resource.
    pub fn depends_on(mut self, target: impl AsRef<str>) -> Self {
        let target = target.as_ref();
        if !self.depends_on.iter().any(|d| d == target) {
            self.depends_on.push(target.to_string());
        }
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<Resource, DomainError> {
        let name = LogicalName::try_new(self.name)?;

        if self.resource_type.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Type" });
        }

        if self.properties.iter().any(|(k, _)| k.is_empty()) {
            return Err(DomainError::InvalidValue {
                path: format!("Resources.{name}.Properties"),
                reason: "property name is empty".into(),
            });
        }

        let depends_on = self
            .depends_on
            .into_iter()
            .map(LogicalName::try_new)
            .collect::<Result<Vec<_>, _>>()?;

        if depends_on.contains(&name) {
            return Err(DomainError::InvalidValue {
                path: format!("Resources.{name}.DependsOn"),
                reason: "a resource cannot depend on itself".into(),
            });
        }

        Ok(Resource {
            name,
            resource_type: self.resource_type,
            properties: self.properties,
            depends_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::value::Reference;

    #[test]
    fn builder_collects_properties_in_order() {
        let vpc = Reference::to("VpcId");
        let sg = Resource::builder("Sg", "AWS::EC2::SecurityGroup")
            .property("GroupDescription", "web")
            .property("VpcId", &vpc)
            .build()
            .unwrap();

        let keys: Vec<_> = sg.properties().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["GroupDescription", "VpcId"]);
        assert_eq!(sg.property("VpcId"), Some(&Value::Ref(vpc)));
    }

    #[test]
    fn depends_on_is_deduplicated() {
        let res = Resource::builder("TargetGroup", "AWS::ElasticLoadBalancingV2::TargetGroup")
            .depends_on("LoadBalancer")
            .depends_on(Reference::to("LoadBalancer"))
            .build()
            .unwrap();

        assert_eq!(res.depends_on().len(), 1);
        assert_eq!(res.depends_on()[0].as_str(), "LoadBalancer");
    }

    #[test]
    fn self_dependency_is_rejected() {
        let result = Resource::builder("Loop", "AWS::SNS::Topic")
            .depends_on("Loop")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn invalid_dependency_name_is_rejected() {
        let result = Resource::builder("Topic", "AWS::SNS::Topic")
            .depends_on("not a name")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidName { .. })));
    }

    #[test]
    fn empty_property_name_is_rejected() {
        let result = Resource::builder("Topic", "AWS::SNS::Topic")
            .property("", "x")
            .build();
        assert!(matches!(result, Err(DomainError::InvalidValue { .. })));
    }
}
