//! Rendering a [`Template`] into the CloudFormation JSON document.
//!
//! # Wire shapes
//!
//! | Model                     | Rendered                                   |
//! |---------------------------|--------------------------------------------|
//! | literal                   | as-is                                      |
//! | `Value::Ref(r)`           | `{"Ref": "<target>"}`                      |
//! | `Intrinsic::PseudoParam`  | `{"Ref": "AWS::StackName"}`                |
//! | `Intrinsic::Join`         | `{"Fn::Join": ["<sep>", [parts...]]}`      |
//! | `Intrinsic::Base64`       | `{"Fn::Base64": <inner>}`                  |
//! | `Intrinsic::GetAtt`       | `{"Fn::GetAtt": ["<target>", "<attr>"]}`   |
//! | list / map                | element-wise                               |
//!
//! Top-level keys are `AWSTemplateFormatVersion`, `Description` (only when
//! set), `Parameters` and `Resources`, in that order. Entries follow
//! registration order, so identical templates always produce identical bytes.

use serde::Serialize;
use serde_json::{Map, Number, Value as Json, json};

use crate::domain::{
    entities::{
        parameter::Parameter,
        resource::Resource,
        template::Template,
        value::{Intrinsic, Reference, Value},
    },
    error::DomainError,
    value_objects::EntityKind,
};

/// How a [`Document`] is laid out as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Multi-line, indented by `indent` spaces.
    Pretty { indent: usize },
    /// Single line, no whitespace.
    Compact,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self::Pretty { indent: 4 }
    }
}

/// A fully rendered template.
#[derive(Debug, Clone, PartialEq)]
pub struct Document(Json);

impl Document {
    pub fn as_json(&self) -> &Json {
        &self.0
    }

    pub fn into_json(self) -> Json {
        self.0
    }

    /// Serialize to text, always newline-terminated.
    pub fn to_json_string(&self, style: JsonStyle) -> Result<String, serde_json::Error> {
        let mut out = match style {
            JsonStyle::Compact => serde_json::to_vec(&self.0)?,
            JsonStyle::Pretty { indent } => {
                let indent = " ".repeat(indent);
                let mut buf = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                self.0.serialize(&mut ser)?;
                buf
            }
        };
        out.push(b'\n');
        String::from_utf8(out).map_err(serde::ser::Error::custom)
    }
}

/// Render `template` into a document.
pub(crate) fn render(template: &Template) -> Result<Document, DomainError> {
    let renderer = Renderer { template };

    let mut root = Map::new();
    root.insert(
        "AWSTemplateFormatVersion".into(),
        Json::String(template.version().to_string()),
    );
    if let Some(description) = template.description() {
        root.insert("Description".into(), Json::String(description.to_string()));
    }

    let mut parameters = Map::new();
    for parameter in template.parameters() {
        parameters.insert(
            parameter.name().to_string(),
            renderer.parameter(parameter)?,
        );
    }
    root.insert("Parameters".into(), Json::Object(parameters));

    let mut resources = Map::new();
    for resource in template.resources() {
        resources.insert(resource.name().to_string(), renderer.resource(resource)?);
    }
    root.insert("Resources".into(), Json::Object(resources));

    Ok(Document(Json::Object(root)))
}

struct Renderer<'a> {
    template: &'a Template,
}

impl Renderer<'_> {
    fn parameter(&self, parameter: &Parameter) -> Result<Json, DomainError> {
        let path = format!("Parameters.{}", parameter.name());

        let mut out = Map::new();
        out.insert("Type".into(), Json::String(parameter.param_type().to_string()));
        if let Some(description) = parameter.description() {
            out.insert("Description".into(), Json::String(description.to_string()));
        }
        for (key, value) in parameter.constraints() {
            out.insert(key.clone(), self.value(value, &format!("{path}.{key}"))?);
        }

        Ok(Json::Object(out))
    }

    fn resource(&self, resource: &Resource) -> Result<Json, DomainError> {
        let path = format!("Resources.{}", resource.name());

        let mut out = Map::new();
        out.insert("Type".into(), Json::String(resource.resource_type().to_string()));

        if !resource.properties().is_empty() {
            out.insert(
                "Properties".into(),
                self.entries(resource.properties(), &format!("{path}.Properties"))?,
            );
        }

        if !resource.depends_on().is_empty() {
            let mut deps = Vec::with_capacity(resource.depends_on().len());
            for dep in resource.depends_on() {
                match self.template.kind_of(dep.as_str()) {
                    Some(EntityKind::Resource) => deps.push(Json::String(dep.to_string())),
                    Some(EntityKind::Parameter) => {
                        return Err(DomainError::InvalidValue {
                            path: format!("{path}.DependsOn"),
                            reason: format!("'{dep}' is a parameter, not a resource"),
                        });
                    }
                    None => {
                        return Err(DomainError::DanglingReference {
                            target: dep.to_string(),
                            referenced_from: format!("{path}.DependsOn"),
                        });
                    }
                }
            }
            out.insert("DependsOn".into(), Json::Array(deps));
        }

        Ok(Json::Object(out))
    }

    fn value(&self, value: &Value, path: &str) -> Result<Json, DomainError> {
        match value {
            Value::String(s) => Ok(Json::String(s.clone())),
            Value::Integer(n) => Ok(Json::Number((*n).into())),
            Value::Bool(b) => Ok(Json::Bool(*b)),
            Value::Float(f) => {
                Number::from_f64(*f)
                    .map(Json::Number)
                    .ok_or_else(|| DomainError::InvalidValue {
                        path: path.to_string(),
                        reason: format!("{f} cannot be represented in JSON"),
                    })
            }
            Value::Ref(reference) => Ok(json!({ "Ref": self.target(reference, path)? })),
            Value::Intrinsic(expr) => self.intrinsic(expr, path),
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.value(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Json::Array),
            Value::Map(entries) => self.entries(entries, path),
        }
    }

    fn intrinsic(&self, expr: &Intrinsic, path: &str) -> Result<Json, DomainError> {
        let inner_path = format!("{path}.{}", expr.function_name());
        match expr {
            Intrinsic::Join { separator, parts } => {
                let parts = parts
                    .iter()
                    .enumerate()
                    .map(|(i, part)| self.value(part, &format!("{inner_path}[{i}]")))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(json!({ "Fn::Join": [separator, parts] }))
            }
            Intrinsic::Base64(inner) => Ok(json!({ "Fn::Base64": self.value(inner, &inner_path)? })),
            Intrinsic::PseudoParam(param) => Ok(json!({ "Ref": param.as_str() })),
            Intrinsic::GetAtt { target, attribute } => {
                let target = self.target(target, &inner_path)?;
                if self.template.kind_of(target) == Some(EntityKind::Parameter) {
                    return Err(DomainError::InvalidValue {
                        path: inner_path,
                        reason: format!("'{target}' is a parameter; attributes exist only on resources"),
                    });
                }
                Ok(json!({ "Fn::GetAtt": [target, attribute] }))
            }
        }
    }

    fn entries(&self, entries: &[(String, Value)], path: &str) -> Result<Json, DomainError> {
        let mut out = Map::new();
        for (key, value) in entries {
            if out.contains_key(key) {
                return Err(DomainError::InvalidValue {
                    path: path.to_string(),
                    reason: format!("duplicate key '{key}'"),
                });
            }
            let rendered = self.value(value, &format!("{path}.{key}"))?;
            out.insert(key.clone(), rendered);
        }
        Ok(Json::Object(out))
    }

    fn target<'r>(&self, reference: &'r Reference, path: &str) -> Result<&'r str, DomainError> {
        let name = reference.target_name();
        if self.template.contains(name) {
            Ok(name)
        } else {
            Err(DomainError::DanglingReference {
                target: name.to_string(),
                referenced_from: path.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::value::{base64, join, pseudo};
    use crate::domain::value_objects::PseudoParam;
    use pretty_assertions::assert_eq;

    fn template_with_sg() -> Template {
        let mut t = Template::new();
        let vpc = t
            .add_parameter(
                Parameter::builder("VpcId", "AWS::EC2::VPC::Id")
                    .description("VPC ID")
                    .build()
                    .unwrap(),
            )
            .unwrap();
        t.add_resource(
            Resource::builder("Sg", "AWS::EC2::SecurityGroup")
                .property("GroupDescription", "web")
                .property("VpcId", &vpc)
                .build()
                .unwrap(),
        )
        .unwrap();
        t
    }

    #[test]
    fn renders_top_level_layout() {
        let doc = template_with_sg().render().unwrap();
        let keys: Vec<_> = doc.as_json().as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["AWSTemplateFormatVersion", "Parameters", "Resources"]);
    }

    #[test]
    fn description_is_emitted_after_version() {
        let mut t = template_with_sg();
        t.set_description("web tier");
        let doc = t.render().unwrap();
        let keys: Vec<_> = doc.as_json().as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            ["AWSTemplateFormatVersion", "Description", "Parameters", "Resources"]
        );
    }

    #[test]
    fn reference_renders_as_ref_wrapper() {
        let doc = template_with_sg().render().unwrap();
        let json = doc.as_json();

        assert_eq!(json["Resources"]["Sg"]["Properties"]["VpcId"], json!({"Ref": "VpcId"}));
        assert_eq!(json["Parameters"]["VpcId"]["Type"], "AWS::EC2::VPC::Id");
    }

    #[test]
    fn nested_intrinsics_render_recursively() {
        let mut t = Template::new();
        let x = t
            .add_parameter(Parameter::builder("X", "String").build().unwrap())
            .unwrap();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .property("A", join("", vec![Value::from("a-"), Value::from(&x)]))
                .property("B", base64(pseudo(PseudoParam::Region)))
                .build()
                .unwrap(),
        )
        .unwrap();

        let doc = t.render().unwrap();
        let props = &doc.as_json()["Resources"]["Res"]["Properties"];
        assert_eq!(props["A"], json!({"Fn::Join": ["", ["a-", {"Ref": "X"}]]}));
        assert_eq!(props["B"], json!({"Fn::Base64": {"Ref": "AWS::Region"}}));
    }

    #[test]
    fn dangling_reference_reports_path() {
        let mut t = Template::new();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .property("Tags", vec![Value::from(Reference::to("Ghost"))])
                .build()
                .unwrap(),
        )
        .unwrap();

        assert_eq!(
            t.render().unwrap_err(),
            DomainError::DanglingReference {
                target: "Ghost".into(),
                referenced_from: "Resources.Res.Properties.Tags[0]".into(),
            }
        );
    }

    #[test]
    fn get_att_target_is_checked() {
        let mut t = Template::new();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .property("Arn", Reference::to("Role").attr("Arn"))
                .build()
                .unwrap(),
        )
        .unwrap();

        assert!(matches!(
            t.render(),
            Err(DomainError::DanglingReference { ref target, .. }) if target == "Role"
        ));
    }

    #[test]
    fn get_att_on_parameter_is_invalid() {
        let mut t = Template::new();
        let size = t
            .add_parameter(Parameter::builder("Size", "Number").build().unwrap())
            .unwrap();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .property("Arn", size.attr("Arn"))
                .build()
                .unwrap(),
        )
        .unwrap();

        assert_eq!(
            t.render().unwrap_err(),
            DomainError::InvalidValue {
                path: "Resources.Res.Properties.Arn.Fn::GetAtt".into(),
                reason: "'Size' is a parameter; attributes exist only on resources".into(),
            }
        );
    }

    #[test]
    fn get_att_on_resource_renders() {
        let mut t = Template::new();
        let role = t
            .add_resource(Resource::builder("Role", "AWS::IAM::Role").build().unwrap())
            .unwrap();
        t.add_resource(
            Resource::builder("Profile", "AWS::IAM::InstanceProfile")
                .property("RoleArn", role.attr("Arn"))
                .build()
                .unwrap(),
        )
        .unwrap();

        let doc = t.render().unwrap();
        assert_eq!(
            doc.as_json()["Resources"]["Profile"]["Properties"]["RoleArn"],
            json!({"Fn::GetAtt": ["Role", "Arn"]})
        );
    }

    #[test]
    fn rendered_text_is_valid_utf8_with_non_ascii_content() {
        let mut t = Template::new();
        t.set_description("caf\u{e9} \u{2713}");
        let text = t.render().unwrap().to_json_string(JsonStyle::Compact).unwrap();
        assert!(text.contains("caf\u{e9} \u{2713}"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn depends_on_must_name_a_resource() {
        let mut t = Template::new();
        t.add_parameter(Parameter::builder("Size", "Number").build().unwrap())
            .unwrap();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .depends_on("Size")
                .build()
                .unwrap(),
        )
        .unwrap();

        assert!(matches!(t.render(), Err(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn missing_dependency_is_dangling() {
        let mut t = Template::new();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .depends_on("Later")
                .build()
                .unwrap(),
        )
        .unwrap();

        assert!(matches!(
            t.render(),
            Err(DomainError::DanglingReference { .. })
        ));
    }

    #[test]
    fn non_finite_float_is_invalid() {
        let mut t = Template::new();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .property("Weight", f64::NAN)
                .build()
                .unwrap(),
        )
        .unwrap();

        assert!(matches!(t.render(), Err(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn duplicate_map_key_is_invalid() {
        let mut t = Template::new();
        t.add_resource(
            Resource::builder("Res", "AWS::SNS::Topic")
                .property("Doc", Value::map([("Effect", "Allow"), ("Effect", "Deny")]))
                .build()
                .unwrap(),
        )
        .unwrap();

        assert!(matches!(t.render(), Err(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn resource_without_properties_omits_the_key() {
        let mut t = Template::new();
        t.add_resource(Resource::builder("Cluster", "AWS::ECS::Cluster").build().unwrap())
            .unwrap();

        let doc = t.render().unwrap();
        assert_eq!(
            doc.as_json()["Resources"]["Cluster"],
            json!({"Type": "AWS::ECS::Cluster"})
        );
    }

    #[test]
    fn pretty_output_uses_requested_indent() {
        let mut t = Template::new();
        t.add_resource(Resource::builder("Cluster", "AWS::ECS::Cluster").build().unwrap())
            .unwrap();
        let text = t
            .render()
            .unwrap()
            .to_json_string(JsonStyle::Pretty { indent: 4 })
            .unwrap();

        assert!(text.starts_with("{\n    \"AWSTemplateFormatVersion\": \"2010-09-09\",\n"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn compact_output_is_single_line() {
        let doc = template_with_sg().render().unwrap();
        let text = doc.to_json_string(JsonStyle::Compact).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""VpcId":{"Ref":"VpcId"}"#));
    }
}
