//! Integration tests for stratus-core.
//!
//! These exercise the public API only, the way an adapter or the CLI uses it.

use pretty_assertions::assert_eq;
use serde_json::json;
use stratus_core::{
    domain::{DomainError, EntityKind},
    prelude::*,
};

fn string_param(name: &str) -> Parameter {
    Parameter::builder(name, "String").build().unwrap()
}

#[test]
fn test_security_group_bound_to_vpc_parameter() {
    let mut template = Template::new();
    let vpc = template
        .add_parameter(
            Parameter::builder("VpcId", "AWS::EC2::VPC::Id")
                .description("VPC to deploy into")
                .build()
                .unwrap(),
        )
        .unwrap();
    template
        .add_resource(
            Resource::builder("Sg", "AWS::EC2::SecurityGroup")
                .property("GroupDescription", "web")
                .property("VpcId", &vpc)
                .build()
                .unwrap(),
        )
        .unwrap();

    let doc = template.render().unwrap();
    assert_eq!(
        doc.into_json(),
        json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Parameters": {
                "VpcId": {"Type": "AWS::EC2::VPC::Id", "Description": "VPC to deploy into"}
            },
            "Resources": {
                "Sg": {
                    "Type": "AWS::EC2::SecurityGroup",
                    "Properties": {"GroupDescription": "web", "VpcId": {"Ref": "VpcId"}}
                }
            }
        })
    );
}

#[test]
fn test_user_data_is_base64_of_joined_lines() {
    let mut template = Template::new();
    let cluster = template
        .add_resource(Resource::builder("Cluster", "AWS::ECS::Cluster").build().unwrap())
        .unwrap();
    template
        .add_resource(
            Resource::builder("Lc", "AWS::AutoScaling::LaunchConfiguration")
                .property(
                    "UserData",
                    base64(join(
                        "",
                        vec![
                            Value::from("#!/bin/bash\n"),
                            Value::from("echo ECS_CLUSTER="),
                            Value::from(&cluster),
                            Value::from(" >> /etc/ecs/ecs.config\n"),
                        ],
                    )),
                )
                .build()
                .unwrap(),
        )
        .unwrap();

    let json = template.render().unwrap().into_json();
    assert_eq!(
        json["Resources"]["Lc"]["Properties"]["UserData"],
        json!({"Fn::Base64": {"Fn::Join": ["", [
            "#!/bin/bash\n",
            "echo ECS_CLUSTER=",
            {"Ref": "Cluster"},
            " >> /etc/ecs/ecs.config\n"
        ]]}})
    );
}

#[test]
fn test_pseudo_parameter_inside_join() {
    let mut template = Template::new();
    template
        .add_resource(
            Resource::builder("Logs", "AWS::Logs::LogGroup")
                .property(
                    "LogGroupName",
                    join("-", vec![pseudo(PseudoParam::StackName), Value::from("ecs")]),
                )
                .build()
                .unwrap(),
        )
        .unwrap();

    let json = template.render().unwrap().into_json();
    assert_eq!(
        json["Resources"]["Logs"]["Properties"]["LogGroupName"],
        json!({"Fn::Join": ["-", [{"Ref": "AWS::StackName"}, "ecs"]]})
    );
}

#[test]
fn test_forward_reference_resolves_once_target_is_registered() {
    let mut template = Template::new();
    template
        .add_resource(
            Resource::builder("A", "AWS::SNS::Topic")
                .property("Peer", Reference::to("B"))
                .build()
                .unwrap(),
        )
        .unwrap();

    let err = template.render().unwrap_err();
    assert!(matches!(err, DomainError::DanglingReference { ref target, .. } if target == "B"));

    template.add_resource(Resource::builder("B", "AWS::SNS::Topic").build().unwrap()).unwrap();
    assert!(template.render().is_ok());
}

#[test]
fn test_parameters_and_resources_share_one_namespace() {
    let mut template = Template::new();
    template.add_parameter(string_param("Name")).unwrap();

    let err = template
        .add_resource(Resource::builder("Name", "AWS::SNS::Topic").build().unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::DuplicateName {
            name: "Name".into(),
            existing: EntityKind::Parameter,
        }
    );
    assert_eq!(template.len(), 1);
}

#[test]
fn test_pretty_and_compact_describe_the_same_document() {
    let mut template = Template::new();
    template.set_description("demo");
    template.add_parameter(string_param("Env")).unwrap();

    let doc = template.render().unwrap();
    let pretty = doc.to_json_string(JsonStyle::default()).unwrap();
    let compact = doc.to_json_string(JsonStyle::Compact).unwrap();

    assert!(pretty.contains("\n    \"AWSTemplateFormatVersion\""));
    assert!(!compact.trim_end().contains('\n'));
    assert!(pretty.ends_with('\n') && compact.ends_with('\n'));

    let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_render_is_repeatable() {
    let mut template = Template::new();
    let env = template.add_parameter(string_param("Env")).unwrap();
    template
        .add_resource(
            Resource::builder("Topic", "AWS::SNS::Topic")
                .property("DisplayName", &env)
                .build()
                .unwrap(),
        )
        .unwrap();

    let first = template.render().unwrap().to_json_string(JsonStyle::Compact).unwrap();
    let second = template.render().unwrap().to_json_string(JsonStyle::Compact).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_format_version_leads_the_document() {
    let mut template = Template::new();
    template.set_version("2099-01-01");
    template.set_description("custom version");
    template
        .add_resource(Resource::builder("Cluster", "AWS::ECS::Cluster").build().unwrap())
        .unwrap();

    assert_eq!(template.version(), "2099-01-01");

    let doc = template.render().unwrap();
    let root = doc.as_json().as_object().unwrap();
    assert_eq!(root.keys().next().map(String::as_str), Some("AWSTemplateFormatVersion"));
    assert_eq!(root["AWSTemplateFormatVersion"], "2099-01-01");

    let text = doc.to_json_string(JsonStyle::Pretty { indent: 4 }).unwrap();
    assert!(text.starts_with("{\n    \"AWSTemplateFormatVersion\": \"2099-01-01\",\n"));
}

#[test]
fn test_version_constant_is_set() {
    assert!(!stratus_core::VERSION.is_empty());
}
