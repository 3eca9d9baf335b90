//! End-to-end render pipeline: built-in catalog -> RenderService -> sinks.

use pretty_assertions::assert_eq;
use stratus_adapters::{FileSink, InMemoryCatalog, MemorySink};
use stratus_core::{
    application::{ApplicationError, RenderService, StackService},
    domain::JsonStyle,
    error::{ErrorCategory, StratusError},
};
use tempfile::TempDir;

fn catalog() -> Box<InMemoryCatalog> {
    Box::new(InMemoryCatalog::with_builtin().unwrap())
}

#[test]
fn renders_ecs_cluster_with_four_space_indent() {
    let sink = MemorySink::new();
    let service = RenderService::new(catalog(), Box::new(sink.clone()));

    let summary = service
        .render_stack("ecs-cluster", JsonStyle::default())
        .unwrap();

    let text = sink.last().unwrap();
    assert!(text.starts_with(
        "{\n    \"AWSTemplateFormatVersion\": \"2010-09-09\",\n    \"Parameters\": {\n        \"VpcId\": {"
    ));
    assert!(text.ends_with("}\n"));
    assert_eq!(summary.bytes, text.len());
    assert_eq!(summary.parameters, 6);
    assert_eq!(summary.resources, 13);
    assert_eq!(summary.destination, "memory");
}

#[test]
fn compact_output_is_a_single_line() {
    let sink = MemorySink::new();
    let service = RenderService::new(catalog(), Box::new(sink.clone()));

    service.render_stack("ecs-cluster", JsonStyle::Compact).unwrap();

    let text = sink.last().unwrap();
    assert_eq!(text.lines().count(), 1);
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["Resources"].as_object().unwrap().len(), 13);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let sink = MemorySink::new();
    let service = RenderService::new(catalog(), Box::new(sink.clone()));

    service.render_stack("ecs-cluster", JsonStyle::default()).unwrap();
    service.render_stack("ecs-cluster", JsonStyle::default()).unwrap();

    let docs = sink.documents();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0], docs[1]);
}

#[test]
fn unknown_stack_is_not_found() {
    let sink = MemorySink::new();
    let service = RenderService::new(catalog(), Box::new(sink.clone()));

    let err = service
        .render_stack("missing", JsonStyle::default())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(sink.documents().is_empty());
}

#[test]
fn file_sink_refuses_overwrite_then_replaces_with_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ecs.json");
    std::fs::write(&path, "keep").unwrap();

    let refusing = RenderService::new(catalog(), Box::new(FileSink::new(&path)));
    let err = refusing
        .render_stack("ecs-cluster", JsonStyle::Compact)
        .unwrap_err();
    assert!(matches!(
        err,
        StratusError::Application(ApplicationError::DestinationExists { .. })
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep");

    let forcing = RenderService::new(catalog(), Box::new(FileSink::new(&path).overwrite(true)));
    forcing.render_stack("ecs-cluster", JsonStyle::Compact).unwrap();
    assert!(std::fs::read_to_string(&path)
        .unwrap()
        .starts_with("{\"AWSTemplateFormatVersion\":\"2010-09-09\""));
}

#[test]
fn stack_service_lists_builtin_stacks() {
    let service = StackService::new(catalog());

    let stacks = service.list().unwrap();
    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].name, "ecs-cluster");
    assert_eq!(stacks[0].parameters, 6);
    assert_eq!(stacks[0].resources, 13);
    assert!(service.check("ecs-cluster").is_ok());
}
