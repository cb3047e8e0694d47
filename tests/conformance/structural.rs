use super::common::{fixture_path, knowledge_graph, schema, trapi};
use serde_json::json;
use std::sync::Arc;
use trapi_validator::codes::CriticalCode;
use trapi_validator::primitives::MAX_REASON_LENGTH;
use trapi_validator::report::GLOBAL_SCOPE;
use trapi_validator::schema::{SchemaProvider, VersionedSchemaProvider};
use trapi_validator::versioning::{StaticCatalog, resolve};
use trapi_validator::{CodeRegistry, SchemaError, StructuralValidator, TrapiSchema, ValidationReporter};

#[test]
fn fixture_schema_has_components() {
    let schema = schema();
    assert_eq!(schema.version(), "1.5.0");
    for component in ["Response", "QueryGraph", "KnowledgeGraph", "Edge", "Result"] {
        assert!(schema.has_component(component), "{component}");
    }
}

#[test]
fn conforming_knowledge_graph_passes() {
    assert!(schema().validate("KnowledgeGraph", &knowledge_graph()).is_ok());
}

#[test]
fn violation_reports_path_and_reason() {
    let mut graph = knowledge_graph();
    graph["edges"]["e01"]["predicate"] = json!(42);
    let err = schema().validate("KnowledgeGraph", &graph).unwrap_err();
    assert_eq!(err.component, "KnowledgeGraph");
    assert_eq!(err.path, "/edges/e01/predicate");
    assert!(!err.reason.is_empty());
    assert!(err.reason.chars().count() <= MAX_REASON_LENGTH);
}

#[test]
fn missing_required_field_fails() {
    let edge = json!({ "subject": "a", "object": "b" });
    assert!(schema().validate("Edge", &edge).is_err());
}

#[test]
fn nullable_fields_accept_null() {
    let node = json!({ "name": null, "categories": null, "attributes": null });
    assert!(schema().validate("Node", &node).is_ok());
    let qnode = json!({ "set_interpretation": null });
    assert!(schema().validate("QNode", &qnode).is_ok());
    let qnode = json!({ "set_interpretation": "SOME" });
    assert!(schema().validate("QNode", &qnode).is_err());
}

#[test]
fn unknown_component_is_an_error() {
    let err = schema().validate("NoSuchThing", &json!({})).unwrap_err();
    assert!(err.reason.contains("NoSuchThing"), "{}", err.reason);
}

#[test]
fn check_component_reports_critical() {
    let validator = StructuralValidator::new(schema());
    let mut reporter = ValidationReporter::new(CodeRegistry::builtin());
    assert!(!validator.check_component(&json!({ "subject": "a" }), "Edge", &mut reporter));
    let ids = reporter.identifiers_of(CriticalCode::TrapiValidation, GLOBAL_SCOPE);
    assert_eq!(ids, vec!["Edge"]);
    let stored = reporter.scopes_of(CriticalCode::TrapiValidation).unwrap()[GLOBAL_SCOPE]["Edge"]
        .clone()
        .unwrap();
    assert_eq!(stored["version"], json!("1.5.0"));
    assert!(stored.contains_key("path"));
    assert!(stored.contains_key("reason"));
}

#[test]
fn schema_loads_from_json_text() {
    let text = r#"{ "components": { "schemas": { "Thing": { "type": "object", "required": ["id"] } } } }"#;
    let schema = TrapiSchema::from_text("1.0.0", text).unwrap();
    assert!(schema.validate("Thing", &json!({ "id": 1 })).is_ok());
    assert!(schema.validate("Thing", &json!({})).is_err());
}

#[test]
fn document_without_components_is_rejected() {
    let err = TrapiSchema::from_text("1.0.0", "openapi: 3.0.1\n").unwrap_err();
    assert!(matches!(err, SchemaError::InvalidDocument(_)), "{err}");
}

#[test]
fn local_override_schema_is_loaded_from_disk() {
    let catalog = StaticCatalog::new("TRAPI", ["1.5.0"], Vec::<String>::new());
    // Local override documents are versioned by the suffix of their file name.
    let versioned = std::env::temp_dir().join("trapi_validator_schema_1.5.0.yaml");
    std::fs::copy(fixture_path("trapi_schema.yaml"), &versioned).unwrap();
    let version = resolve(&catalog, Some(versioned.to_str().unwrap())).unwrap();

    let schema = VersionedSchemaProvider::new().schema(&version).unwrap();
    assert_eq!(schema.version(), "1.5.0");
    assert!(schema.has_component("KnowledgeGraph"));
}

#[test]
fn versioned_provider_serves_registered_releases() {
    let provider = VersionedSchemaProvider::new().with_schema(Arc::clone(&schema()));
    assert!(provider.schema(&trapi("1.5.0")).is_ok());
    assert!(matches!(
        provider.schema(&trapi("1.4.2")),
        Err(SchemaError::Unavailable(ref v)) if v == "1.4.2"
    ));
}
