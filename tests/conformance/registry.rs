use serde_json::json;
use trapi_validator::codes::{Code, ErrorCode, WarningCode};
use trapi_validator::registry::code_label;
use trapi_validator::report::params;
use trapi_validator::{CodeRegistry, RegistryError, Severity};

// ─── Built-in catalog ───────────────────────────────────────────────────────

#[test]
fn every_code_variant_is_in_the_builtin_catalog() {
    let registry = CodeRegistry::builtin();
    for code in Code::all() {
        let entry = registry
            .lookup(code.path())
            .unwrap_or_else(|e| panic!("{code}: {e}"));
        assert_eq!(entry.severity, code.severity(), "{code}");
    }
    assert_eq!(Code::all().count(), registry.len());
}

#[test]
fn every_code_path_starts_with_its_severity() {
    for code in Code::all() {
        let tier = code.path().split('.').next().unwrap();
        assert_eq!(Severity::from_code_prefix(tier), Some(code.severity()), "{code}");
    }
}

#[test]
fn builtin_is_shared() {
    let a = CodeRegistry::builtin();
    let b = CodeRegistry::builtin();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn render_substitutes_identifier_and_parameters() {
    let registry = CodeRegistry::builtin();
    let p = params([("edge_id", json!("e01"))]);
    let message = registry
        .render(
            ErrorCode::KnowledgeGraphEdgePredicateUnknown.as_str(),
            Some("biolink:foo"),
            Some(&p),
        )
        .unwrap();
    assert!(message.contains("biolink:foo"), "{message}");
    assert!(message.contains("e01"), "{message}");
    assert!(!message.contains('{'), "{message}");
}

#[test]
fn render_lists_array_parameters() {
    let registry = CodeRegistry::builtin();
    let p = params([("sources", json!(["infores:a", "infores:b"]))]);
    let message = registry
        .render(
            WarningCode::KnowledgeGraphEdgeProvenanceMultiplePrimary.as_str(),
            Some("e01"),
            Some(&p),
        )
        .unwrap();
    assert!(message.contains("[infores:a, infores:b]"), "{message}");
}

#[test]
fn lookup_of_unknown_code_fails() {
    let registry = CodeRegistry::builtin();
    assert!(matches!(
        registry.lookup("error.no.such.code"),
        Err(RegistryError::UnknownCode(_))
    ));
    assert!(!registry.contains("error.no.such.code"));
}

#[test]
fn codes_of_severity_are_sorted_and_scoped() {
    let registry = CodeRegistry::builtin();
    let warnings = registry.all_codes_of_severity(Severity::Warning);
    assert!(!warnings.is_empty());
    assert!(warnings.iter().all(|c| c.starts_with("warning.")));
    assert!(warnings.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(registry.all_codes_of_severity(Severity::Information).len(), 15);
}

#[test]
fn code_labels() {
    assert_eq!(code_label("error.knowledge_graph.nodes.empty"), "ERROR - Knowledge Graph Nodes");
    assert_eq!(code_label("info.compliant"), "INFO - Compliant");
    assert_eq!(
        code_label("warning.knowledge_graph.edge.provenance.multiple_primary"),
        "WARNING - Knowledge Graph Edge Provenance"
    );
}

#[test]
fn display_prefixes_label() {
    let registry = CodeRegistry::builtin();
    let line = registry.display("error.knowledge_graph.nodes.empty", None, None).unwrap();
    assert_eq!(line, "ERROR - Knowledge Graph Nodes: No nodes found in the knowledge graph");
}

#[test]
fn description_is_available() {
    let registry = CodeRegistry::builtin();
    assert!(registry.description("critical.trapi.validation").unwrap().is_some());
}

// ─── Fixture catalogs ───────────────────────────────────────────────────────

#[test]
fn fixture_catalog_loads() {
    let registry = CodeRegistry::from_yaml(
        r#"
warning:
  sample:
    thing:
      $message: "Thing {identifier} in {place}"
      $parameters: [identifier, place]
info:
  done:
    $message: "Done"
"#,
    )
    .unwrap();
    assert_eq!(registry.len(), 2);
    let entry = registry.lookup("warning.sample.thing").unwrap();
    assert!(entry.takes_identifier());
    assert_eq!(entry.extra_parameters().collect::<Vec<_>>(), vec!["place"]);
}

#[test]
fn catalog_rejects_identifier_not_first() {
    let err = CodeRegistry::from_yaml(
        r#"
error:
  bad:
    $message: "{place} {identifier}"
    $parameters: [place, identifier]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::IdentifierNotFirst(_)), "{err}");
}

#[test]
fn catalog_rejects_undeclared_placeholder() {
    let err = CodeRegistry::from_yaml(
        r#"
error:
  bad:
    $message: "Missing {identifier} in {place}"
    $parameters: [identifier]
"#,
    )
    .unwrap_err();
    assert!(
        matches!(err, RegistryError::UndeclaredParameter { ref parameter, .. } if parameter == "place"),
        "{err}"
    );
}

#[test]
fn catalog_rejects_missing_message() {
    let err = CodeRegistry::from_yaml(
        r#"
error:
  bad:
    $parameters: [identifier]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::MissingMessage(_)), "{err}");
}

#[test]
fn catalog_rejects_unknown_severity() {
    let err = CodeRegistry::from_yaml(
        r#"
fatal:
  bad:
    $message: "Oops"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::UnknownSeverity(_)), "{err}");
}

#[test]
fn catalog_rejects_mixed_nodes() {
    let err = CodeRegistry::from_yaml(
        r#"
error:
  bad:
    $message: "Leaf"
    child:
      $message: "Child"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::MixedNode(_)), "{err}");
}
