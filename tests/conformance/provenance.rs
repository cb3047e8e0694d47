use super::common::{check_graph, check_graph_at, good_sources, knowledge_graph, summary};
use serde_json::{Value, json};
use trapi_validator::codes::{ErrorCode, WarningCode};
use trapi_validator::provenance::{normalize_role, source_trail};
use trapi_validator::report::GLOBAL_SCOPE;
use trapi_validator::{GraphType, RetrievalSource, TargetProvenance, ValidationConfig, ValidationReporter};

fn with_sources(sources: Value) -> Value {
    let mut graph = knowledge_graph();
    graph["edges"]["e01"]["sources"] = sources;
    graph
}

fn check(sources: Value) -> ValidationReporter {
    check_graph(&with_sources(sources), GraphType::KnowledgeGraph, &ValidationConfig::default())
}

fn with_target(target: TargetProvenance) -> ValidationConfig {
    ValidationConfig {
        target_provenance: Some(target),
        ..ValidationConfig::default()
    }
}

fn retrieval_sources(value: Value) -> Vec<RetrievalSource> {
    serde_json::from_value(value).unwrap()
}

fn edge_params(reporter: &ValidationReporter, code: impl Into<trapi_validator::Code>, id: &str) -> Value {
    json!(reporter.scopes_of(code).unwrap()[GLOBAL_SCOPE][id])
}

// ─── Retrieval sources ──────────────────────────────────────────────────────

#[test]
fn sources_missing_or_empty() {
    let mut graph = knowledge_graph();
    graph["edges"]["e01"].as_object_mut().unwrap().remove("sources");
    let r = check_graph(&graph, GraphType::KnowledgeGraph, &ValidationConfig::default());
    assert_eq!(r.identifiers_of(ErrorCode::KnowledgeGraphEdgeSourcesMissing, GLOBAL_SCOPE), vec!["e01"]);

    let r = check(json!([]));
    assert_eq!(r.identifiers_of(ErrorCode::KnowledgeGraphEdgeSourcesEmpty, GLOBAL_SCOPE), vec!["e01"]);
    assert!(!r.has_code(ErrorCode::KnowledgeGraphEdgeProvenanceMissingPrimary));
}

#[test]
fn source_without_resource_id() {
    let mut sources = good_sources();
    sources.as_array_mut().unwrap().push(json!({ "resource_id": " ", "resource_role": "supporting_data_source" }));
    let r = check(sources);
    assert_eq!(
        r.identifiers_of(ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdEmpty, GLOBAL_SCOPE),
        vec!["e01"]
    );
}

#[test]
fn source_without_role() {
    let r = check(json!([
        { "resource_id": "infores:chembl", "resource_role": "primary_knowledge_source" },
        { "resource_id": "infores:molepro", "resource_role": "" }
    ]));
    assert_eq!(
        edge_params(&r, ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceRoleEmpty, "infores:molepro"),
        json!({ "edge_id": "e01" })
    );
}

#[test]
fn infores_identifiers_are_checked() {
    let r = check(json!([
        { "resource_id": "chembl", "resource_role": "primary_knowledge_source" },
        { "resource_id": "MOLEPRO:1", "resource_role": "aggregator_knowledge_source" },
        {
            "resource_id": "infores:nobody",
            "resource_role": "aggregator_knowledge_source",
            "upstream_resource_ids": ["molepro", "RTX:arax", "infores:ghost"]
        }
    ]));
    for (code, id) in [
        (ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesNotCurie, "chembl"),
        (ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesInvalid, "MOLEPRO:1"),
        (ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesUnknown, "infores:nobody"),
        (ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesNotCurie, "molepro"),
        (ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesInvalid, "RTX:arax"),
        (ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesUnknown, "infores:ghost"),
    ] {
        assert_eq!(edge_params(&r, code, id), json!({ "edge_id": "e01" }), "{code:?}");
    }
}

#[test]
fn edge_needs_a_primary_source() {
    let r = check(json!([
        { "resource_id": "infores:molepro", "resource_role": "aggregator_knowledge_source" }
    ]));
    assert_eq!(
        r.identifiers_of(ErrorCode::KnowledgeGraphEdgeProvenanceMissingPrimary, GLOBAL_SCOPE),
        vec!["e01"]
    );
}

#[test]
fn several_primary_sources_warn() {
    let r = check(json!([
        { "resource_id": "infores:chembl", "resource_role": "primary_knowledge_source" },
        { "resource_id": "infores:molepro", "resource_role": "biolink:primary_knowledge_source" }
    ]));
    assert_eq!(
        edge_params(&r, WarningCode::KnowledgeGraphEdgeProvenanceMultiplePrimary, "e01"),
        json!({ "sources": ["infores:chembl", "infores:molepro"] })
    );
    assert!(r.is_compliant(), "{:?}", summary(&r));
}

#[test]
fn roles_may_carry_the_biolink_namespace() {
    assert_eq!(normalize_role(" biolink:primary_knowledge_source "), "primary_knowledge_source");
    assert_eq!(normalize_role("aggregator_knowledge_source"), "aggregator_knowledge_source");
}

// ─── Target provenance ──────────────────────────────────────────────────────

#[test]
fn expected_ara_must_be_among_sources() {
    let config = with_target(TargetProvenance {
        ara_source: Some("aragorn".to_string()),
        ..TargetProvenance::default()
    });
    let r = check_graph(&knowledge_graph(), GraphType::KnowledgeGraph, &config);
    assert_eq!(
        edge_params(&r, WarningCode::KnowledgeGraphEdgeProvenanceAraMissing, "infores:aragorn"),
        json!({ "edge_id": "e01" })
    );

    let mut sources = good_sources();
    sources.as_array_mut().unwrap().push(json!({
        "resource_id": "infores:aragorn",
        "resource_role": "aggregator_knowledge_source",
        "upstream_resource_ids": ["infores:molepro"]
    }));
    let r = check_graph(&with_sources(sources), GraphType::KnowledgeGraph, &config);
    assert!(!r.has_code(WarningCode::KnowledgeGraphEdgeProvenanceAraMissing));
}

#[test]
fn expected_kp_must_have_its_role() {
    let aggregator = with_target(TargetProvenance {
        kp_source: Some("infores:molepro".to_string()),
        ..TargetProvenance::default()
    });
    let r = check_graph(&knowledge_graph(), GraphType::KnowledgeGraph, &aggregator);
    assert!(r.is_empty(), "{:?}", summary(&r));

    let primary = with_target(TargetProvenance {
        kp_source: Some("molepro".to_string()),
        kp_source_type: Some("primary".to_string()),
        ..TargetProvenance::default()
    });
    let r = check_graph(&knowledge_graph(), GraphType::KnowledgeGraph, &primary);
    assert_eq!(
        edge_params(&r, WarningCode::KnowledgeGraphEdgeProvenanceKpMissing, "infores:molepro"),
        json!({ "kp_source_type": "primary", "edge_id": "e01" })
    );
}

#[test]
fn target_provenance_reads_from_yaml() {
    let config = ValidationConfig::from_yaml(
        "target_provenance:\n  ara_source: infores:aragorn\n  kp_source: molepro\n",
    )
    .unwrap();
    let target = config.target_provenance.unwrap();
    assert_eq!(target.ara_infores().as_deref(), Some("infores:aragorn"));
    assert_eq!(target.kp_infores().as_deref(), Some("infores:molepro"));
    assert_eq!(target.kp_resource_role(), "aggregator_knowledge_source");
}

// ─── Source trails ──────────────────────────────────────────────────────────

#[test]
fn trail_runs_from_primary_to_delivering_resource() {
    let sources = retrieval_sources(json!([
        {
            "resource_id": "infores:arax",
            "resource_role": "aggregator_knowledge_source",
            "upstream_resource_ids": ["infores:molepro"]
        },
        { "resource_id": "infores:chembl", "resource_role": "primary_knowledge_source" },
        {
            "resource_id": "infores:molepro",
            "resource_role": "aggregator_knowledge_source",
            "upstream_resource_ids": ["infores:chembl"]
        }
    ]));
    assert_eq!(
        source_trail(&sources).as_deref(),
        Some("infores:chembl -> infores:molepro -> infores:arax")
    );
}

#[test]
fn no_trail_without_a_primary_source() {
    let sources = retrieval_sources(json!([
        { "resource_id": "infores:molepro", "resource_role": "aggregator_knowledge_source" }
    ]));
    assert_eq!(source_trail(&sources), None);
}

#[test]
fn edge_findings_can_be_scoped_by_trail() {
    let mut graph = knowledge_graph();
    graph["edges"]["e01"]["predicate"] = json!("biolink:unheard_of");
    graph["nodes"]["CHEBI:45783"]["name"] = json!(null);
    let config = ValidationConfig {
        scope_by_provenance: true,
        ..ValidationConfig::default()
    };
    let r = check_graph(&graph, GraphType::KnowledgeGraph, &config);
    assert_eq!(
        r.identifiers_of(ErrorCode::KnowledgeGraphEdgePredicateUnknown, "infores:chembl -> infores:molepro"),
        vec!["biolink:unheard_of"]
    );
    assert_eq!(
        r.identifiers_of(WarningCode::KnowledgeGraphNodeNameMissing, GLOBAL_SCOPE),
        vec!["CHEBI:45783"]
    );
}

#[test]
fn pre_1_4_edges_ignore_sources() {
    let r = check_graph_at(&with_sources(json!([])), GraphType::KnowledgeGraph, &ValidationConfig::default(), "1.3.2");
    assert!(r.is_empty(), "{:?}", summary(&r));
}
