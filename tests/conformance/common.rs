use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};
use trapi_validator::model::FixedModelProvider;
use trapi_validator::schema::FixedSchemaProvider;
use trapi_validator::{
    BiolinkModel, ConcreteVersion, GraphType, InMemoryModel, ResponseValidator, StaticCatalog, TrapiSchema,
    ValidationConfig, ValidationReporter, VersionResolver, validate_graph,
};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

static MODEL: LazyLock<Arc<InMemoryModel>> = LazyLock::new(|| {
    Arc::new(InMemoryModel::from_file(&fixture_path("biolink_model.yaml")).expect("fixture model loads"))
});

static SCHEMA: LazyLock<Arc<TrapiSchema>> = LazyLock::new(|| {
    Arc::new(TrapiSchema::from_file("1.5.0", &fixture_path("trapi_schema.yaml")).expect("fixture schema loads"))
});

pub fn model() -> Arc<InMemoryModel> {
    Arc::clone(&MODEL)
}

pub fn schema() -> Arc<TrapiSchema> {
    Arc::clone(&SCHEMA)
}

pub const TRAPI_RELEASES: &[&str] = &[
    "1.3.0", "1.3.1", "1.3.2", "1.4.0-beta", "1.4.0", "1.4.2", "1.5.0-beta", "1.5.0", "1.6.0-beta",
];

pub const BIOLINK_RELEASES: &[&str] = &["3.6.0", "4.1.6", "4.2.0", "4.2.1-rc.1"];

pub fn trapi_catalog() -> StaticCatalog {
    StaticCatalog::new("TRAPI", TRAPI_RELEASES.iter().copied(), ["master"])
}

pub fn biolink_catalog() -> StaticCatalog {
    StaticCatalog::new("Biolink", BIOLINK_RELEASES.iter().copied(), ["master"])
}

pub fn resolver() -> VersionResolver {
    VersionResolver::new(Arc::new(trapi_catalog()), Arc::new(biolink_catalog()))
}

pub fn validator() -> ResponseValidator {
    let model: Arc<dyn BiolinkModel> = model();
    ResponseValidator::new(
        resolver(),
        Arc::new(FixedSchemaProvider::new(schema())),
        Arc::new(FixedModelProvider::new(model)),
    )
}

pub fn trapi(version: &str) -> ConcreteVersion {
    ConcreteVersion::release(version).expect("valid version")
}

/// Semantic validation of a graph document at TRAPI 1.5.0.
pub fn check_graph(graph: &Value, graph_type: GraphType, config: &ValidationConfig) -> ValidationReporter {
    check_graph_at(graph, graph_type, config, "1.5.0")
}

pub fn check_graph_at(graph: &Value, graph_type: GraphType, config: &ValidationConfig, version: &str) -> ValidationReporter {
    validate_graph(graph, graph_type, model().as_ref(), &trapi(version), config).expect("graph parses")
}

pub fn strict(flag: bool) -> ValidationConfig {
    ValidationConfig {
        strict_validation: Some(flag),
        ..ValidationConfig::default()
    }
}

/// Provenance and edge slots of a well-formed knowledge graph edge.
pub fn good_sources() -> Value {
    json!([
        { "resource_id": "infores:chembl", "resource_role": "primary_knowledge_source" },
        {
            "resource_id": "infores:molepro",
            "resource_role": "aggregator_knowledge_source",
            "upstream_resource_ids": ["infores:chembl"]
        }
    ])
}

pub fn good_attributes() -> Value {
    json!([
        { "attribute_type_id": "biolink:knowledge_level", "value": "knowledge_assertion" },
        { "attribute_type_id": "biolink:agent_type", "value": "manual_agent" }
    ])
}

pub fn good_edge() -> Value {
    json!({
        "subject": "CHEBI:45783",
        "predicate": "biolink:physically_interacts_with",
        "object": "NCBIGene:1017",
        "sources": good_sources(),
        "attributes": good_attributes()
    })
}

pub fn knowledge_graph() -> Value {
    json!({
        "nodes": {
            "NCBIGene:1017": { "name": "CDK2", "categories": ["biolink:Gene"] },
            "CHEBI:45783": { "name": "imatinib", "categories": ["biolink:ChemicalEntity"] }
        },
        "edges": { "e01": good_edge() }
    })
}

pub fn query_graph() -> Value {
    json!({
        "nodes": {
            "n0": { "ids": ["NCBIGene:1017"], "categories": ["biolink:Gene"] },
            "n1": { "categories": ["biolink:ChemicalEntity"] }
        },
        "edges": {
            "e0": { "subject": "n1", "object": "n0", "predicates": ["biolink:physically_interacts_with"] }
        }
    })
}

pub fn results() -> Value {
    json!([
        {
            "node_bindings": {
                "n0": [{ "id": "NCBIGene:1017" }],
                "n1": [{ "id": "CHEBI:45783" }]
            },
            "analyses": [
                { "resource_id": "infores:molepro", "edge_bindings": { "e0": [{ "id": "e01" }] } }
            ]
        }
    ])
}

/// A response that passes every check.
pub fn valid_response() -> Value {
    json!({
        "schema_version": "1.5.0",
        "biolink_version": "4.2.0",
        "status": "Success",
        "message": {
            "query_graph": query_graph(),
            "knowledge_graph": knowledge_graph(),
            "results": results()
        }
    })
}

/// Every code recorded, as `(code, identifiers)` lines, for assertion messages.
pub fn summary(reporter: &ValidationReporter) -> Vec<String> {
    reporter
        .get_messages()
        .values()
        .flat_map(|codes| codes.iter())
        .flat_map(|(code, scopes)| {
            scopes
                .iter()
                .map(move |(scope, ids)| format!("{code} [{scope}] {:?}", ids.keys().collect::<Vec<_>>()))
        })
        .collect()
}
