//! Validation of TRAPI responses against the TRAPI schema and the Biolink Model.
//!
//! A response is checked structurally (each component against the TRAPI
//! OpenAPI schema of the resolved version) and semantically (every node,
//! edge, attribute, qualifier and provenance record against the Biolink
//! Model). Findings are collected as catalog codes in a
//! [`ValidationReporter`], partitioned by severity:
//!
//! ```text
//! config ─► VersionResolver ─► (TRAPI schema, Biolink model)
//!                                      │
//! response ─► ResponseValidator ─► StructuralValidator ─► SemanticValidator
//!                                      │
//!                              ValidationReporter ─► { severity → code → scope → identifier → params }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trapi_validator::codes::ErrorCode;
//! use trapi_validator::{ConcreteVersion, GraphType, InMemoryModel, ValidationConfig, validate_graph};
//!
//! let model = InMemoryModel::from_yaml(
//!     r#"
//! version: 4.2.0
//! elements:
//!   - name: biolink:Gene
//!     kind: category
//!     id_prefixes: [NCBIGene]
//! "#,
//! )
//! .expect("valid model");
//!
//! let graph = json!({
//!     "nodes": { "NCBIGene:1017": { "name": "CDK2" } },
//!     "edges": {}
//! });
//! let trapi = ConcreteVersion::release("1.5.0").expect("valid version");
//!
//! let reporter = validate_graph(&graph, GraphType::KnowledgeGraph, &model, &trapi, &ValidationConfig::default())
//!     .expect("graph parses");
//! assert!(reporter.has_code(ErrorCode::KnowledgeGraphNodeCategoryMissing));
//! println!("{reporter}");
//! ```

pub mod aliases;
pub mod codes;
pub mod config;
pub mod enums;
pub mod error;
pub mod model;
pub mod parse;
pub mod primitives;
pub mod provenance;
pub mod registry;
pub mod report;
pub mod schema;
pub mod types;
pub mod validate;
pub mod validator;
pub mod versioning;

pub use codes::Code;
pub use config::{TargetProvenance, ValidationConfig};
pub use enums::{ElementKind, GraphType, Severity};
pub use error::*;
pub use model::{BiolinkModel, InMemoryModel, ModelProvider};
pub use registry::CodeRegistry;
pub use report::{DumpOptions, ValidationReporter};
pub use schema::{SchemaProvider, StructuralValidator, TrapiSchema};
pub use types::*;
pub use validate::SemanticValidator;
pub use validator::{ResponseValidator, ValidationOutcome};
pub use versioning::{ConcreteVersion, SemVer, StaticCatalog, VersionResolver};

/// Semantic validation of a single graph document, outside a response.
///
/// `graph` is read as a query graph, knowledge graph or input edge per
/// `graph_type` and checked against `model`. Findings use the built-in code
/// catalog.
///
/// # Errors
///
/// Returns the [`ParseError`] if `graph` does not have the shape of its type.
pub fn validate_graph(
    graph: &serde_json::Value,
    graph_type: GraphType,
    model: &dyn BiolinkModel,
    trapi_version: &ConcreteVersion,
    config: &ValidationConfig,
) -> Result<ValidationReporter, ParseError> {
    let mut reporter = ValidationReporter::new(CodeRegistry::builtin());
    let mut semantic = SemanticValidator::new(model, trapi_version, config, &mut reporter);
    match graph_type {
        GraphType::QueryGraph => semantic.validate_query_graph(&parse::parse_query_graph(graph)?),
        GraphType::KnowledgeGraph => semantic.validate_knowledge_graph(&parse::parse_knowledge_graph(graph)?),
        GraphType::InputEdge => semantic.validate_input_edge(&parse::parse_input_edge(graph)?),
    }
    Ok(reporter)
}
