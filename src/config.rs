//! Per-call validation configuration.

use crate::enums::GraphType;
use crate::error::{ParseError, ParseErrorKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_NODES: usize = 1000;
pub const DEFAULT_MAX_EDGES: usize = 100;
pub const DEFAULT_KP_SOURCE_TYPE: &str = "aggregator";

/// Options of one validation call.
///
/// ```yaml
/// structural_version: "1.5"
/// semantic_version: "4.2.0"
/// strict_validation: true
/// suppress_empty_data_warnings: false
/// target_provenance:
///   ara_source: infores:aragorn
///   kp_source: infores:molepro
///   kp_source_type: primary
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Requested TRAPI version; `None` uses the response's own, else the latest.
    pub structural_version: Option<String>,
    /// Requested Biolink Model version; `None` uses the response's own, else the latest.
    pub semantic_version: Option<String>,
    pub target_provenance: Option<TargetProvenance>,
    /// Overrides the per-graph default strictness when set.
    pub strict_validation: Option<bool>,
    /// Knowledge/query graph nodes inspected by per-node rules.
    pub max_nodes: usize,
    /// Knowledge/query graph edges inspected by per-edge rules.
    pub max_edges: usize,
    /// Results inspected for binding consistency; `None` inspects all.
    pub max_results: Option<usize>,
    /// Scope knowledge graph edge findings by the edge's source trail.
    pub scope_by_provenance: bool,
    /// Check only the sampled part of the knowledge graph against the schema.
    pub sample_response: bool,
    /// Do not report empty or missing response, message, graphs and results.
    pub suppress_empty_data_warnings: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            structural_version: None,
            semantic_version: None,
            target_provenance: None,
            strict_validation: None,
            max_nodes: DEFAULT_MAX_NODES,
            max_edges: DEFAULT_MAX_EDGES,
            max_results: None,
            scope_by_provenance: false,
            sample_response: true,
            suppress_empty_data_warnings: false,
        }
    }
}

impl ValidationConfig {
    pub fn from_yaml(input: &str) -> Result<Self, ParseError> {
        serde_saphyr::from_str(input).map_err(|e| ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: e.to_string(),
            path: Some("config".to_string()),
        })
    }

    pub fn from_json(input: &str) -> Result<Self, ParseError> {
        serde_json::from_str(input).map_err(|e| ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: e.to_string(),
            path: Some("config".to_string()),
        })
    }

    /// Whether abstract and mixin terms are errors in `graph`.
    pub fn is_strict(&self, graph: GraphType) -> bool {
        self.strict_validation.unwrap_or_else(|| graph.default_strictness())
    }
}

/// Expected provenance of knowledge graph edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetProvenance {
    pub ara_source: Option<String>,
    pub kp_source: Option<String>,
    /// `primary`, `aggregator` or `supporting`; defaults to `aggregator`.
    pub kp_source_type: Option<String>,
}

impl TargetProvenance {
    pub fn ara_infores(&self) -> Option<String> {
        self.ara_source.as_deref().map(infores)
    }

    pub fn kp_infores(&self) -> Option<String> {
        self.kp_source.as_deref().map(infores)
    }

    pub fn kp_source_type(&self) -> &str {
        self.kp_source_type.as_deref().unwrap_or(DEFAULT_KP_SOURCE_TYPE)
    }

    /// Retrieval source role expected for the KP, e.g. `primary_knowledge_source`.
    pub fn kp_resource_role(&self) -> String {
        format!("{}_knowledge_source", self.kp_source_type())
    }
}

fn infores(id: &str) -> String {
    if id.starts_with("infores:") {
        id.to_string()
    } else {
        format!("infores:{id}")
    }
}
