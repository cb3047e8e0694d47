//! Compliance Orchestrator: validates a whole TRAPI response envelope.
//!
//! ```text
//! response ─► empty? ─► message empty? ─► envelope schema + status
//!                                              │
//!            query graph ─► knowledge graph ─► results ─► declared versions
//!                                                              │
//!                                              info.compliant ◄┘ (no error or worse)
//! ```
//!
//! Only the two emptiness checks end a run early. A sub-document failing its
//! structural check has its semantic checks skipped; sibling checks still run.

use crate::aliases::{AliasResolver, matches_query_ids};
use crate::codes::{Code, CriticalCode, ErrorCode, InfoCode, SkippedCode, WarningCode};
use crate::config::ValidationConfig;
use crate::error::{ParseError, ValidatorError, VersionError};
use crate::model::{BiolinkModel, ModelProvider};
use crate::parse::{parse_document, parse_input_edge, parse_knowledge_graph, parse_query_graph, parse_result};
use crate::primitives::is_empty_value;
use crate::registry::CodeRegistry;
use crate::report::{Params, ValidationReporter, params};
use crate::schema::{SchemaProvider, StructuralValidator};
use crate::types::{KnowledgeGraph, QueryGraph};
use crate::validate::SemanticValidator;
use crate::versioning::{ConcreteVersion, VersionResolver};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Response statuses that raise no warning. An absent status is accepted too.
pub const KNOWN_STATUSES: &[&str] = &["OK", "Success", "QueryNotTraversable", "KPsNotAvailable"];

/// Workflow step fields dropped when empty before the envelope is checked.
const EMPTY_WORKFLOW_FIELDS: &[&str] = &["parameters", "runner_parameters"];

/// Report of one validation call, with the versions actually used.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub reporter: ValidationReporter,
    pub structural_version: ConcreteVersion,
    pub semantic_version: ConcreteVersion,
}

impl ValidationOutcome {
    /// The nested `severity → code → scope → identifier → parameters` mapping.
    pub fn messages(&self) -> Value {
        self.reporter.to_value()
    }

    pub fn is_compliant(&self) -> bool {
        self.reporter.is_compliant()
    }

    /// Messages plus the resolved versions.
    pub fn to_value(&self) -> Value {
        json!({
            "trapi_version": self.structural_version.to_string(),
            "biolink_version": self.semantic_version.to_string(),
            "messages": self.messages(),
        })
    }
}

#[derive(Clone, Copy)]
enum Standard {
    Structural,
    Semantic,
}

/// Validates TRAPI responses and test edges.
///
/// Holds only shared, read-only state: one instance can serve concurrent
/// calls, each of which builds its own reporter.
#[derive(Clone)]
pub struct ResponseValidator {
    registry: Arc<CodeRegistry>,
    resolver: VersionResolver,
    schemas: Arc<dyn SchemaProvider>,
    models: Arc<dyn ModelProvider>,
    aliases: Option<Arc<dyn AliasResolver>>,
}

impl ResponseValidator {
    pub fn new(resolver: VersionResolver, schemas: Arc<dyn SchemaProvider>, models: Arc<dyn ModelProvider>) -> Self {
        ResponseValidator {
            registry: CodeRegistry::builtin(),
            resolver,
            schemas,
            models,
            aliases: None,
        }
    }

    pub fn with_registry(mut self, registry: Arc<CodeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Accept result bindings whose identifiers are aliases of the queried ones.
    pub fn with_alias_resolver(mut self, aliases: Arc<dyn AliasResolver>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    pub fn registry(&self) -> &Arc<CodeRegistry> {
        &self.registry
    }

    // ─── Versions ───────────────────────────────────────────────────────

    fn resolve(&self, standard: Standard, input: Option<&str>) -> Result<ConcreteVersion, VersionError> {
        match standard {
            Standard::Structural => self.resolver.resolve_structural_version(input),
            Standard::Semantic => self.resolver.resolve_semantic_version(input),
        }
    }

    /// A version a response declares for itself. Never names a local file.
    fn resolve_declared(&self, standard: Standard, declared: &str) -> Option<ConcreteVersion> {
        self.resolve(standard, Some(declared))
            .ok()
            .filter(|v| v.local_path().is_none())
    }

    /// Explicit request first, then the response's own declaration, then the
    /// latest release. Only an explicit request that cannot be resolved fails.
    fn pick_version(
        &self,
        standard: Standard,
        explicit: Option<&str>,
        declared: Option<&str>,
    ) -> Result<ConcreteVersion, VersionError> {
        if let Some(explicit) = explicit.map(str::trim).filter(|e| !e.is_empty()) {
            return self.resolve(standard, Some(explicit));
        }
        if let Some(version) = declared.and_then(|d| self.resolve_declared(standard, d)) {
            return Ok(version);
        }
        if let Some(declared) = declared {
            tracing::warn!(declared, "declared version could not be resolved, using latest");
        }
        self.resolve(standard, None)
    }

    // ─── Responses ──────────────────────────────────────────────────────

    /// Parse `input` (JSON or YAML) and validate it as a response.
    pub fn validate_str(&self, input: &str, config: &ValidationConfig) -> Result<ValidationOutcome, ValidatorError> {
        let response = parse_document(input)?;
        self.validate(Some(&response), config)
    }

    /// Validate a full response envelope.
    ///
    /// Errors are returned only for hard failures: an explicitly requested
    /// version that does not resolve, or a schema or model that cannot be
    /// obtained. Everything found in the response is in the report.
    pub fn validate(
        &self,
        response: Option<&Value>,
        config: &ValidationConfig,
    ) -> Result<ValidationOutcome, ValidatorError> {
        let declared_schema = declared(response, "schema_version");
        let declared_biolink = declared(response, "biolink_version");
        let structural_version = self.pick_version(
            Standard::Structural,
            config.structural_version.as_deref(),
            declared_schema,
        )?;
        let semantic_version = self.pick_version(
            Standard::Semantic,
            config.semantic_version.as_deref(),
            declared_biolink,
        )?;
        tracing::info!(
            trapi = %structural_version,
            biolink = %semantic_version,
            "validating response"
        );

        let mut reporter = ValidationReporter::new(Arc::clone(&self.registry));

        let Some(response) = response.filter(|r| !is_empty_value(r)) else {
            report_empty(&mut reporter, config, ErrorCode::TrapiResponseEmpty);
            return Ok(ValidationOutcome {
                reporter,
                structural_version,
                semantic_version,
            });
        };
        let Some(message) = response.get("message").filter(|m| !is_empty_value(m)) else {
            report_empty(&mut reporter, config, ErrorCode::TrapiResponseMessageEmpty);
            return Ok(ValidationOutcome {
                reporter,
                structural_version,
                semantic_version,
            });
        };

        let schema = self.schemas.schema(&structural_version)?;
        let model = self.models.model(&semantic_version)?;
        let structural = StructuralValidator::new(schema);

        let mut run = ResponseRun {
            structural: &structural,
            model: model.as_ref(),
            trapi_version: &structural_version,
            config,
            aliases: self.aliases.as_deref(),
            reporter: &mut reporter,
        };

        if !message.is_object() {
            run.malformed("Message", "message must be an object");
        } else {
            run.check_envelope(response);
            let query_graph = run.check_query_graph(message.get("query_graph"));
            let knowledge_graph = run.check_knowledge_graph(message.get("knowledge_graph"));
            run.check_results(message.get("results"), query_graph.as_ref(), knowledge_graph.as_ref());
        }

        for (declared, standard, missing, unresolved) in [
            (
                declared_schema,
                Standard::Structural,
                WarningCode::TrapiResponseSchemaVersionMissing,
                WarningCode::TrapiResponseSchemaVersionUnresolved,
            ),
            (
                declared_biolink,
                Standard::Semantic,
                WarningCode::TrapiResponseBiolinkVersionMissing,
                WarningCode::TrapiResponseBiolinkVersionUnresolved,
            ),
        ] {
            match declared {
                None => reporter.report(missing, None, Params::new()),
                Some(version) if self.resolve_declared(standard, version).is_none() => {
                    reporter.report(unresolved, Some(version), Params::new());
                }
                Some(_) => {}
            }
        }

        if reporter.is_compliant() {
            reporter.report(InfoCode::Compliant, None, Params::new());
        }
        tracing::debug!(compliant = reporter.is_compliant(), "response validated");

        Ok(ValidationOutcome {
            reporter,
            structural_version,
            semantic_version,
        })
    }

    // ─── Input edges ────────────────────────────────────────────────────

    /// Validate a test edge: its categories, example identifiers and predicate.
    pub fn validate_input_edge(&self, edge: &Value, config: &ValidationConfig) -> Result<ValidationOutcome, ValidatorError> {
        let structural_version = self.resolve(Standard::Structural, config.structural_version.as_deref())?;
        let semantic_version = self.resolve(Standard::Semantic, config.semantic_version.as_deref())?;
        let model = self.models.model(&semantic_version)?;

        let mut reporter = ValidationReporter::new(Arc::clone(&self.registry));
        match parse_input_edge(edge) {
            Ok(edge) => {
                SemanticValidator::new(model.as_ref(), &structural_version, config, &mut reporter)
                    .validate_input_edge(&edge);
            }
            Err(e) => report_malformed(&mut reporter, "InputEdge", &e),
        }
        if reporter.is_compliant() {
            reporter.report(InfoCode::Compliant, None, Params::new());
        }

        Ok(ValidationOutcome {
            reporter,
            structural_version,
            semantic_version,
        })
    }
}

impl std::fmt::Debug for ResponseValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseValidator")
            .field("codes", &self.registry.len())
            .field("resolver", &self.resolver)
            .field("aliases", &self.aliases.is_some())
            .finish()
    }
}

fn declared<'r>(response: Option<&'r Value>, field: &str) -> Option<&'r str> {
    response?
        .get(field)?
        .as_str()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Findings about absent or empty data, unless the caller expects none.
fn report_empty(reporter: &mut ValidationReporter, config: &ValidationConfig, code: impl Into<Code>) {
    let code = code.into();
    if config.suppress_empty_data_warnings {
        tracing::debug!(%code, "empty data finding suppressed");
        return;
    }
    reporter.report(code, None, Params::new());
}

fn report_malformed(reporter: &mut ValidationReporter, component: &str, err: &ParseError) {
    reporter.report(
        CriticalCode::TrapiResponseMessageMalformed,
        Some(component),
        params([("reason", json!(err.message))]),
    );
}

/// State of one response validation.
struct ResponseRun<'a> {
    structural: &'a StructuralValidator,
    model: &'a dyn BiolinkModel,
    trapi_version: &'a ConcreteVersion,
    config: &'a ValidationConfig,
    aliases: Option<&'a dyn AliasResolver>,
    reporter: &'a mut ValidationReporter,
}

impl ResponseRun<'_> {
    fn semantic(&mut self) -> SemanticValidator<'_> {
        SemanticValidator::new(self.model, self.trapi_version, self.config, self.reporter)
    }

    fn empty_data(&mut self, code: impl Into<Code>) {
        report_empty(self.reporter, self.config, code);
    }

    fn malformed(&mut self, component: &str, reason: &str) {
        self.reporter.report(
            CriticalCode::TrapiResponseMessageMalformed,
            Some(component),
            params([("reason", json!(reason))]),
        );
    }

    /// Structural check of `instance`, reporting a skipped semantic test when
    /// it fails. Components the schema does not define are not checked.
    fn conforms(&mut self, instance: &Value, component: &str, label: &str) -> bool {
        if !self.structural.has_component(component) {
            tracing::debug!(component, "schema has no such component, structural check skipped");
            return true;
        }
        if self.structural.check_component(instance, component, self.reporter) {
            return true;
        }
        self.reporter.report(
            SkippedCode::Test,
            Some(label),
            params([("reason", json!(format!("{component} failed structural validation")))]),
        );
        false
    }

    fn check_envelope(&mut self, response: &Value) {
        let envelope = sanitize_envelope(response);
        self.conforms(&envelope, "Response", "Response envelope");

        if let Some(status) = response.get("status").and_then(Value::as_str)
            && !KNOWN_STATUSES.contains(&status)
        {
            self.reporter
                .report(WarningCode::TrapiResponseStatusUnknown, Some(status), Params::new());
        }
    }

    fn check_query_graph(&mut self, value: Option<&Value>) -> Option<QueryGraph> {
        let value = match value {
            None | Some(Value::Null) => {
                self.empty_data(ErrorCode::TrapiResponseMessageQueryGraphMissing);
                return None;
            }
            Some(v) if is_empty_graph(v) => {
                self.empty_data(ErrorCode::TrapiResponseMessageQueryGraphEmpty);
                return None;
            }
            Some(v) => v,
        };

        if !self.conforms(value, "QueryGraph", "Query Graph semantic validation") {
            return None;
        }
        match parse_query_graph(value) {
            Ok(graph) => {
                self.semantic().validate_query_graph(&graph);
                Some(graph)
            }
            Err(e) => {
                report_malformed(self.reporter, "QueryGraph", &e);
                None
            }
        }
    }

    fn check_knowledge_graph(&mut self, value: Option<&Value>) -> Option<KnowledgeGraph> {
        let value = match value {
            None | Some(Value::Null) => {
                self.empty_data(ErrorCode::TrapiResponseMessageKnowledgeGraphMissing);
                return None;
            }
            Some(v) if is_empty_graph(v) => {
                self.empty_data(WarningCode::TrapiResponseMessageKnowledgeGraphEmpty);
                return None;
            }
            Some(v) => v,
        };

        let conforms = if self.config.sample_response {
            let sample = sample_graph(value, self.config.max_nodes, self.config.max_edges);
            self.conforms(&sample, "KnowledgeGraph", "Knowledge Graph semantic validation")
        } else {
            self.conforms(value, "KnowledgeGraph", "Knowledge Graph semantic validation")
        };
        if !conforms {
            return None;
        }

        match parse_knowledge_graph(value) {
            Ok(graph) => {
                self.semantic().validate_knowledge_graph(&graph);
                Some(graph)
            }
            Err(e) => {
                report_malformed(self.reporter, "KnowledgeGraph", &e);
                None
            }
        }
    }

    fn check_results(
        &mut self,
        value: Option<&Value>,
        query_graph: Option<&QueryGraph>,
        knowledge_graph: Option<&KnowledgeGraph>,
    ) {
        let results = match value {
            None | Some(Value::Null) => {
                self.empty_data(ErrorCode::TrapiResponseMessageResultsMissing);
                return;
            }
            Some(Value::Array(results)) => results,
            Some(_) => {
                self.reporter
                    .report(ErrorCode::TrapiResponseMessageResultsNotArray, None, Params::new());
                return;
            }
        };
        if results.is_empty() {
            self.empty_data(WarningCode::TrapiResponseMessageResultsEmpty);
            return;
        }

        let limit = self.config.max_results.unwrap_or(results.len());
        if results.len() > limit {
            tracing::debug!(results = results.len(), limit, "sampling results");
        }
        for result in results.iter().take(limit) {
            self.check_result(result, query_graph, knowledge_graph);
        }
    }

    fn check_result(&mut self, value: &Value, query_graph: Option<&QueryGraph>, knowledge_graph: Option<&KnowledgeGraph>) {
        if !self.conforms(value, "Result", "Result binding validation") {
            return;
        }
        let result = match parse_result(value) {
            Ok(result) => result,
            Err(e) => {
                report_malformed(self.reporter, "Result", &e);
                return;
            }
        };

        for (qnode_key, bindings) in &result.node_bindings {
            let qnode = query_graph.and_then(|qg| qg.nodes.get(qnode_key));
            if query_graph.is_some() && qnode.is_none() {
                self.reporter.report(
                    ErrorCode::TrapiResponseMessageResultNodeBindingKeyMissing,
                    Some(qnode_key),
                    Params::new(),
                );
            }
            let query_ids = qnode
                .and_then(|n| n.ids.as_deref())
                .filter(|ids| !ids.is_empty());

            for binding in bindings {
                if let Some(kg) = knowledge_graph
                    && !kg.nodes.contains_key(&binding.id)
                {
                    self.reporter.report(
                        ErrorCode::TrapiResponseMessageResultNodeBindingIdMissing,
                        Some(&binding.id),
                        params([("node_binding", json!(qnode_key))]),
                    );
                }
                if let Some(query_ids) = query_ids {
                    let bound = binding.query_id.as_deref().unwrap_or(&binding.id);
                    if !matches_query_ids(bound, query_ids, self.aliases) {
                        self.reporter.report(
                            ErrorCode::TrapiResponseMessageResultMissingBindings,
                            Some(&binding.id),
                            params([("node_binding", json!(qnode_key)), ("query_ids", json!(query_ids))]),
                        );
                    }
                }
            }
        }

        for (qedge_key, bindings) in result.all_edge_bindings() {
            if let Some(qg) = query_graph
                && !qg.edges.contains_key(qedge_key)
            {
                self.reporter.report(
                    ErrorCode::TrapiResponseMessageResultEdgeBindingKeyMissing,
                    Some(qedge_key),
                    Params::new(),
                );
            }
            for binding in bindings {
                if let Some(kg) = knowledge_graph
                    && !kg.edges.contains_key(&binding.id)
                {
                    self.reporter.report(
                        ErrorCode::TrapiResponseMessageResultEdgeBindingIdMissing,
                        Some(&binding.id),
                        params([("edge_binding", json!(qedge_key))]),
                    );
                }
            }
        }
    }
}

/// `{}`, `null`, or a graph whose node and edge maps are both empty or absent.
fn is_empty_graph(graph: &Value) -> bool {
    if is_empty_value(graph) {
        return true;
    }
    let Some(map) = graph.as_object() else {
        return false;
    };
    ["nodes", "edges"]
        .iter()
        .all(|key| map.get(*key).is_none_or(is_empty_value))
}

/// The response with its message stubbed out and empty workflow parameters
/// removed, ready for the `Response` envelope check.
fn sanitize_envelope(response: &Value) -> Value {
    let mut envelope = response.clone();
    if let Some(map) = envelope.as_object_mut() {
        map.insert("message".to_string(), Value::Object(Map::new()));
        if let Some(Value::Array(steps)) = map.get_mut("workflow") {
            for step in steps.iter_mut().filter_map(Value::as_object_mut) {
                for field in EMPTY_WORKFLOW_FIELDS {
                    if step.get(*field).is_some_and(is_empty_value) {
                        step.remove(*field);
                    }
                }
            }
        }
    }
    envelope
}

/// A copy of a knowledge or query graph document holding only its first
/// `max_nodes` nodes and `max_edges` edges.
pub fn sample_graph(graph: &Value, max_nodes: usize, max_edges: usize) -> Value {
    let Some(map) = graph.as_object() else {
        return graph.clone();
    };
    let mut out = map.clone();
    for (key, limit) in [("nodes", max_nodes), ("edges", max_edges)] {
        if let Some(Value::Object(items)) = map.get(key) {
            let sampled: Map<String, Value> = items
                .iter()
                .take(limit)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            out.insert(key.to_string(), Value::Object(sampled));
        }
    }
    Value::Object(out)
}
