//! Semantic Rule Engine.
//!
//! Walks typed query graphs, knowledge graphs and input edges and checks every
//! node, edge, attribute and qualifier against the Biolink Model, reporting
//! findings into a [`ValidationReporter`].
//!
//! Model terms (categories, predicates, attribute types) go through one
//! classification protocol:
//!
//! 1. unknown to the model → error
//! 2. known, but not of the kind the slot requires → error
//! 3. deprecated → warning
//! 4. abstract or mixin → error when strict, information otherwise
//! 5. non-canonical predicate → warning
//!
//! Only concrete terms (neither abstract nor mixin) count when a node needs
//! a category. Per-node and per-edge rules stop after the configured sampling
//! caps; graph-level rules see the whole graph.

use crate::codes::{Code, ErrorCode, TermContext, TermFinding, WarningCode};
use crate::config::ValidationConfig;
use crate::enums::{ElementKind, GraphType};
use crate::model::{BiolinkModel, ElementInfo};
use crate::primitives::{curie_prefix, is_biolink_curie, is_curie, is_empty_value, local_name};
use crate::provenance::source_trail;
use crate::report::{Params, ValidationReporter, params};
use crate::types::{Attribute, Edge, InputEdge, KnowledgeGraph, Node, QEdge, QNode, Qualifier, QueryGraph};
use crate::versioning::{BIOLINK_4_2_0, ConcreteVersion, SemVer, TRAPI_1_4_0_BETA, TRAPI_1_6_0};
use serde_json::{Value, json};
use std::collections::HashSet;

pub const QUALIFIED_PREDICATE: &str = "qualified_predicate";
/// Joins the keys of dangling nodes into one finding identifier.
pub const DANGLING_SEPARATOR: &str = "|";

/// Per-call rule engine state.
pub struct SemanticValidator<'a> {
    model: &'a dyn BiolinkModel,
    trapi_version: &'a ConcreteVersion,
    config: &'a ValidationConfig,
    reporter: &'a mut ValidationReporter,
    /// Scope of findings for the edge being checked.
    scope: Option<String>,
}

impl<'a> SemanticValidator<'a> {
    pub fn new(
        model: &'a dyn BiolinkModel,
        trapi_version: &'a ConcreteVersion,
        config: &'a ValidationConfig,
        reporter: &'a mut ValidationReporter,
    ) -> Self {
        SemanticValidator {
            model,
            trapi_version,
            config,
            reporter,
            scope: None,
        }
    }

    pub(crate) fn report(&mut self, code: impl Into<Code>, identifier: Option<&str>, params: Params) {
        self.reporter
            .report_scoped(code, self.scope.as_deref(), identifier, params);
    }

    pub(crate) fn model(&self) -> &dyn BiolinkModel {
        self.model
    }

    pub(crate) fn config(&self) -> &ValidationConfig {
        self.config
    }

    fn model_at_least(&self, threshold: &str) -> bool {
        match (self.model.version().parse::<SemVer>(), threshold.parse::<SemVer>()) {
            (Ok(version), Ok(threshold)) => version.at_least(&threshold),
            _ => true,
        }
    }

    // ─── Term classification ────────────────────────────────────────────

    /// Classify `term` in `context`, reporting findings against `owner` (the
    /// node or edge holding the term). Returns the element when it is of the
    /// required kind and concrete.
    pub fn classify_term(&mut self, term: &str, context: TermContext, owner: &str) -> Option<ElementInfo> {
        let strict = match context {
            TermContext::Category(graph) | TermContext::Predicate(graph) => self.config.is_strict(graph),
            TermContext::AttributeType => self.config.is_strict(GraphType::KnowledgeGraph),
        };

        let Some(element) = self.model.get_element(term) else {
            self.emit(context, TermFinding::Unknown, strict, term, owner);
            return None;
        };

        let required = match context {
            TermContext::Category(_) => Some(ElementKind::Category),
            TermContext::Predicate(_) => Some(ElementKind::Predicate),
            TermContext::AttributeType => None,
        };
        if let Some(kind) = required
            && element.kind != kind
        {
            self.emit(context, TermFinding::WrongKind, strict, term, owner);
            return None;
        }

        if element.is_deprecated {
            self.emit(context, TermFinding::Deprecated, strict, term, owner);
        }
        if element.is_abstract {
            self.emit(context, TermFinding::Abstract, strict, term, owner);
        }
        if element.is_mixin {
            self.emit(context, TermFinding::Mixin, strict, term, owner);
        }
        if !element.is_canonical {
            self.emit(context, TermFinding::NonCanonical, strict, term, owner);
        }

        element.is_concrete().then_some(element)
    }

    fn emit(&mut self, context: TermContext, finding: TermFinding, strict: bool, term: &str, owner: &str) {
        if let Some(code) = context.code(finding, strict) {
            self.report(code, Some(term), params([(context.owner_parameter(), json!(owner))]));
        }
    }

    pub fn validate_category(&mut self, category: &str, graph: GraphType, node_id: &str) -> Option<ElementInfo> {
        self.classify_term(category, TermContext::Category(graph), node_id)
    }

    pub fn validate_predicate(&mut self, predicate: &str, graph: GraphType, edge_id: &str) -> Option<ElementInfo> {
        self.classify_term(predicate, TermContext::Predicate(graph), edge_id)
    }

    // ─── Query graph ────────────────────────────────────────────────────

    pub fn validate_query_graph(&mut self, graph: &QueryGraph) {
        if graph.nodes.is_empty() && graph.edges.is_empty() {
            self.report(
                WarningCode::GraphEmpty,
                Some(GraphType::QueryGraph.label()),
                Params::new(),
            );
            return;
        }

        let mut informative = false;
        for (key, node) in graph.nodes.iter().take(self.config.max_nodes) {
            informative |= self.validate_qnode(key, node);
        }
        if !graph.nodes.is_empty() && !informative {
            self.report(ErrorCode::QueryGraphNodesUninformative, None, Params::new());
        }

        for (edge_id, edge) in graph.edges.iter().take(self.config.max_edges) {
            self.validate_qedge(edge_id, edge, graph);
        }

        let referenced = referenced_nodes(graph.edges.values().map(|e| (e.subject.as_deref(), e.object.as_deref())));
        let dangling = dangling_nodes(graph.nodes.keys().take(self.config.max_nodes), &referenced);
        if !dangling.is_empty() {
            self.report(
                WarningCode::QueryGraphNodesDangling,
                Some(&dangling.join(DANGLING_SEPARATOR)),
                Params::new(),
            );
        }
    }

    /// Returns `true` when the node pins identifiers or categories.
    fn validate_qnode(&mut self, key: &str, node: &QNode) -> bool {
        let ids = node.ids.as_deref().unwrap_or_default();
        let categories = node.categories.as_deref().unwrap_or_default();

        let concrete: Vec<ElementInfo> = categories
            .iter()
            .filter_map(|c| self.validate_category(c, GraphType::QueryGraph, key))
            .collect();

        if !ids.is_empty() && !concrete.is_empty() {
            let unmapped: Vec<&str> = ids
                .iter()
                .map(String::as_str)
                .filter(|id| unmapped_prefix(id, &concrete).is_some())
                .collect();
            if !unmapped.is_empty() {
                self.report(
                    WarningCode::QueryGraphNodeIdsUnmappedPrefix,
                    Some(key),
                    params([("unmapped_ids", json!(unmapped)), ("categories", json!(categories))]),
                );
            }
        }

        !ids.is_empty() || !categories.is_empty()
    }

    fn validate_qedge(&mut self, edge_id: &str, edge: &QEdge, graph: &QueryGraph) {
        let subject_ok = self.check_endpoint(
            edge_id,
            edge.subject.as_deref(),
            |id| graph.nodes.contains_key(id),
            ErrorCode::QueryGraphEdgeSubjectMissing,
            ErrorCode::QueryGraphEdgeSubjectMissingFromNodes,
        );
        let object_ok = self.check_endpoint(
            edge_id,
            edge.object.as_deref(),
            |id| graph.nodes.contains_key(id),
            ErrorCode::QueryGraphEdgeObjectMissing,
            ErrorCode::QueryGraphEdgeObjectMissingFromNodes,
        );
        if !(subject_ok && object_ok) {
            return;
        }

        match edge.predicates.as_deref() {
            Some([]) => {
                self.report(ErrorCode::QueryGraphEdgePredicateEmptyArray, Some(edge_id), Params::new());
            }
            Some(predicates) => {
                for predicate in predicates {
                    self.validate_predicate(predicate, GraphType::QueryGraph, edge_id);
                }
            }
            None => {}
        }

        for constraint in edge.qualifier_constraints.iter().flatten() {
            if constraint.qualifier_set.is_empty() {
                self.report(
                    ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetEmpty,
                    Some(edge_id),
                    Params::new(),
                );
            } else {
                self.validate_qualifiers(QualifierContext::QueryGraph, edge_id, &constraint.qualifier_set, &[]);
            }
        }
    }

    // ─── Knowledge graph ────────────────────────────────────────────────

    pub fn validate_knowledge_graph(&mut self, graph: &KnowledgeGraph) {
        if graph.is_empty() {
            self.report(
                WarningCode::GraphEmpty,
                Some(GraphType::KnowledgeGraph.label()),
                Params::new(),
            );
            return;
        }
        if graph.nodes.is_empty() {
            self.report(ErrorCode::KnowledgeGraphNodesEmpty, None, Params::new());
        }
        if graph.edges.is_empty() {
            self.report(ErrorCode::KnowledgeGraphEdgesEmpty, None, Params::new());
        }

        if graph.nodes.len() > self.config.max_nodes || graph.edges.len() > self.config.max_edges {
            tracing::debug!(
                nodes = graph.nodes.len(),
                edges = graph.edges.len(),
                max_nodes = self.config.max_nodes,
                max_edges = self.config.max_edges,
                "sampling knowledge graph"
            );
        }

        for (node_id, node) in graph.nodes.iter().take(self.config.max_nodes) {
            self.validate_node(node_id, node);
        }
        for (edge_id, edge) in graph.edges.iter().take(self.config.max_edges) {
            self.validate_edge(edge_id, edge, graph);
        }

        let referenced = referenced_nodes(graph.edges.values().map(|e| (e.subject.as_deref(), e.object.as_deref())));
        let dangling = dangling_nodes(graph.nodes.keys().take(self.config.max_nodes), &referenced);
        if !dangling.is_empty() {
            self.report(
                WarningCode::KnowledgeGraphNodesDangling,
                Some(&dangling.join(DANGLING_SEPARATOR)),
                Params::new(),
            );
        }
    }

    fn validate_node(&mut self, node_id: &str, node: &Node) {
        match node.categories.as_deref() {
            None | Some([]) => {
                self.report(ErrorCode::KnowledgeGraphNodeCategoryMissing, Some(node_id), Params::new());
            }
            Some(categories) => {
                let concrete: Vec<ElementInfo> = categories
                    .iter()
                    .filter_map(|c| self.validate_category(c, GraphType::KnowledgeGraph, node_id))
                    .collect();
                if concrete.is_empty() {
                    self.report(
                        ErrorCode::KnowledgeGraphNodeCategoriesNotConcrete,
                        Some(node_id),
                        params([("categories", json!(categories))]),
                    );
                } else if let Some(prefix) = unmapped_prefix(node_id, &concrete) {
                    self.report(
                        WarningCode::KnowledgeGraphNodeIdUnmappedPrefix,
                        Some(node_id),
                        params([("prefix", json!(prefix)), ("categories", json!(categories))]),
                    );
                }
            }
        }

        if node.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            self.report(WarningCode::KnowledgeGraphNodeNameMissing, Some(node_id), Params::new());
        }
    }

    fn validate_edge(&mut self, edge_id: &str, edge: &Edge, graph: &KnowledgeGraph) {
        self.scope = if self.config.scope_by_provenance {
            edge.sources.as_deref().and_then(source_trail)
        } else {
            None
        };

        let subject_ok = self.check_endpoint(
            edge_id,
            edge.subject.as_deref(),
            |id| graph.nodes.contains_key(id),
            ErrorCode::KnowledgeGraphEdgeSubjectMissing,
            ErrorCode::KnowledgeGraphEdgeSubjectMissingFromNodes,
        );
        let object_ok = self.check_endpoint(
            edge_id,
            edge.object.as_deref(),
            |id| graph.nodes.contains_key(id),
            ErrorCode::KnowledgeGraphEdgeObjectMissing,
            ErrorCode::KnowledgeGraphEdgeObjectMissingFromNodes,
        );
        let predicate = edge.predicate.as_deref().map(str::trim).filter(|p| !p.is_empty());
        if predicate.is_none() {
            self.report(ErrorCode::KnowledgeGraphEdgePredicateMissing, Some(edge_id), Params::new());
        }

        if subject_ok && object_ok {
            if let Some(predicate) = predicate {
                self.validate_predicate(predicate, GraphType::KnowledgeGraph, edge_id);
            }
            if self.trapi_version.at_least(TRAPI_1_4_0_BETA) {
                self.validate_sources(edge_id, edge.sources.as_deref());
            }
            self.validate_attributes(edge_id, edge.attributes.as_deref().unwrap_or_default());
            if let Some(qualifiers) = &edge.qualifiers {
                let associations = self.edge_associations(edge, graph);
                self.validate_qualifiers(QualifierContext::KnowledgeGraph, edge_id, qualifiers, &associations);
            }
        }

        self.scope = None;
    }

    /// Report a missing or dangling edge endpoint. Returns `true` when the
    /// endpoint names a node of the graph.
    fn check_endpoint(
        &mut self,
        edge_id: &str,
        endpoint: Option<&str>,
        in_graph: impl Fn(&str) -> bool,
        missing: ErrorCode,
        missing_from_nodes: ErrorCode,
    ) -> bool {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            None => {
                self.report(missing, Some(edge_id), Params::new());
                false
            }
            Some(id) if !in_graph(id) => {
                self.report(missing_from_nodes, Some(id), params([("edge_id", json!(edge_id))]));
                false
            }
            Some(_) => true,
        }
    }

    fn edge_associations(&self, edge: &Edge, graph: &KnowledgeGraph) -> Vec<String> {
        let categories_of = |id: Option<&str>| -> Vec<String> {
            id.and_then(|id| graph.nodes.get(id))
                .and_then(|n| n.categories.clone())
                .unwrap_or_default()
        };
        let predicates: Vec<String> = edge.predicate.iter().cloned().collect();
        self.model.get_associations(
            &categories_of(edge.subject.as_deref()),
            &predicates,
            &categories_of(edge.object.as_deref()),
        )
    }

    // ─── Attributes ─────────────────────────────────────────────────────

    fn validate_attributes(&mut self, edge_id: &str, attributes: &[Attribute]) {
        let mut seen_slots: HashSet<EdgeSlot> = HashSet::new();

        for attribute in attributes {
            let Some(type_id) = attribute.attribute_type_id.as_deref() else {
                self.report(ErrorCode::KnowledgeGraphEdgeAttributeTypeIdMissing, Some(edge_id), Params::new());
                continue;
            };
            let type_id = type_id.trim();
            if type_id.is_empty() {
                self.report(ErrorCode::KnowledgeGraphEdgeAttributeTypeIdEmpty, Some(edge_id), Params::new());
                continue;
            }
            let on_edge = || params([("edge_id", json!(edge_id))]);
            if !is_curie(type_id) {
                self.report(ErrorCode::KnowledgeGraphEdgeAttributeTypeIdNotCurie, Some(type_id), on_edge());
                continue;
            }

            let value = match &attribute.value {
                None => {
                    self.report(ErrorCode::KnowledgeGraphEdgeAttributeValueMissing, Some(type_id), on_edge());
                    None
                }
                Some(v) if is_empty_value(v) => {
                    self.report(ErrorCode::KnowledgeGraphEdgeAttributeValueEmpty, Some(type_id), on_edge());
                    None
                }
                Some(v) => Some(v),
            };

            if !is_biolink_curie(type_id) {
                if let Some(prefix) = curie_prefix(type_id)
                    && !self.model.is_known_prefix(prefix)
                {
                    self.report(
                        WarningCode::KnowledgeGraphEdgeAttributeTypeIdNonBiolinkPrefix,
                        Some(type_id),
                        on_edge(),
                    );
                }
                continue;
            }

            self.classify_term(type_id, TermContext::AttributeType, edge_id);
            if let Some(element) = self.model.get_element(type_id) {
                let code = match element.kind {
                    ElementKind::Category => Some(WarningCode::KnowledgeGraphEdgeAttributeTypeIdIsCategory),
                    ElementKind::Predicate => Some(WarningCode::KnowledgeGraphEdgeAttributeTypeIdIsPredicate),
                    _ if !element.is_association_slot => {
                        Some(WarningCode::KnowledgeGraphEdgeAttributeTypeIdNotAssociationSlot)
                    }
                    _ => None,
                };
                if let Some(code) = code {
                    self.report(code, Some(type_id), on_edge());
                }
            }

            if let Some(slot) = EdgeSlot::from_type_id(type_id) {
                if !seen_slots.insert(slot) {
                    self.report(slot.duplicated(), Some(edge_id), Params::new());
                    continue;
                }
                if let Some(value) = value {
                    self.validate_slot_value(slot, edge_id, value);
                }
            }
        }

        if self.model_at_least(BIOLINK_4_2_0) {
            for slot in EdgeSlot::ALL {
                if seen_slots.contains(&slot) {
                    continue;
                }
                let code: Code = if self.trapi_version.at_least(TRAPI_1_6_0) {
                    slot.missing_error().into()
                } else {
                    slot.missing_warning().into()
                };
                self.report(code, Some(edge_id), Params::new());
            }
        }
    }

    fn validate_slot_value(&mut self, slot: EdgeSlot, edge_id: &str, value: &Value) {
        let Some(value) = value.as_str() else {
            self.report(slot.invalid(), Some(&value.to_string()), params([("edge_id", json!(edge_id))]));
            return;
        };
        match self.model.permissible_values(slot.term()) {
            None => {
                self.report(WarningCode::BiolinkElementRangeUnspecified, Some(slot.term()), Params::new());
            }
            Some(values) => {
                if !values.iter().any(|v| local_name(v) == local_name(value)) {
                    self.report(slot.invalid(), Some(value), params([("edge_id", json!(edge_id))]));
                }
            }
        }
    }

    // ─── Qualifiers ─────────────────────────────────────────────────────

    fn validate_qualifiers(
        &mut self,
        context: QualifierContext,
        edge_id: &str,
        qualifiers: &[Qualifier],
        associations: &[String],
    ) {
        for qualifier in qualifiers {
            let type_id = qualifier.qualifier_type_id.as_str();
            let value = qualifier.qualifier_value.as_str();
            let on_edge = || params([("edge_id", json!(edge_id))]);

            if !self.model.is_qualifier(type_id) {
                self.report(context.type_id_unknown(), Some(type_id), on_edge());
                continue;
            }

            if local_name(type_id) == QUALIFIED_PREDICATE {
                if !self.model.is_predicate(value) {
                    self.report(context.value_not_a_predicate(), Some(value), on_edge());
                }
                continue;
            }

            if context == QualifierContext::KnowledgeGraph
                && !self.model.validate_qualifier(type_id, value, associations)
            {
                self.report(
                    WarningCode::KnowledgeGraphEdgeQualifiersQualifierValueUnresolved,
                    Some(value),
                    params([("qualifier_type_id", json!(type_id)), ("edge_id", json!(edge_id))]),
                );
            }
        }
    }

    // ─── Input edges ────────────────────────────────────────────────────

    /// Check a test edge: both categories, both example identifiers and the predicate.
    pub fn validate_input_edge(&mut self, edge: &InputEdge) {
        let sides = [
            ("subject", edge.subject_category.as_deref(), edge.subject_id.as_deref()),
            ("object", edge.object_category.as_deref(), edge.object_id.as_deref()),
        ];
        for (side, category, id) in sides {
            let concrete = match category.map(str::trim).filter(|c| !c.is_empty()) {
                None => {
                    self.report(ErrorCode::InputEdgeNodeCategoryMissing, Some(side), Params::new());
                    None
                }
                Some(category) => {
                    let concrete = self.validate_category(category, GraphType::InputEdge, side);
                    if concrete.is_none() && self.model.is_category(category) {
                        self.report(
                            WarningCode::InputEdgeNodeCategoryNotConcrete,
                            Some(category),
                            params([("node_id", json!(side))]),
                        );
                    }
                    concrete
                }
            };

            match id.map(str::trim).filter(|i| !i.is_empty()) {
                None => self.report(ErrorCode::InputEdgeNodeIdMissing, Some(side), Params::new()),
                Some(id) => {
                    if let Some(category) = concrete
                        && let Some(prefix) = unmapped_prefix(id, std::slice::from_ref(&category))
                    {
                        self.report(
                            WarningCode::InputEdgeNodeIdUnmappedPrefix,
                            Some(id),
                            params([("prefix", json!(prefix)), ("categories", json!([category.name]))]),
                        );
                    }
                }
            }
        }

        match edge.predicate.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            None => self.report(ErrorCode::InputEdgePredicateMissing, None, Params::new()),
            Some(predicate) => {
                self.validate_predicate(predicate, GraphType::InputEdge, &edge.label());
            }
        }
    }
}

// ─── Edge slots ─────────────────────────────────────────────────────────────

/// Edge properties expected once per knowledge graph edge from Biolink 4.2.0 on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum EdgeSlot {
    KnowledgeLevel,
    AgentType,
}

impl EdgeSlot {
    const ALL: [EdgeSlot; 2] = [EdgeSlot::KnowledgeLevel, EdgeSlot::AgentType];

    fn from_type_id(type_id: &str) -> Option<EdgeSlot> {
        match local_name(type_id) {
            "knowledge_level" => Some(EdgeSlot::KnowledgeLevel),
            "agent_type" => Some(EdgeSlot::AgentType),
            _ => None,
        }
    }

    fn term(self) -> &'static str {
        match self {
            EdgeSlot::KnowledgeLevel => "biolink:knowledge_level",
            EdgeSlot::AgentType => "biolink:agent_type",
        }
    }

    fn missing_warning(self) -> WarningCode {
        match self {
            EdgeSlot::KnowledgeLevel => WarningCode::KnowledgeGraphEdgeKnowledgeLevelMissing,
            EdgeSlot::AgentType => WarningCode::KnowledgeGraphEdgeAgentTypeMissing,
        }
    }

    fn missing_error(self) -> ErrorCode {
        match self {
            EdgeSlot::KnowledgeLevel => ErrorCode::KnowledgeGraphEdgeKnowledgeLevelMissing,
            EdgeSlot::AgentType => ErrorCode::KnowledgeGraphEdgeAgentTypeMissing,
        }
    }

    fn duplicated(self) -> WarningCode {
        match self {
            EdgeSlot::KnowledgeLevel => WarningCode::KnowledgeGraphEdgeKnowledgeLevelDuplicated,
            EdgeSlot::AgentType => WarningCode::KnowledgeGraphEdgeAgentTypeDuplicated,
        }
    }

    fn invalid(self) -> ErrorCode {
        match self {
            EdgeSlot::KnowledgeLevel => ErrorCode::KnowledgeGraphEdgeKnowledgeLevelInvalid,
            EdgeSlot::AgentType => ErrorCode::KnowledgeGraphEdgeAgentTypeInvalid,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QualifierContext {
    KnowledgeGraph,
    QueryGraph,
}

impl QualifierContext {
    fn type_id_unknown(self) -> ErrorCode {
        match self {
            QualifierContext::KnowledgeGraph => ErrorCode::KnowledgeGraphEdgeQualifiersQualifierTypeIdUnknown,
            QualifierContext::QueryGraph => {
                ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetQualifierTypeIdUnknown
            }
        }
    }

    fn value_not_a_predicate(self) -> ErrorCode {
        match self {
            QualifierContext::KnowledgeGraph => {
                ErrorCode::KnowledgeGraphEdgeQualifiersQualifierValueNotAPredicate
            }
            QualifierContext::QueryGraph => {
                ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetQualifierValueNotAPredicate
            }
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────────

/// The namespace of `id` when the concrete categories declare id prefixes and
/// none of them matches. Categories declaring no prefixes constrain nothing.
pub fn unmapped_prefix<'i>(id: &'i str, categories: &[ElementInfo]) -> Option<&'i str> {
    let declared: Vec<&str> = categories
        .iter()
        .flat_map(|c| c.id_prefixes.iter().map(String::as_str))
        .collect();
    if declared.is_empty() {
        return None;
    }
    let prefix = curie_prefix(id).unwrap_or(id);
    (!declared.contains(&prefix)).then_some(prefix)
}

fn referenced_nodes<'g>(endpoints: impl Iterator<Item = (Option<&'g str>, Option<&'g str>)>) -> HashSet<&'g str> {
    endpoints.flat_map(|(s, o)| [s, o]).flatten().collect()
}

fn dangling_nodes<'g>(nodes: impl Iterator<Item = &'g String>, referenced: &HashSet<&str>) -> Vec<&'g str> {
    nodes
        .map(String::as_str)
        .filter(|id| !referenced.contains(id))
        .collect()
}
