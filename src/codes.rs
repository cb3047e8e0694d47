//! Closed catalog of validation codes.
//!
//! Every finding the validator can emit is one variant of a per-tier enum.
//! The tier is the code's severity and the first segment of its dotted path
//! (`error.knowledge_graph.edge.predicate.unknown`). Templates and parameter
//! lists live in the catalog document (`codes.yaml`) loaded by
//! [`CodeRegistry`](crate::registry::CodeRegistry); the test suite pins every
//! variant to a catalog entry.

use crate::enums::{GraphType, Severity};
use serde::{Serialize, Serializer};
use std::fmt;

/// Codes of the `critical` tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CriticalCode {
    TrapiValidation,
    TrapiResponseMessageMalformed,
}

impl CriticalCode {
    pub const ALL: &'static [CriticalCode] = &[
        CriticalCode::TrapiValidation,
        CriticalCode::TrapiResponseMessageMalformed,
    ];

    /// The dotted catalog path of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            CriticalCode::TrapiValidation => "critical.trapi.validation",
            CriticalCode::TrapiResponseMessageMalformed => {
                "critical.trapi.response.message.malformed"
            }
        }
    }
}

/// Codes of the `error` tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    TrapiResponseEmpty,
    TrapiResponseMessageEmpty,
    TrapiResponseMessageQueryGraphMissing,
    TrapiResponseMessageQueryGraphEmpty,
    TrapiResponseMessageKnowledgeGraphMissing,
    TrapiResponseMessageResultsMissing,
    TrapiResponseMessageResultsNotArray,
    TrapiResponseMessageResultNodeBindingKeyMissing,
    TrapiResponseMessageResultNodeBindingIdMissing,
    TrapiResponseMessageResultEdgeBindingKeyMissing,
    TrapiResponseMessageResultEdgeBindingIdMissing,
    TrapiResponseMessageResultMissingBindings,
    KnowledgeGraphNodesEmpty,
    KnowledgeGraphEdgesEmpty,
    QueryGraphNodesUninformative,
    QueryGraphNodeCategoryUnknown,
    QueryGraphNodeCategoryNotACategory,
    QueryGraphNodeCategoryAbstract,
    QueryGraphNodeCategoryMixin,
    KnowledgeGraphNodeCategoryUnknown,
    KnowledgeGraphNodeCategoryNotACategory,
    KnowledgeGraphNodeCategoryAbstract,
    KnowledgeGraphNodeCategoryMixin,
    InputEdgeNodeCategoryUnknown,
    InputEdgeNodeCategoryNotACategory,
    InputEdgeNodeCategoryAbstract,
    InputEdgeNodeCategoryMixin,
    KnowledgeGraphNodeCategoryMissing,
    KnowledgeGraphNodeCategoriesNotConcrete,
    InputEdgeNodeCategoryMissing,
    InputEdgeNodeIdMissing,
    QueryGraphEdgePredicateUnknown,
    QueryGraphEdgePredicateInvalid,
    QueryGraphEdgePredicateAbstract,
    QueryGraphEdgePredicateMixin,
    KnowledgeGraphEdgePredicateUnknown,
    KnowledgeGraphEdgePredicateInvalid,
    KnowledgeGraphEdgePredicateAbstract,
    KnowledgeGraphEdgePredicateMixin,
    InputEdgePredicateUnknown,
    InputEdgePredicateInvalid,
    InputEdgePredicateAbstract,
    InputEdgePredicateMixin,
    QueryGraphEdgeSubjectMissing,
    QueryGraphEdgeSubjectMissingFromNodes,
    QueryGraphEdgeObjectMissing,
    QueryGraphEdgeObjectMissingFromNodes,
    KnowledgeGraphEdgeSubjectMissing,
    KnowledgeGraphEdgeSubjectMissingFromNodes,
    KnowledgeGraphEdgeObjectMissing,
    KnowledgeGraphEdgeObjectMissingFromNodes,
    KnowledgeGraphEdgePredicateMissing,
    QueryGraphEdgePredicateEmptyArray,
    InputEdgePredicateMissing,
    KnowledgeGraphEdgeAttributeTypeIdMissing,
    KnowledgeGraphEdgeAttributeTypeIdEmpty,
    KnowledgeGraphEdgeAttributeTypeIdNotCurie,
    KnowledgeGraphEdgeAttributeValueMissing,
    KnowledgeGraphEdgeAttributeValueEmpty,
    KnowledgeGraphEdgeAttributeTypeIdUnknown,
    KnowledgeGraphEdgeAttributeTypeIdAbstract,
    KnowledgeGraphEdgeAttributeTypeIdMixin,
    KnowledgeGraphEdgeKnowledgeLevelMissing,
    KnowledgeGraphEdgeKnowledgeLevelInvalid,
    KnowledgeGraphEdgeAgentTypeMissing,
    KnowledgeGraphEdgeAgentTypeInvalid,
    KnowledgeGraphEdgeSourcesMissing,
    KnowledgeGraphEdgeSourcesEmpty,
    KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdEmpty,
    KnowledgeGraphEdgeSourcesRetrievalSourceResourceRoleEmpty,
    KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesNotCurie,
    KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesInvalid,
    KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesUnknown,
    KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesNotCurie,
    KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesInvalid,
    KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesUnknown,
    KnowledgeGraphEdgeProvenanceMissingPrimary,
    KnowledgeGraphEdgeQualifiersQualifierTypeIdUnknown,
    KnowledgeGraphEdgeQualifiersQualifierValueNotAPredicate,
    QueryGraphEdgeQualifierConstraintsQualifierSetQualifierTypeIdUnknown,
    QueryGraphEdgeQualifierConstraintsQualifierSetQualifierValueNotAPredicate,
    QueryGraphEdgeQualifierConstraintsQualifierSetEmpty,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::TrapiResponseEmpty,
        ErrorCode::TrapiResponseMessageEmpty,
        ErrorCode::TrapiResponseMessageQueryGraphMissing,
        ErrorCode::TrapiResponseMessageQueryGraphEmpty,
        ErrorCode::TrapiResponseMessageKnowledgeGraphMissing,
        ErrorCode::TrapiResponseMessageResultsMissing,
        ErrorCode::TrapiResponseMessageResultsNotArray,
        ErrorCode::TrapiResponseMessageResultNodeBindingKeyMissing,
        ErrorCode::TrapiResponseMessageResultNodeBindingIdMissing,
        ErrorCode::TrapiResponseMessageResultEdgeBindingKeyMissing,
        ErrorCode::TrapiResponseMessageResultEdgeBindingIdMissing,
        ErrorCode::TrapiResponseMessageResultMissingBindings,
        ErrorCode::KnowledgeGraphNodesEmpty,
        ErrorCode::KnowledgeGraphEdgesEmpty,
        ErrorCode::QueryGraphNodesUninformative,
        ErrorCode::QueryGraphNodeCategoryUnknown,
        ErrorCode::QueryGraphNodeCategoryNotACategory,
        ErrorCode::QueryGraphNodeCategoryAbstract,
        ErrorCode::QueryGraphNodeCategoryMixin,
        ErrorCode::KnowledgeGraphNodeCategoryUnknown,
        ErrorCode::KnowledgeGraphNodeCategoryNotACategory,
        ErrorCode::KnowledgeGraphNodeCategoryAbstract,
        ErrorCode::KnowledgeGraphNodeCategoryMixin,
        ErrorCode::InputEdgeNodeCategoryUnknown,
        ErrorCode::InputEdgeNodeCategoryNotACategory,
        ErrorCode::InputEdgeNodeCategoryAbstract,
        ErrorCode::InputEdgeNodeCategoryMixin,
        ErrorCode::KnowledgeGraphNodeCategoryMissing,
        ErrorCode::KnowledgeGraphNodeCategoriesNotConcrete,
        ErrorCode::InputEdgeNodeCategoryMissing,
        ErrorCode::InputEdgeNodeIdMissing,
        ErrorCode::QueryGraphEdgePredicateUnknown,
        ErrorCode::QueryGraphEdgePredicateInvalid,
        ErrorCode::QueryGraphEdgePredicateAbstract,
        ErrorCode::QueryGraphEdgePredicateMixin,
        ErrorCode::KnowledgeGraphEdgePredicateUnknown,
        ErrorCode::KnowledgeGraphEdgePredicateInvalid,
        ErrorCode::KnowledgeGraphEdgePredicateAbstract,
        ErrorCode::KnowledgeGraphEdgePredicateMixin,
        ErrorCode::InputEdgePredicateUnknown,
        ErrorCode::InputEdgePredicateInvalid,
        ErrorCode::InputEdgePredicateAbstract,
        ErrorCode::InputEdgePredicateMixin,
        ErrorCode::QueryGraphEdgeSubjectMissing,
        ErrorCode::QueryGraphEdgeSubjectMissingFromNodes,
        ErrorCode::QueryGraphEdgeObjectMissing,
        ErrorCode::QueryGraphEdgeObjectMissingFromNodes,
        ErrorCode::KnowledgeGraphEdgeSubjectMissing,
        ErrorCode::KnowledgeGraphEdgeSubjectMissingFromNodes,
        ErrorCode::KnowledgeGraphEdgeObjectMissing,
        ErrorCode::KnowledgeGraphEdgeObjectMissingFromNodes,
        ErrorCode::KnowledgeGraphEdgePredicateMissing,
        ErrorCode::QueryGraphEdgePredicateEmptyArray,
        ErrorCode::InputEdgePredicateMissing,
        ErrorCode::KnowledgeGraphEdgeAttributeTypeIdMissing,
        ErrorCode::KnowledgeGraphEdgeAttributeTypeIdEmpty,
        ErrorCode::KnowledgeGraphEdgeAttributeTypeIdNotCurie,
        ErrorCode::KnowledgeGraphEdgeAttributeValueMissing,
        ErrorCode::KnowledgeGraphEdgeAttributeValueEmpty,
        ErrorCode::KnowledgeGraphEdgeAttributeTypeIdUnknown,
        ErrorCode::KnowledgeGraphEdgeAttributeTypeIdAbstract,
        ErrorCode::KnowledgeGraphEdgeAttributeTypeIdMixin,
        ErrorCode::KnowledgeGraphEdgeKnowledgeLevelMissing,
        ErrorCode::KnowledgeGraphEdgeKnowledgeLevelInvalid,
        ErrorCode::KnowledgeGraphEdgeAgentTypeMissing,
        ErrorCode::KnowledgeGraphEdgeAgentTypeInvalid,
        ErrorCode::KnowledgeGraphEdgeSourcesMissing,
        ErrorCode::KnowledgeGraphEdgeSourcesEmpty,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdEmpty,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceRoleEmpty,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesNotCurie,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesInvalid,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesUnknown,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesNotCurie,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesInvalid,
        ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesUnknown,
        ErrorCode::KnowledgeGraphEdgeProvenanceMissingPrimary,
        ErrorCode::KnowledgeGraphEdgeQualifiersQualifierTypeIdUnknown,
        ErrorCode::KnowledgeGraphEdgeQualifiersQualifierValueNotAPredicate,
        ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetQualifierTypeIdUnknown,
        ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetQualifierValueNotAPredicate,
        ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetEmpty,
    ];

    /// The dotted catalog path of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::TrapiResponseEmpty => "error.trapi.response.empty",
            ErrorCode::TrapiResponseMessageEmpty => "error.trapi.response.message.empty",
            ErrorCode::TrapiResponseMessageQueryGraphMissing => {
                "error.trapi.response.message.query_graph.missing"
            }
            ErrorCode::TrapiResponseMessageQueryGraphEmpty => {
                "error.trapi.response.message.query_graph.empty"
            }
            ErrorCode::TrapiResponseMessageKnowledgeGraphMissing => {
                "error.trapi.response.message.knowledge_graph.missing"
            }
            ErrorCode::TrapiResponseMessageResultsMissing => {
                "error.trapi.response.message.results.missing"
            }
            ErrorCode::TrapiResponseMessageResultsNotArray => {
                "error.trapi.response.message.results.not_array"
            }
            ErrorCode::TrapiResponseMessageResultNodeBindingKeyMissing => {
                "error.trapi.response.message.result.node_binding.key.missing"
            }
            ErrorCode::TrapiResponseMessageResultNodeBindingIdMissing => {
                "error.trapi.response.message.result.node_binding.id.missing"
            }
            ErrorCode::TrapiResponseMessageResultEdgeBindingKeyMissing => {
                "error.trapi.response.message.result.edge_binding.key.missing"
            }
            ErrorCode::TrapiResponseMessageResultEdgeBindingIdMissing => {
                "error.trapi.response.message.result.edge_binding.id.missing"
            }
            ErrorCode::TrapiResponseMessageResultMissingBindings => {
                "error.trapi.response.message.result.missing_bindings"
            }
            ErrorCode::KnowledgeGraphNodesEmpty => "error.knowledge_graph.nodes.empty",
            ErrorCode::KnowledgeGraphEdgesEmpty => "error.knowledge_graph.edges.empty",
            ErrorCode::QueryGraphNodesUninformative => "error.query_graph.nodes.uninformative",
            ErrorCode::QueryGraphNodeCategoryUnknown => "error.query_graph.node.category.unknown",
            ErrorCode::QueryGraphNodeCategoryNotACategory => {
                "error.query_graph.node.category.not_a_category"
            }
            ErrorCode::QueryGraphNodeCategoryAbstract => "error.query_graph.node.category.abstract",
            ErrorCode::QueryGraphNodeCategoryMixin => "error.query_graph.node.category.mixin",
            ErrorCode::KnowledgeGraphNodeCategoryUnknown => {
                "error.knowledge_graph.node.category.unknown"
            }
            ErrorCode::KnowledgeGraphNodeCategoryNotACategory => {
                "error.knowledge_graph.node.category.not_a_category"
            }
            ErrorCode::KnowledgeGraphNodeCategoryAbstract => {
                "error.knowledge_graph.node.category.abstract"
            }
            ErrorCode::KnowledgeGraphNodeCategoryMixin => {
                "error.knowledge_graph.node.category.mixin"
            }
            ErrorCode::InputEdgeNodeCategoryUnknown => "error.input_edge.node.category.unknown",
            ErrorCode::InputEdgeNodeCategoryNotACategory => {
                "error.input_edge.node.category.not_a_category"
            }
            ErrorCode::InputEdgeNodeCategoryAbstract => "error.input_edge.node.category.abstract",
            ErrorCode::InputEdgeNodeCategoryMixin => "error.input_edge.node.category.mixin",
            ErrorCode::KnowledgeGraphNodeCategoryMissing => {
                "error.knowledge_graph.node.category.missing"
            }
            ErrorCode::KnowledgeGraphNodeCategoriesNotConcrete => {
                "error.knowledge_graph.node.categories.not_concrete"
            }
            ErrorCode::InputEdgeNodeCategoryMissing => "error.input_edge.node.category.missing",
            ErrorCode::InputEdgeNodeIdMissing => "error.input_edge.node.id.missing",
            ErrorCode::QueryGraphEdgePredicateUnknown => "error.query_graph.edge.predicate.unknown",
            ErrorCode::QueryGraphEdgePredicateInvalid => "error.query_graph.edge.predicate.invalid",
            ErrorCode::QueryGraphEdgePredicateAbstract => {
                "error.query_graph.edge.predicate.abstract"
            }
            ErrorCode::QueryGraphEdgePredicateMixin => "error.query_graph.edge.predicate.mixin",
            ErrorCode::KnowledgeGraphEdgePredicateUnknown => {
                "error.knowledge_graph.edge.predicate.unknown"
            }
            ErrorCode::KnowledgeGraphEdgePredicateInvalid => {
                "error.knowledge_graph.edge.predicate.invalid"
            }
            ErrorCode::KnowledgeGraphEdgePredicateAbstract => {
                "error.knowledge_graph.edge.predicate.abstract"
            }
            ErrorCode::KnowledgeGraphEdgePredicateMixin => {
                "error.knowledge_graph.edge.predicate.mixin"
            }
            ErrorCode::InputEdgePredicateUnknown => "error.input_edge.predicate.unknown",
            ErrorCode::InputEdgePredicateInvalid => "error.input_edge.predicate.invalid",
            ErrorCode::InputEdgePredicateAbstract => "error.input_edge.predicate.abstract",
            ErrorCode::InputEdgePredicateMixin => "error.input_edge.predicate.mixin",
            ErrorCode::QueryGraphEdgeSubjectMissing => "error.query_graph.edge.subject.missing",
            ErrorCode::QueryGraphEdgeSubjectMissingFromNodes => {
                "error.query_graph.edge.subject.missing_from_nodes"
            }
            ErrorCode::QueryGraphEdgeObjectMissing => "error.query_graph.edge.object.missing",
            ErrorCode::QueryGraphEdgeObjectMissingFromNodes => {
                "error.query_graph.edge.object.missing_from_nodes"
            }
            ErrorCode::KnowledgeGraphEdgeSubjectMissing => {
                "error.knowledge_graph.edge.subject.missing"
            }
            ErrorCode::KnowledgeGraphEdgeSubjectMissingFromNodes => {
                "error.knowledge_graph.edge.subject.missing_from_nodes"
            }
            ErrorCode::KnowledgeGraphEdgeObjectMissing => {
                "error.knowledge_graph.edge.object.missing"
            }
            ErrorCode::KnowledgeGraphEdgeObjectMissingFromNodes => {
                "error.knowledge_graph.edge.object.missing_from_nodes"
            }
            ErrorCode::KnowledgeGraphEdgePredicateMissing => {
                "error.knowledge_graph.edge.predicate.missing"
            }
            ErrorCode::QueryGraphEdgePredicateEmptyArray => {
                "error.query_graph.edge.predicate.empty_array"
            }
            ErrorCode::InputEdgePredicateMissing => "error.input_edge.predicate.missing",
            ErrorCode::KnowledgeGraphEdgeAttributeTypeIdMissing => {
                "error.knowledge_graph.edge.attribute.type_id.missing"
            }
            ErrorCode::KnowledgeGraphEdgeAttributeTypeIdEmpty => {
                "error.knowledge_graph.edge.attribute.type_id.empty"
            }
            ErrorCode::KnowledgeGraphEdgeAttributeTypeIdNotCurie => {
                "error.knowledge_graph.edge.attribute.type_id.not_curie"
            }
            ErrorCode::KnowledgeGraphEdgeAttributeValueMissing => {
                "error.knowledge_graph.edge.attribute.value.missing"
            }
            ErrorCode::KnowledgeGraphEdgeAttributeValueEmpty => {
                "error.knowledge_graph.edge.attribute.value.empty"
            }
            ErrorCode::KnowledgeGraphEdgeAttributeTypeIdUnknown => {
                "error.knowledge_graph.edge.attribute.type_id.unknown"
            }
            ErrorCode::KnowledgeGraphEdgeAttributeTypeIdAbstract => {
                "error.knowledge_graph.edge.attribute.type_id.abstract"
            }
            ErrorCode::KnowledgeGraphEdgeAttributeTypeIdMixin => {
                "error.knowledge_graph.edge.attribute.type_id.mixin"
            }
            ErrorCode::KnowledgeGraphEdgeKnowledgeLevelMissing => {
                "error.knowledge_graph.edge.knowledge_level.missing"
            }
            ErrorCode::KnowledgeGraphEdgeKnowledgeLevelInvalid => {
                "error.knowledge_graph.edge.knowledge_level.invalid"
            }
            ErrorCode::KnowledgeGraphEdgeAgentTypeMissing => {
                "error.knowledge_graph.edge.agent_type.missing"
            }
            ErrorCode::KnowledgeGraphEdgeAgentTypeInvalid => {
                "error.knowledge_graph.edge.agent_type.invalid"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesMissing => {
                "error.knowledge_graph.edge.sources.missing"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesEmpty => "error.knowledge_graph.edge.sources.empty",
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdEmpty => {
                "error.knowledge_graph.edge.sources.retrieval_source.resource_id.empty"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceRoleEmpty => {
                "error.knowledge_graph.edge.sources.retrieval_source.resource_role.empty"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesNotCurie => {
                "error.knowledge_graph.edge.sources.retrieval_source.resource_id.infores.not_curie"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesInvalid => {
                "error.knowledge_graph.edge.sources.retrieval_source.resource_id.infores.invalid"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesUnknown => {
                "error.knowledge_graph.edge.sources.retrieval_source.resource_id.infores.unknown"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesNotCurie => {
                "error.knowledge_graph.edge.sources.retrieval_source.upstream_resource_ids.infores.not_curie"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesInvalid => {
                "error.knowledge_graph.edge.sources.retrieval_source.upstream_resource_ids.infores.invalid"
            }
            ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesUnknown => {
                "error.knowledge_graph.edge.sources.retrieval_source.upstream_resource_ids.infores.unknown"
            }
            ErrorCode::KnowledgeGraphEdgeProvenanceMissingPrimary => {
                "error.knowledge_graph.edge.provenance.missing_primary"
            }
            ErrorCode::KnowledgeGraphEdgeQualifiersQualifierTypeIdUnknown => {
                "error.knowledge_graph.edge.qualifiers.qualifier.type_id.unknown"
            }
            ErrorCode::KnowledgeGraphEdgeQualifiersQualifierValueNotAPredicate => {
                "error.knowledge_graph.edge.qualifiers.qualifier.value.not_a_predicate"
            }
            ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetQualifierTypeIdUnknown => {
                "error.query_graph.edge.qualifier_constraints.qualifier_set.qualifier.type_id.unknown"
            }
            ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetQualifierValueNotAPredicate => {
                "error.query_graph.edge.qualifier_constraints.qualifier_set.qualifier.value.not_a_predicate"
            }
            ErrorCode::QueryGraphEdgeQualifierConstraintsQualifierSetEmpty => {
                "error.query_graph.edge.qualifier_constraints.qualifier_set.empty"
            }
        }
    }
}

/// Codes of the `warning` tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningCode {
    TrapiResponseMessageKnowledgeGraphEmpty,
    TrapiResponseMessageResultsEmpty,
    TrapiResponseStatusUnknown,
    TrapiResponseSchemaVersionMissing,
    TrapiResponseBiolinkVersionMissing,
    TrapiResponseSchemaVersionUnresolved,
    TrapiResponseBiolinkVersionUnresolved,
    GraphEmpty,
    KnowledgeGraphNodesDangling,
    QueryGraphNodesDangling,
    QueryGraphNodeCategoryDeprecated,
    KnowledgeGraphNodeCategoryDeprecated,
    InputEdgeNodeCategoryDeprecated,
    KnowledgeGraphNodeIdUnmappedPrefix,
    KnowledgeGraphNodeNameMissing,
    QueryGraphNodeIdsUnmappedPrefix,
    InputEdgeNodeCategoryNotConcrete,
    InputEdgeNodeIdUnmappedPrefix,
    QueryGraphEdgePredicateDeprecated,
    QueryGraphEdgePredicateNonCanonical,
    KnowledgeGraphEdgePredicateDeprecated,
    KnowledgeGraphEdgePredicateNonCanonical,
    InputEdgePredicateDeprecated,
    InputEdgePredicateNonCanonical,
    KnowledgeGraphEdgeAttributeTypeIdDeprecated,
    KnowledgeGraphEdgeAttributeTypeIdIsCategory,
    KnowledgeGraphEdgeAttributeTypeIdIsPredicate,
    KnowledgeGraphEdgeAttributeTypeIdNotAssociationSlot,
    KnowledgeGraphEdgeAttributeTypeIdNonBiolinkPrefix,
    KnowledgeGraphEdgeKnowledgeLevelMissing,
    KnowledgeGraphEdgeKnowledgeLevelDuplicated,
    KnowledgeGraphEdgeAgentTypeMissing,
    KnowledgeGraphEdgeAgentTypeDuplicated,
    BiolinkElementRangeUnspecified,
    KnowledgeGraphEdgeProvenanceMultiplePrimary,
    KnowledgeGraphEdgeProvenanceAraMissing,
    KnowledgeGraphEdgeProvenanceKpMissing,
    KnowledgeGraphEdgeQualifiersQualifierValueUnresolved,
}

impl WarningCode {
    pub const ALL: &'static [WarningCode] = &[
        WarningCode::TrapiResponseMessageKnowledgeGraphEmpty,
        WarningCode::TrapiResponseMessageResultsEmpty,
        WarningCode::TrapiResponseStatusUnknown,
        WarningCode::TrapiResponseSchemaVersionMissing,
        WarningCode::TrapiResponseBiolinkVersionMissing,
        WarningCode::TrapiResponseSchemaVersionUnresolved,
        WarningCode::TrapiResponseBiolinkVersionUnresolved,
        WarningCode::GraphEmpty,
        WarningCode::KnowledgeGraphNodesDangling,
        WarningCode::QueryGraphNodesDangling,
        WarningCode::QueryGraphNodeCategoryDeprecated,
        WarningCode::KnowledgeGraphNodeCategoryDeprecated,
        WarningCode::InputEdgeNodeCategoryDeprecated,
        WarningCode::KnowledgeGraphNodeIdUnmappedPrefix,
        WarningCode::KnowledgeGraphNodeNameMissing,
        WarningCode::QueryGraphNodeIdsUnmappedPrefix,
        WarningCode::InputEdgeNodeCategoryNotConcrete,
        WarningCode::InputEdgeNodeIdUnmappedPrefix,
        WarningCode::QueryGraphEdgePredicateDeprecated,
        WarningCode::QueryGraphEdgePredicateNonCanonical,
        WarningCode::KnowledgeGraphEdgePredicateDeprecated,
        WarningCode::KnowledgeGraphEdgePredicateNonCanonical,
        WarningCode::InputEdgePredicateDeprecated,
        WarningCode::InputEdgePredicateNonCanonical,
        WarningCode::KnowledgeGraphEdgeAttributeTypeIdDeprecated,
        WarningCode::KnowledgeGraphEdgeAttributeTypeIdIsCategory,
        WarningCode::KnowledgeGraphEdgeAttributeTypeIdIsPredicate,
        WarningCode::KnowledgeGraphEdgeAttributeTypeIdNotAssociationSlot,
        WarningCode::KnowledgeGraphEdgeAttributeTypeIdNonBiolinkPrefix,
        WarningCode::KnowledgeGraphEdgeKnowledgeLevelMissing,
        WarningCode::KnowledgeGraphEdgeKnowledgeLevelDuplicated,
        WarningCode::KnowledgeGraphEdgeAgentTypeMissing,
        WarningCode::KnowledgeGraphEdgeAgentTypeDuplicated,
        WarningCode::BiolinkElementRangeUnspecified,
        WarningCode::KnowledgeGraphEdgeProvenanceMultiplePrimary,
        WarningCode::KnowledgeGraphEdgeProvenanceAraMissing,
        WarningCode::KnowledgeGraphEdgeProvenanceKpMissing,
        WarningCode::KnowledgeGraphEdgeQualifiersQualifierValueUnresolved,
    ];

    /// The dotted catalog path of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            WarningCode::TrapiResponseMessageKnowledgeGraphEmpty => {
                "warning.trapi.response.message.knowledge_graph.empty"
            }
            WarningCode::TrapiResponseMessageResultsEmpty => {
                "warning.trapi.response.message.results.empty"
            }
            WarningCode::TrapiResponseStatusUnknown => "warning.trapi.response.status.unknown",
            WarningCode::TrapiResponseSchemaVersionMissing => {
                "warning.trapi.response.schema_version.missing"
            }
            WarningCode::TrapiResponseBiolinkVersionMissing => {
                "warning.trapi.response.biolink_version.missing"
            }
            WarningCode::TrapiResponseSchemaVersionUnresolved => {
                "warning.trapi.response.schema_version.unresolved"
            }
            WarningCode::TrapiResponseBiolinkVersionUnresolved => {
                "warning.trapi.response.biolink_version.unresolved"
            }
            WarningCode::GraphEmpty => "warning.graph.empty",
            WarningCode::KnowledgeGraphNodesDangling => "warning.knowledge_graph.nodes.dangling",
            WarningCode::QueryGraphNodesDangling => "warning.query_graph.nodes.dangling",
            WarningCode::QueryGraphNodeCategoryDeprecated => {
                "warning.query_graph.node.category.deprecated"
            }
            WarningCode::KnowledgeGraphNodeCategoryDeprecated => {
                "warning.knowledge_graph.node.category.deprecated"
            }
            WarningCode::InputEdgeNodeCategoryDeprecated => {
                "warning.input_edge.node.category.deprecated"
            }
            WarningCode::KnowledgeGraphNodeIdUnmappedPrefix => {
                "warning.knowledge_graph.node.id.unmapped_prefix"
            }
            WarningCode::KnowledgeGraphNodeNameMissing => {
                "warning.knowledge_graph.node.name.missing"
            }
            WarningCode::QueryGraphNodeIdsUnmappedPrefix => {
                "warning.query_graph.node.ids.unmapped_prefix"
            }
            WarningCode::InputEdgeNodeCategoryNotConcrete => {
                "warning.input_edge.node.category.not_concrete"
            }
            WarningCode::InputEdgeNodeIdUnmappedPrefix => {
                "warning.input_edge.node.id.unmapped_prefix"
            }
            WarningCode::QueryGraphEdgePredicateDeprecated => {
                "warning.query_graph.edge.predicate.deprecated"
            }
            WarningCode::QueryGraphEdgePredicateNonCanonical => {
                "warning.query_graph.edge.predicate.non_canonical"
            }
            WarningCode::KnowledgeGraphEdgePredicateDeprecated => {
                "warning.knowledge_graph.edge.predicate.deprecated"
            }
            WarningCode::KnowledgeGraphEdgePredicateNonCanonical => {
                "warning.knowledge_graph.edge.predicate.non_canonical"
            }
            WarningCode::InputEdgePredicateDeprecated => "warning.input_edge.predicate.deprecated",
            WarningCode::InputEdgePredicateNonCanonical => {
                "warning.input_edge.predicate.non_canonical"
            }
            WarningCode::KnowledgeGraphEdgeAttributeTypeIdDeprecated => {
                "warning.knowledge_graph.edge.attribute.type_id.deprecated"
            }
            WarningCode::KnowledgeGraphEdgeAttributeTypeIdIsCategory => {
                "warning.knowledge_graph.edge.attribute.type_id.is_category"
            }
            WarningCode::KnowledgeGraphEdgeAttributeTypeIdIsPredicate => {
                "warning.knowledge_graph.edge.attribute.type_id.is_predicate"
            }
            WarningCode::KnowledgeGraphEdgeAttributeTypeIdNotAssociationSlot => {
                "warning.knowledge_graph.edge.attribute.type_id.not_association_slot"
            }
            WarningCode::KnowledgeGraphEdgeAttributeTypeIdNonBiolinkPrefix => {
                "warning.knowledge_graph.edge.attribute.type_id.non_biolink_prefix"
            }
            WarningCode::KnowledgeGraphEdgeKnowledgeLevelMissing => {
                "warning.knowledge_graph.edge.knowledge_level.missing"
            }
            WarningCode::KnowledgeGraphEdgeKnowledgeLevelDuplicated => {
                "warning.knowledge_graph.edge.knowledge_level.duplicated"
            }
            WarningCode::KnowledgeGraphEdgeAgentTypeMissing => {
                "warning.knowledge_graph.edge.agent_type.missing"
            }
            WarningCode::KnowledgeGraphEdgeAgentTypeDuplicated => {
                "warning.knowledge_graph.edge.agent_type.duplicated"
            }
            WarningCode::BiolinkElementRangeUnspecified => {
                "warning.biolink.element.range.unspecified"
            }
            WarningCode::KnowledgeGraphEdgeProvenanceMultiplePrimary => {
                "warning.knowledge_graph.edge.provenance.multiple_primary"
            }
            WarningCode::KnowledgeGraphEdgeProvenanceAraMissing => {
                "warning.knowledge_graph.edge.provenance.ara.missing"
            }
            WarningCode::KnowledgeGraphEdgeProvenanceKpMissing => {
                "warning.knowledge_graph.edge.provenance.kp.missing"
            }
            WarningCode::KnowledgeGraphEdgeQualifiersQualifierValueUnresolved => {
                "warning.knowledge_graph.edge.qualifiers.qualifier.value.unresolved"
            }
        }
    }
}

/// Codes of the `info` tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InfoCode {
    QueryGraphNodeCategoryAbstract,
    QueryGraphNodeCategoryMixin,
    KnowledgeGraphNodeCategoryAbstract,
    KnowledgeGraphNodeCategoryMixin,
    InputEdgeNodeCategoryAbstract,
    InputEdgeNodeCategoryMixin,
    QueryGraphEdgePredicateAbstract,
    QueryGraphEdgePredicateMixin,
    KnowledgeGraphEdgePredicateAbstract,
    KnowledgeGraphEdgePredicateMixin,
    InputEdgePredicateAbstract,
    InputEdgePredicateMixin,
    KnowledgeGraphEdgeAttributeTypeIdAbstract,
    KnowledgeGraphEdgeAttributeTypeIdMixin,
    Compliant,
}

impl InfoCode {
    pub const ALL: &'static [InfoCode] = &[
        InfoCode::QueryGraphNodeCategoryAbstract,
        InfoCode::QueryGraphNodeCategoryMixin,
        InfoCode::KnowledgeGraphNodeCategoryAbstract,
        InfoCode::KnowledgeGraphNodeCategoryMixin,
        InfoCode::InputEdgeNodeCategoryAbstract,
        InfoCode::InputEdgeNodeCategoryMixin,
        InfoCode::QueryGraphEdgePredicateAbstract,
        InfoCode::QueryGraphEdgePredicateMixin,
        InfoCode::KnowledgeGraphEdgePredicateAbstract,
        InfoCode::KnowledgeGraphEdgePredicateMixin,
        InfoCode::InputEdgePredicateAbstract,
        InfoCode::InputEdgePredicateMixin,
        InfoCode::KnowledgeGraphEdgeAttributeTypeIdAbstract,
        InfoCode::KnowledgeGraphEdgeAttributeTypeIdMixin,
        InfoCode::Compliant,
    ];

    /// The dotted catalog path of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            InfoCode::QueryGraphNodeCategoryAbstract => "info.query_graph.node.category.abstract",
            InfoCode::QueryGraphNodeCategoryMixin => "info.query_graph.node.category.mixin",
            InfoCode::KnowledgeGraphNodeCategoryAbstract => {
                "info.knowledge_graph.node.category.abstract"
            }
            InfoCode::KnowledgeGraphNodeCategoryMixin => "info.knowledge_graph.node.category.mixin",
            InfoCode::InputEdgeNodeCategoryAbstract => "info.input_edge.node.category.abstract",
            InfoCode::InputEdgeNodeCategoryMixin => "info.input_edge.node.category.mixin",
            InfoCode::QueryGraphEdgePredicateAbstract => "info.query_graph.edge.predicate.abstract",
            InfoCode::QueryGraphEdgePredicateMixin => "info.query_graph.edge.predicate.mixin",
            InfoCode::KnowledgeGraphEdgePredicateAbstract => {
                "info.knowledge_graph.edge.predicate.abstract"
            }
            InfoCode::KnowledgeGraphEdgePredicateMixin => {
                "info.knowledge_graph.edge.predicate.mixin"
            }
            InfoCode::InputEdgePredicateAbstract => "info.input_edge.predicate.abstract",
            InfoCode::InputEdgePredicateMixin => "info.input_edge.predicate.mixin",
            InfoCode::KnowledgeGraphEdgeAttributeTypeIdAbstract => {
                "info.knowledge_graph.edge.attribute.type_id.abstract"
            }
            InfoCode::KnowledgeGraphEdgeAttributeTypeIdMixin => {
                "info.knowledge_graph.edge.attribute.type_id.mixin"
            }
            InfoCode::Compliant => "info.compliant",
        }
    }
}

/// Codes of the `skipped` tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkippedCode {
    Test,
}

impl SkippedCode {
    pub const ALL: &'static [SkippedCode] = &[
        SkippedCode::Test,
    ];

    /// The dotted catalog path of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            SkippedCode::Test => "skipped.test",
        }
    }
}
/// A validation code of any tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Code {
    Critical(CriticalCode),
    Error(ErrorCode),
    Warning(WarningCode),
    Info(InfoCode),
    Skipped(SkippedCode),
}

impl Code {
    pub fn path(self) -> &'static str {
        match self {
            Code::Critical(c) => c.as_str(),
            Code::Error(c) => c.as_str(),
            Code::Warning(c) => c.as_str(),
            Code::Info(c) => c.as_str(),
            Code::Skipped(c) => c.as_str(),
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Code::Critical(_) => Severity::Critical,
            Code::Error(_) => Severity::Error,
            Code::Warning(_) => Severity::Warning,
            Code::Info(_) => Severity::Information,
            Code::Skipped(_) => Severity::Skipped,
        }
    }

    /// Every code of every tier, in tier order.
    pub fn all() -> impl Iterator<Item = Code> {
        CriticalCode::ALL
            .iter()
            .map(|c| Code::Critical(*c))
            .chain(ErrorCode::ALL.iter().map(|c| Code::Error(*c)))
            .chain(WarningCode::ALL.iter().map(|c| Code::Warning(*c)))
            .chain(InfoCode::ALL.iter().map(|c| Code::Info(*c)))
            .chain(SkippedCode::ALL.iter().map(|c| Code::Skipped(*c)))
    }
}

impl From<CriticalCode> for Code {
    fn from(c: CriticalCode) -> Self {
        Code::Critical(c)
    }
}

impl From<ErrorCode> for Code {
    fn from(c: ErrorCode) -> Self {
        Code::Error(c)
    }
}

impl From<WarningCode> for Code {
    fn from(c: WarningCode) -> Self {
        Code::Warning(c)
    }
}

impl From<InfoCode> for Code {
    fn from(c: InfoCode) -> Self {
        Code::Info(c)
    }
}

impl From<SkippedCode> for Code {
    fn from(c: SkippedCode) -> Self {
        Code::Skipped(c)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

// ─── Term classification codes ──────────────────────────────────────────────

/// Where a model term was found. Selects the code family for its findings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermContext {
    Category(GraphType),
    Predicate(GraphType),
    AttributeType,
}

/// Outcome of classifying a term against the semantic model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermFinding {
    Unknown,
    /// Known to the model, but not of the kind the context requires.
    WrongKind,
    Abstract,
    Mixin,
    Deprecated,
    NonCanonical,
}

struct TermCodes {
    unknown: ErrorCode,
    wrong_kind: Option<ErrorCode>,
    abstract_term: (ErrorCode, InfoCode),
    mixin: (ErrorCode, InfoCode),
    deprecated: WarningCode,
    non_canonical: Option<WarningCode>,
}

impl TermContext {
    /// Code for a finding in this context. Abstract and mixin findings are
    /// errors when `strict`, informational otherwise.
    pub fn code(self, finding: TermFinding, strict: bool) -> Option<Code> {
        let codes = self.codes();
        let relaxed = |(error, info): (ErrorCode, InfoCode)| {
            if strict { Code::Error(error) } else { Code::Info(info) }
        };
        match finding {
            TermFinding::Unknown => Some(Code::Error(codes.unknown)),
            TermFinding::WrongKind => codes.wrong_kind.map(Code::Error),
            TermFinding::Abstract => Some(relaxed(codes.abstract_term)),
            TermFinding::Mixin => Some(relaxed(codes.mixin)),
            TermFinding::Deprecated => Some(Code::Warning(codes.deprecated)),
            TermFinding::NonCanonical => codes.non_canonical.map(Code::Warning),
        }
    }

    /// Name of the parameter carrying the owning node or edge.
    pub fn owner_parameter(self) -> &'static str {
        match self {
            TermContext::Category(_) => "node_id",
            TermContext::Predicate(_) | TermContext::AttributeType => "edge_id",
        }
    }

    fn codes(self) -> TermCodes {
        match self {
            TermContext::Category(GraphType::QueryGraph) => TermCodes {
                unknown: ErrorCode::QueryGraphNodeCategoryUnknown,
                wrong_kind: Some(ErrorCode::QueryGraphNodeCategoryNotACategory),
                abstract_term: (
                    ErrorCode::QueryGraphNodeCategoryAbstract,
                    InfoCode::QueryGraphNodeCategoryAbstract,
                ),
                mixin: (
                    ErrorCode::QueryGraphNodeCategoryMixin,
                    InfoCode::QueryGraphNodeCategoryMixin,
                ),
                deprecated: WarningCode::QueryGraphNodeCategoryDeprecated,
                non_canonical: None,
            },
            TermContext::Category(GraphType::KnowledgeGraph) => TermCodes {
                unknown: ErrorCode::KnowledgeGraphNodeCategoryUnknown,
                wrong_kind: Some(ErrorCode::KnowledgeGraphNodeCategoryNotACategory),
                abstract_term: (
                    ErrorCode::KnowledgeGraphNodeCategoryAbstract,
                    InfoCode::KnowledgeGraphNodeCategoryAbstract,
                ),
                mixin: (
                    ErrorCode::KnowledgeGraphNodeCategoryMixin,
                    InfoCode::KnowledgeGraphNodeCategoryMixin,
                ),
                deprecated: WarningCode::KnowledgeGraphNodeCategoryDeprecated,
                non_canonical: None,
            },
            TermContext::Category(GraphType::InputEdge) => TermCodes {
                unknown: ErrorCode::InputEdgeNodeCategoryUnknown,
                wrong_kind: Some(ErrorCode::InputEdgeNodeCategoryNotACategory),
                abstract_term: (
                    ErrorCode::InputEdgeNodeCategoryAbstract,
                    InfoCode::InputEdgeNodeCategoryAbstract,
                ),
                mixin: (
                    ErrorCode::InputEdgeNodeCategoryMixin,
                    InfoCode::InputEdgeNodeCategoryMixin,
                ),
                deprecated: WarningCode::InputEdgeNodeCategoryDeprecated,
                non_canonical: None,
            },
            TermContext::Predicate(GraphType::QueryGraph) => TermCodes {
                unknown: ErrorCode::QueryGraphEdgePredicateUnknown,
                wrong_kind: Some(ErrorCode::QueryGraphEdgePredicateInvalid),
                abstract_term: (
                    ErrorCode::QueryGraphEdgePredicateAbstract,
                    InfoCode::QueryGraphEdgePredicateAbstract,
                ),
                mixin: (
                    ErrorCode::QueryGraphEdgePredicateMixin,
                    InfoCode::QueryGraphEdgePredicateMixin,
                ),
                deprecated: WarningCode::QueryGraphEdgePredicateDeprecated,
                non_canonical: Some(WarningCode::QueryGraphEdgePredicateNonCanonical),
            },
            TermContext::Predicate(GraphType::KnowledgeGraph) => TermCodes {
                unknown: ErrorCode::KnowledgeGraphEdgePredicateUnknown,
                wrong_kind: Some(ErrorCode::KnowledgeGraphEdgePredicateInvalid),
                abstract_term: (
                    ErrorCode::KnowledgeGraphEdgePredicateAbstract,
                    InfoCode::KnowledgeGraphEdgePredicateAbstract,
                ),
                mixin: (
                    ErrorCode::KnowledgeGraphEdgePredicateMixin,
                    InfoCode::KnowledgeGraphEdgePredicateMixin,
                ),
                deprecated: WarningCode::KnowledgeGraphEdgePredicateDeprecated,
                non_canonical: Some(WarningCode::KnowledgeGraphEdgePredicateNonCanonical),
            },
            TermContext::Predicate(GraphType::InputEdge) => TermCodes {
                unknown: ErrorCode::InputEdgePredicateUnknown,
                wrong_kind: Some(ErrorCode::InputEdgePredicateInvalid),
                abstract_term: (
                    ErrorCode::InputEdgePredicateAbstract,
                    InfoCode::InputEdgePredicateAbstract,
                ),
                mixin: (
                    ErrorCode::InputEdgePredicateMixin,
                    InfoCode::InputEdgePredicateMixin,
                ),
                deprecated: WarningCode::InputEdgePredicateDeprecated,
                non_canonical: Some(WarningCode::InputEdgePredicateNonCanonical),
            },
            TermContext::AttributeType => TermCodes {
                unknown: ErrorCode::KnowledgeGraphEdgeAttributeTypeIdUnknown,
                wrong_kind: None,
                abstract_term: (
                    ErrorCode::KnowledgeGraphEdgeAttributeTypeIdAbstract,
                    InfoCode::KnowledgeGraphEdgeAttributeTypeIdAbstract,
                ),
                mixin: (
                    ErrorCode::KnowledgeGraphEdgeAttributeTypeIdMixin,
                    InfoCode::KnowledgeGraphEdgeAttributeTypeIdMixin,
                ),
                deprecated: WarningCode::KnowledgeGraphEdgeAttributeTypeIdDeprecated,
                non_canonical: None,
            },
        }
    }
}
