//! Knowledge graph edge provenance: retrieval sources, infores identifiers,
//! and the expected ARA/KP provenance of a target deployment.

use crate::codes::{ErrorCode, WarningCode};
use crate::config::TargetProvenance;
use crate::primitives::{curie_prefix, is_curie, local_name};
use crate::report::{Params, params};
use crate::types::RetrievalSource;
use crate::validate::SemanticValidator;
use serde_json::json;

pub const INFORES_PREFIX: &str = "infores";
pub const PRIMARY_KNOWLEDGE_SOURCE: &str = "primary_knowledge_source";

/// Trail separator, e.g. `infores:molepro -> infores:arax`.
pub const TRAIL_SEPARATOR: &str = " -> ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InforesField {
    ResourceId,
    UpstreamResourceIds,
}

impl InforesField {
    fn codes(self) -> (ErrorCode, ErrorCode, ErrorCode) {
        match self {
            InforesField::ResourceId => (
                ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesNotCurie,
                ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesInvalid,
                ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdInforesUnknown,
            ),
            InforesField::UpstreamResourceIds => (
                ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesNotCurie,
                ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesInvalid,
                ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceUpstreamResourceIdsInforesUnknown,
            ),
        }
    }
}

/// A resource role without any `biolink:` prefix.
pub fn normalize_role(role: &str) -> &str {
    local_name(role.trim())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_primary(source: &RetrievalSource) -> bool {
    non_empty(source.resource_role.as_deref()).is_some_and(|r| normalize_role(r) == PRIMARY_KNOWLEDGE_SOURCE)
}

/// The chain of resources an edge passed through, from its primary source
/// down to the resource that delivered it: each next hop is a source listing
/// the current one among its upstream resources.
pub fn source_trail(sources: &[RetrievalSource]) -> Option<String> {
    let primary = sources
        .iter()
        .filter(|s| is_primary(s))
        .find_map(|s| non_empty(s.resource_id.as_deref()))?;

    let mut trail: Vec<&str> = vec![primary];
    let mut current = primary;
    while let Some(next) = sources.iter().find_map(|s| {
        let id = non_empty(s.resource_id.as_deref())?;
        let upstream = s.upstream_resource_ids.as_deref()?;
        (upstream.iter().any(|u| u.trim() == current) && !trail.contains(&id)).then_some(id)
    }) {
        trail.push(next);
        current = next;
    }
    Some(trail.join(TRAIL_SEPARATOR))
}

impl SemanticValidator<'_> {
    /// Check an edge's retrieval sources: presence, identifiers, roles, a
    /// single primary source, and the configured target provenance.
    pub fn validate_sources(&mut self, edge_id: &str, sources: Option<&[RetrievalSource]>) {
        let sources = match sources {
            None => {
                self.report(ErrorCode::KnowledgeGraphEdgeSourcesMissing, Some(edge_id), Params::new());
                return;
            }
            Some([]) => {
                self.report(ErrorCode::KnowledgeGraphEdgeSourcesEmpty, Some(edge_id), Params::new());
                return;
            }
            Some(sources) => sources,
        };

        let mut primaries: Vec<&str> = Vec::new();
        for source in sources {
            let Some(resource_id) = non_empty(source.resource_id.as_deref()) else {
                self.report(
                    ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceIdEmpty,
                    Some(edge_id),
                    Params::new(),
                );
                continue;
            };
            self.validate_infores(resource_id, InforesField::ResourceId, edge_id);

            for upstream in source.upstream_resource_ids.iter().flatten() {
                self.validate_infores(upstream.trim(), InforesField::UpstreamResourceIds, edge_id);
            }

            match non_empty(source.resource_role.as_deref()) {
                None => self.report(
                    ErrorCode::KnowledgeGraphEdgeSourcesRetrievalSourceResourceRoleEmpty,
                    Some(resource_id),
                    params([("edge_id", json!(edge_id))]),
                ),
                Some(role) if normalize_role(role) == PRIMARY_KNOWLEDGE_SOURCE => primaries.push(resource_id),
                Some(_) => {}
            }
        }

        match primaries.len() {
            0 => self.report(
                ErrorCode::KnowledgeGraphEdgeProvenanceMissingPrimary,
                Some(edge_id),
                Params::new(),
            ),
            1 => {}
            _ => self.report(
                WarningCode::KnowledgeGraphEdgeProvenanceMultiplePrimary,
                Some(edge_id),
                params([("sources", json!(primaries))]),
            ),
        }

        if let Some(target) = self.config().target_provenance.clone() {
            self.validate_target_provenance(edge_id, sources, &target);
        }
    }

    fn validate_infores(&mut self, id: &str, field: InforesField, edge_id: &str) {
        let (not_curie, invalid, unknown) = field.codes();
        let code = if !is_curie(id) {
            not_curie
        } else if curie_prefix(id) != Some(INFORES_PREFIX) {
            invalid
        } else if !self.model().is_registered_infores(id) {
            unknown
        } else {
            return;
        };
        self.report(code, Some(id), params([("edge_id", json!(edge_id))]));
    }

    /// Is the ARA among the edge's sources, and the KP in its expected role?
    pub fn validate_target_provenance(&mut self, edge_id: &str, sources: &[RetrievalSource], target: &TargetProvenance) {
        let has_source = |id: &str, role: Option<&str>| {
            sources.iter().any(|s| {
                non_empty(s.resource_id.as_deref()) == Some(id)
                    && role.is_none_or(|r| {
                        non_empty(s.resource_role.as_deref()).is_some_and(|sr| normalize_role(sr) == r)
                    })
            })
        };

        if let Some(ara) = target.ara_infores()
            && !has_source(ara.as_str(), None)
        {
            self.report(
                WarningCode::KnowledgeGraphEdgeProvenanceAraMissing,
                Some(&ara),
                params([("edge_id", json!(edge_id))]),
            );
        }

        if let Some(kp) = target.kp_infores() {
            let role = target.kp_resource_role();
            if !has_source(kp.as_str(), Some(role.as_str())) {
                self.report(
                    WarningCode::KnowledgeGraphEdgeProvenanceKpMissing,
                    Some(&kp),
                    params([
                        ("kp_source_type", json!(target.kp_source_type())),
                        ("edge_id", json!(edge_id)),
                    ]),
                );
            }
        }
    }
}
