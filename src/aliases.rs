//! Identifier alias collaborator used by result-binding checks.

use std::collections::HashMap;

/// The equivalence set of an identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasSet {
    pub preferred: String,
    pub equivalents: Vec<String>,
}

impl AliasSet {
    pub fn contains(&self, curie: &str) -> bool {
        self.preferred == curie || self.equivalents.iter().any(|e| e == curie)
    }
}

/// Resolves a CURIE to its equivalence set, e.g. through a node normalization service.
pub trait AliasResolver: Send + Sync {
    fn aliases(&self, curie: &str) -> Option<AliasSet>;
}

/// Fixed equivalence sets.
#[derive(Clone, Debug, Default)]
pub struct StaticAliases {
    sets: Vec<AliasSet>,
    index: HashMap<String, usize>,
}

impl StaticAliases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(mut self, preferred: &str, equivalents: &[&str]) -> Self {
        let set = AliasSet {
            preferred: preferred.to_string(),
            equivalents: equivalents.iter().map(|e| e.to_string()).collect(),
        };
        let slot = self.sets.len();
        self.index.insert(set.preferred.clone(), slot);
        for e in &set.equivalents {
            self.index.insert(e.clone(), slot);
        }
        self.sets.push(set);
        self
    }
}

impl AliasResolver for StaticAliases {
    fn aliases(&self, curie: &str) -> Option<AliasSet> {
        self.index.get(curie).map(|i| self.sets[*i].clone())
    }
}

/// Does `bound` denote one of `query_ids`, directly or through aliases?
pub fn matches_query_ids(bound: &str, query_ids: &[String], resolver: Option<&dyn AliasResolver>) -> bool {
    if query_ids.iter().any(|q| q == bound) {
        return true;
    }
    let Some(resolver) = resolver else {
        return false;
    };
    match resolver.aliases(bound) {
        Some(set) => query_ids.iter().any(|q| set.contains(q)),
        None => false,
    }
}
