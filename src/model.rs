//! Semantic model collaborator: the Biolink Model as seen by the rule engine.
//!
//! The rule engine only talks to [`BiolinkModel`]. A full model toolkit can
//! implement it outside the crate; [`InMemoryModel`] implements it over a
//! compact YAML description of the elements a deployment cares about:
//!
//! ```yaml
//! version: 4.2.0
//! elements:
//!   - name: biolink:Gene
//!     kind: category
//!     parent: biolink:BiologicalEntity
//!     id_prefixes: [NCBIGene, ENSEMBL, HGNC]
//!   - name: biolink:related_to_at_instance_level
//!     kind: predicate
//!     mixin: true
//! ```

use crate::enums::ElementKind;
use crate::error::ModelError;
use crate::primitives::{biolink_curie, local_name};
use crate::versioning::ConcreteVersion;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::Arc;

/// What the model knows about one element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// CURIE of the element, e.g. `biolink:Gene`.
    pub name: String,
    pub kind: ElementKind,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "mixin")]
    pub is_mixin: bool,
    #[serde(default, rename = "deprecated")]
    pub is_deprecated: bool,
    #[serde(default = "canonical_by_default", rename = "canonical")]
    pub is_canonical: bool,
    #[serde(default)]
    pub id_prefixes: Vec<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default, rename = "association_slot")]
    pub is_association_slot: bool,
    #[serde(default)]
    pub inverse: Option<String>,
    /// Enumerated values of a slot or qualifier's range.
    #[serde(default)]
    pub permissible_values: Vec<String>,
}

fn canonical_by_default() -> bool {
    true
}

impl ElementInfo {
    /// Neither abstract nor a mixin.
    pub fn is_concrete(&self) -> bool {
        !self.is_abstract && !self.is_mixin
    }
}

/// A Biolink Model release.
///
/// Terms may be given with or without the `biolink:` prefix.
pub trait BiolinkModel: Send + Sync {
    fn version(&self) -> &str;

    fn get_element(&self, term: &str) -> Option<ElementInfo>;

    /// Elements whose `parent` chain includes `term`.
    fn descendants(&self, term: &str) -> Vec<String>;

    /// Is `prefix` an id prefix of any model class?
    fn is_known_prefix(&self, prefix: &str) -> bool;

    fn is_category(&self, term: &str) -> bool {
        self.get_element(term).is_some_and(|e| e.kind == ElementKind::Category)
    }

    fn is_predicate(&self, term: &str) -> bool {
        self.get_element(term).is_some_and(|e| e.kind == ElementKind::Predicate)
    }

    fn is_qualifier(&self, term: &str) -> bool {
        self.get_element(term).is_some_and(|e| e.kind == ElementKind::Qualifier)
    }

    fn is_association_slot(&self, term: &str) -> bool {
        self.get_element(term).is_some_and(|e| e.is_association_slot)
    }

    fn get_inverse_predicate(&self, term: &str) -> Option<String> {
        self.get_element(term).and_then(|e| e.inverse)
    }

    /// Parent chain of `term`, nearest first.
    fn ancestors(&self, term: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let mut current = self.get_element(term).and_then(|e| e.parent);
        while let Some(parent) = current {
            if out.contains(&parent) {
                break;
            }
            current = self.get_element(&parent).and_then(|e| e.parent);
            out.push(parent);
        }
        out
    }

    /// Enumerated values of a slot, if its range is an enumeration.
    fn permissible_values(&self, slot: &str) -> Option<Vec<String>> {
        self.get_element(slot)
            .map(|e| e.permissible_values)
            .filter(|v| !v.is_empty())
    }

    fn is_registered_infores(&self, _infores: &str) -> bool {
        true
    }

    /// Association classes matching an edge's categories and predicates.
    fn get_associations(
        &self,
        _subject_categories: &[String],
        _predicates: &[String],
        _object_categories: &[String],
    ) -> Vec<String> {
        Vec::new()
    }

    /// Can `value` be resolved in the range of qualifier `qualifier_type_id`?
    ///
    /// Best effort: a value is accepted when it is one of the qualifier's
    /// enumerated values, a model element, or the qualifier has no
    /// enumerated range at all.
    fn validate_qualifier(&self, qualifier_type_id: &str, value: &str, _associations: &[String]) -> bool {
        match self.permissible_values(qualifier_type_id) {
            Some(values) => {
                values.iter().any(|v| local_name(v) == local_name(value)) || self.get_element(value).is_some()
            }
            None => true,
        }
    }
}

/// Supplies the model for a resolved semantic version.
pub trait ModelProvider: Send + Sync {
    fn model(&self, version: &ConcreteVersion) -> Result<Arc<dyn BiolinkModel>, ModelError>;
}

// ─── In-memory model ────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ModelDocument {
    version: String,
    #[serde(default)]
    elements: Vec<ElementInfo>,
    #[serde(default)]
    prefixes: Vec<String>,
    /// Registered infores identifiers; empty accepts any.
    #[serde(default)]
    infores: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct InMemoryModel {
    version: String,
    elements: HashMap<String, ElementInfo>,
    children: HashMap<String, Vec<String>>,
    prefixes: HashSet<String>,
    infores: HashSet<String>,
}

impl InMemoryModel {
    pub fn new(version: impl Into<String>, elements: impl IntoIterator<Item = ElementInfo>) -> Self {
        let mut model = InMemoryModel {
            version: version.into(),
            elements: HashMap::new(),
            children: HashMap::new(),
            prefixes: HashSet::new(),
            infores: HashSet::new(),
        };
        for element in elements {
            model.insert(element);
        }
        model
    }

    pub fn from_yaml(input: &str) -> Result<Self, ModelError> {
        let doc: ModelDocument =
            serde_saphyr::from_str(input).map_err(|e| ModelError::InvalidDocument(e.to_string()))?;
        let mut model = InMemoryModel::new(doc.version, doc.elements);
        model.prefixes.extend(doc.prefixes);
        model.infores.extend(doc.infores);
        Ok(model)
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&text)
    }

    fn insert(&mut self, mut element: ElementInfo) {
        element.name = biolink_curie(&element.name);
        if let Some(parent) = element.parent.take() {
            let parent = biolink_curie(&parent);
            self.children.entry(parent.clone()).or_default().push(element.name.clone());
            element.parent = Some(parent);
        }
        self.prefixes.extend(element.id_prefixes.iter().cloned());
        self.elements.insert(element.name.clone(), element);
    }
}

impl BiolinkModel for InMemoryModel {
    fn version(&self) -> &str {
        &self.version
    }

    fn get_element(&self, term: &str) -> Option<ElementInfo> {
        self.elements.get(&biolink_curie(term)).cloned()
    }

    fn descendants(&self, term: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::from([biolink_curie(term)]);
        while let Some(current) = queue.pop_front() {
            for child in self.children.get(&current).into_iter().flatten() {
                if !out.contains(child) {
                    out.push(child.clone());
                    queue.push_back(child.clone());
                }
            }
        }
        out
    }

    fn is_known_prefix(&self, prefix: &str) -> bool {
        prefix == "biolink" || self.prefixes.contains(prefix)
    }

    fn is_registered_infores(&self, infores: &str) -> bool {
        self.infores.is_empty() || self.infores.contains(infores)
    }
}

// ─── Providers ──────────────────────────────────────────────────────────────

/// Serves one model for every requested version.
#[derive(Clone)]
pub struct FixedModelProvider {
    model: Arc<dyn BiolinkModel>,
}

impl FixedModelProvider {
    pub fn new(model: Arc<dyn BiolinkModel>) -> Self {
        FixedModelProvider { model }
    }
}

impl ModelProvider for FixedModelProvider {
    fn model(&self, _version: &ConcreteVersion) -> Result<Arc<dyn BiolinkModel>, ModelError> {
        Ok(Arc::clone(&self.model))
    }
}

/// Serves models by resolved version. Local override versions are loaded
/// from their file.
#[derive(Clone, Default)]
pub struct VersionedModelProvider {
    models: HashMap<String, Arc<dyn BiolinkModel>>,
}

impl VersionedModelProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, version: impl Into<String>, model: Arc<dyn BiolinkModel>) -> Self {
        self.models.insert(version.into(), model);
        self
    }
}

impl ModelProvider for VersionedModelProvider {
    fn model(&self, version: &ConcreteVersion) -> Result<Arc<dyn BiolinkModel>, ModelError> {
        if let Some(path) = version.local_path() {
            return Ok(Arc::new(InMemoryModel::from_file(path)?));
        }
        self.models
            .get(&version.to_string())
            .cloned()
            .ok_or_else(|| ModelError::Unavailable(version.to_string()))
    }
}
