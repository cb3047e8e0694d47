//! Code Registry: the catalog of message templates behind every validation code.
//!
//! The catalog is a nested mapping whose leaf paths are the dotted code names.
//! A leaf carries `$message` (the template), optionally `$parameters` (named
//! template parameters, `identifier` first) and `$description`:
//!
//! ```yaml
//! error:
//!   knowledge_graph:
//!     node:
//!       category:
//!         missing:
//!           $message: "Knowledge graph node '{identifier}' has no categories"
//!           $parameters: [identifier]
//! ```
//!
//! The built-in catalog is embedded at compile time and parsed once per
//! process; [`CodeRegistry::from_yaml`] builds registries from fixture
//! catalogs. Registries are immutable after construction and shared via `Arc`.

use crate::enums::Severity;
use crate::error::RegistryError;
use crate::primitives::{render_template, template_placeholders};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

const BUILTIN_CATALOG: &str = include_str!("codes.yaml");

static BUILTIN: LazyLock<Arc<CodeRegistry>> = LazyLock::new(|| {
    let registry = CodeRegistry::from_yaml(BUILTIN_CATALOG)
        .unwrap_or_else(|e| panic!("built-in code catalog is malformed: {e}"));
    tracing::debug!(codes = registry.len(), "loaded built-in code catalog");
    Arc::new(registry)
});

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub code: String,
    pub severity: Severity,
    pub template: String,
    pub parameters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CodeEntry {
    /// Parameters other than `identifier`.
    pub fn extra_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(String::as_str).filter(|p| *p != "identifier")
    }

    pub fn takes_identifier(&self) -> bool {
        self.parameters.first().is_some_and(|p| p == "identifier")
    }
}

/// Immutable lookup table from code path to [`CodeEntry`].
#[derive(Clone, Debug, Default)]
pub struct CodeRegistry {
    entries: BTreeMap<String, CodeEntry>,
}

impl CodeRegistry {
    /// The registry built from the embedded catalog.
    ///
    /// # Panics
    ///
    /// On first use, if the embedded catalog is malformed.
    pub fn builtin() -> Arc<CodeRegistry> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_yaml(input: &str) -> Result<Self, RegistryError> {
        let value: Value =
            serde_saphyr::from_str(input).map_err(|e| RegistryError::Syntax(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, RegistryError> {
        let Some(root) = value.as_object() else {
            return Err(RegistryError::Syntax("catalog root must be a mapping".to_string()));
        };
        let mut entries = BTreeMap::new();
        flatten("", root, &mut entries)?;
        Ok(CodeRegistry { entries })
    }

    pub fn lookup(&self, code: &str) -> Result<&CodeEntry, RegistryError> {
        self.entries
            .get(code)
            .ok_or_else(|| RegistryError::UnknownCode(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Render the template of `code` with the given identifier and parameters.
    pub fn render(
        &self,
        code: &str,
        identifier: Option<&str>,
        params: Option<&Map<String, Value>>,
    ) -> Result<String, RegistryError> {
        let entry = self.lookup(code)?;
        Ok(render_template(&entry.template, identifier, params))
    }

    /// Long-form description of `code`, if the catalog has one.
    pub fn description(&self, code: &str) -> Result<Option<&str>, RegistryError> {
        Ok(self.lookup(code)?.description.as_deref())
    }

    /// Rendered message prefixed with its human label, e.g.
    /// `ERROR - Knowledge Graph Nodes: No nodes found in the knowledge graph`.
    pub fn display(
        &self,
        code: &str,
        identifier: Option<&str>,
        params: Option<&Map<String, Value>>,
    ) -> Result<String, RegistryError> {
        let message = self.render(code, identifier, params)?;
        Ok(format!("{}: {}", code_label(code), message))
    }

    /// Code paths of one severity tier, sorted.
    pub fn all_codes_of_severity(&self, severity: Severity) -> Vec<&str> {
        self.entries
            .values()
            .filter(|e| e.severity == severity)
            .map(|e| e.code.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Human label for a code: upper-cased tier, then the context segments in
/// title case. The last segment is dropped unless it is the only context.
pub fn code_label(code: &str) -> String {
    let segments: Vec<&str> = code.split('.').collect();
    let Some((tier, rest)) = segments.split_first() else {
        return String::new();
    };
    let context = if rest.len() > 1 { &rest[..rest.len() - 1] } else { rest };
    let words: Vec<String> = context
        .iter()
        .flat_map(|s| s.split('_'))
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect();
    format!("{} - {}", tier.to_uppercase(), words.join(" "))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─── Catalog flattening ─────────────────────────────────────────────────────

fn flatten(
    prefix: &str,
    node: &Map<String, Value>,
    out: &mut BTreeMap<String, CodeEntry>,
) -> Result<(), RegistryError> {
    for (key, child) in node {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let Some(child_map) = child.as_object() else {
            return Err(RegistryError::MissingMessage(path));
        };
        let has_definition = child_map.keys().any(|k| k.starts_with('$'));
        let has_children = child_map.keys().any(|k| !k.starts_with('$'));
        match (has_definition, has_children) {
            (true, true) => return Err(RegistryError::MixedNode(path)),
            (true, false) => {
                let entry = parse_entry(&path, child_map)?;
                if out.insert(path.clone(), entry).is_some() {
                    return Err(RegistryError::DuplicateCode(path));
                }
            }
            (false, true) => flatten(&path, child_map, out)?,
            (false, false) => return Err(RegistryError::MissingMessage(path)),
        }
    }
    Ok(())
}

fn parse_entry(path: &str, node: &Map<String, Value>) -> Result<CodeEntry, RegistryError> {
    let tier = path.split('.').next().unwrap_or_default();
    let severity =
        Severity::from_code_prefix(tier).ok_or_else(|| RegistryError::UnknownSeverity(path.to_string()))?;
    if !path.contains('.') {
        return Err(RegistryError::UnknownSeverity(path.to_string()));
    }

    let template = node
        .get("$message")
        .and_then(Value::as_str)
        .ok_or_else(|| RegistryError::MissingMessage(path.to_string()))?
        .to_string();

    let parameters: Vec<String> = match node.get("$parameters") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| RegistryError::Syntax(format!("{path}: parameter names must be strings")))
            })
            .collect::<Result<_, _>>()?,
        Some(_) => {
            return Err(RegistryError::Syntax(format!(
                "{path}: $parameters must be a list"
            )));
        }
    };

    if let Some(first) = parameters.first()
        && first != "identifier"
    {
        return Err(RegistryError::IdentifierNotFirst(path.to_string()));
    }
    for name in template_placeholders(&template) {
        if !parameters.iter().any(|p| p == name) {
            return Err(RegistryError::UndeclaredParameter {
                code: path.to_string(),
                parameter: name.to_string(),
            });
        }
    }

    Ok(CodeEntry {
        code: path.to_string(),
        severity,
        template,
        parameters,
        description: node.get("$description").and_then(Value::as_str).map(str::to_string),
    })
}
