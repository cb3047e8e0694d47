//! Structural Validator: checks TRAPI components against the TRAPI OpenAPI schema.
//!
//! The OpenAPI document's `components.schemas` are turned into JSON Schema
//! (OpenAPI's `nullable` becomes an explicit `null` alternative) and each
//! component is compiled on first use with every other component reachable
//! under `#/components/schemas`, so `$ref`s resolve unchanged.

use crate::codes::CriticalCode;
use crate::error::{SchemaError, StructuralError};
use crate::primitives::truncate_reason;
use crate::report::{ValidationReporter, params};
use crate::versioning::ConcreteVersion;
use jsonschema::{Draft, Validator};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// The compiled-on-demand schema of one TRAPI release.
pub struct TrapiSchema {
    version: String,
    components: Map<String, Value>,
    compiled: Mutex<HashMap<String, Arc<Validator>>>,
}

impl TrapiSchema {
    /// Build from an OpenAPI document with `components.schemas`.
    pub fn from_openapi(version: impl Into<String>, openapi: &Value) -> Result<Self, SchemaError> {
        let Some(schemas) = openapi
            .pointer("/components/schemas")
            .and_then(Value::as_object)
        else {
            return Err(SchemaError::InvalidDocument(
                "missing components.schemas".to_string(),
            ));
        };
        let components = schemas
            .iter()
            .map(|(name, schema)| (name.clone(), fix_nullable(schema)))
            .collect();
        Ok(TrapiSchema {
            version: version.into(),
            components,
            compiled: Mutex::new(HashMap::new()),
        })
    }

    /// Build from OpenAPI text, JSON or YAML.
    pub fn from_text(version: impl Into<String>, input: &str) -> Result<Self, SchemaError> {
        let doc: Value = match serde_json::from_str(input) {
            Ok(doc) => doc,
            Err(_) => serde_saphyr::from_str(input)
                .map_err(|e| SchemaError::InvalidDocument(e.to_string()))?,
        };
        Self::from_openapi(version, &doc)
    }

    pub fn from_file(version: impl Into<String>, path: &Path) -> Result<Self, SchemaError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_text(version, &text)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn has_component(&self, component: &str) -> bool {
        self.components.contains_key(component)
    }

    /// Validate `instance` against one component. Reports the first violation.
    pub fn validate(&self, component: &str, instance: &Value) -> Result<(), StructuralError> {
        let validator = self.validator(component).map_err(|e| StructuralError {
            component: component.to_string(),
            path: String::new(),
            reason: e.to_string(),
        })?;
        match validator.iter_errors(instance).next() {
            None => Ok(()),
            Some(err) => Err(StructuralError {
                component: component.to_string(),
                path: err.instance_path.to_string(),
                reason: truncate_reason(&err.to_string()),
            }),
        }
    }

    fn validator(&self, component: &str) -> Result<Arc<Validator>, SchemaError> {
        let mut compiled = self.compiled.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(v) = compiled.get(component) {
            return Ok(Arc::clone(v));
        }
        let Some(root) = self.components.get(component) else {
            return Err(SchemaError::UnknownComponent(component.to_string()));
        };
        let mut schema = match root {
            Value::Object(map) => map.clone(),
            other => {
                return Err(SchemaError::Compile {
                    component: component.to_string(),
                    reason: format!("component schema is not an object: {other}"),
                });
            }
        };
        schema.insert(
            "components".to_string(),
            json!({ "schemas": Value::Object(self.components.clone()) }),
        );
        let validator = jsonschema::options()
            .with_draft(Draft::Draft4)
            .build(&Value::Object(schema))
            .map_err(|e| SchemaError::Compile {
                component: component.to_string(),
                reason: e.to_string(),
            })?;
        tracing::debug!(version = %self.version, component, "compiled component schema");
        let validator = Arc::new(validator);
        compiled.insert(component.to_string(), Arc::clone(&validator));
        Ok(validator)
    }
}

impl std::fmt::Debug for TrapiSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrapiSchema")
            .field("version", &self.version)
            .field("components", &self.components.len())
            .finish()
    }
}

/// Rewrite OpenAPI `nullable: true` into JSON Schema.
fn fix_nullable(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let mut out: Map<String, Value> = map
                .iter()
                .filter(|(k, _)| k.as_str() != "nullable")
                .map(|(k, v)| (k.clone(), fix_nullable(v)))
                .collect();
            if map.get("nullable") != Some(&Value::Bool(true)) {
                return Value::Object(out);
            }
            match out.get("type").cloned() {
                Some(Value::String(t)) => {
                    out.insert("type".to_string(), json!([t, "null"]));
                    if let Some(Value::Array(values)) = out.get_mut("enum")
                        && !values.contains(&Value::Null)
                    {
                        values.push(Value::Null);
                    }
                    Value::Object(out)
                }
                _ => json!({ "anyOf": [Value::Object(out), { "type": "null" }] }),
            }
        }
        Value::Array(items) => Value::Array(items.iter().map(fix_nullable).collect()),
        other => other.clone(),
    }
}

// ─── Providers ──────────────────────────────────────────────────────────────

/// Supplies the schema for a resolved structural version.
pub trait SchemaProvider: Send + Sync {
    fn schema(&self, version: &ConcreteVersion) -> Result<Arc<TrapiSchema>, SchemaError>;
}

/// Serves one schema for every requested version.
#[derive(Clone, Debug)]
pub struct FixedSchemaProvider {
    schema: Arc<TrapiSchema>,
}

impl FixedSchemaProvider {
    pub fn new(schema: Arc<TrapiSchema>) -> Self {
        FixedSchemaProvider { schema }
    }
}

impl SchemaProvider for FixedSchemaProvider {
    fn schema(&self, _version: &ConcreteVersion) -> Result<Arc<TrapiSchema>, SchemaError> {
        Ok(Arc::clone(&self.schema))
    }
}

/// Serves schemas by resolved version. Local override versions are loaded
/// from their file.
#[derive(Clone, Debug, Default)]
pub struct VersionedSchemaProvider {
    schemas: HashMap<String, Arc<TrapiSchema>>,
}

impl VersionedSchemaProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: Arc<TrapiSchema>) -> Self {
        self.schemas.insert(schema.version().to_string(), schema);
        self
    }
}

impl SchemaProvider for VersionedSchemaProvider {
    fn schema(&self, version: &ConcreteVersion) -> Result<Arc<TrapiSchema>, SchemaError> {
        if let Some(path) = version.local_path() {
            return Ok(Arc::new(TrapiSchema::from_file(version.to_string(), path)?));
        }
        self.schemas
            .get(&version.to_string())
            .cloned()
            .ok_or_else(|| SchemaError::Unavailable(version.to_string()))
    }
}

// ─── Validator ──────────────────────────────────────────────────────────────

/// Translates structural violations into `critical.trapi.validation` findings.
#[derive(Clone, Debug)]
pub struct StructuralValidator {
    schema: Arc<TrapiSchema>,
}

impl StructuralValidator {
    pub fn new(schema: Arc<TrapiSchema>) -> Self {
        StructuralValidator { schema }
    }

    pub fn has_component(&self, component: &str) -> bool {
        self.schema.has_component(component)
    }

    pub fn version(&self) -> &str {
        self.schema.version()
    }

    pub fn validate_component(&self, instance: &Value, component: &str) -> Result<(), StructuralError> {
        self.schema.validate(component, instance)
    }

    /// Validate and report. Returns `true` when `instance` conforms.
    pub fn check_component(&self, instance: &Value, component: &str, reporter: &mut ValidationReporter) -> bool {
        match self.validate_component(instance, component) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(component, path = %err.path, "structural validation failed");
                reporter.report(
                    CriticalCode::TrapiValidation,
                    Some(&err.component),
                    params([
                        ("version", json!(self.schema.version())),
                        ("path", json!(err.path)),
                        ("reason", json!(err.reason)),
                    ]),
                );
                false
            }
        }
    }
}
