//! Validation Reporter: a deduplicating accumulator of validation findings.
//!
//! Findings are stored as `severity → code → scope → identifier → parameters`.
//! A finding is identified by `(code, scope, identifier)`; reporting it again
//! is a no-op and the parameters recorded first are kept.
//!
//! One reporter is created per validation call. Sub-checks may use child
//! reporters (see [`ValidationReporter::child`]) that are folded back with
//! [`ValidationReporter::merge`].

use crate::codes::Code;
use crate::enums::Severity;
use crate::error::RegistryError;
use crate::registry::{CodeRegistry, code_label};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Scope of findings not tied to a provenance trail.
pub const GLOBAL_SCOPE: &str = "global";

/// Named parameters of one finding, excluding the identifier.
pub type Params = Map<String, Value>;
pub type IdentifierMessages = BTreeMap<String, Option<Params>>;
pub type ScopedMessages = BTreeMap<String, IdentifierMessages>;
pub type CodeMessages = BTreeMap<String, ScopedMessages>;
pub type MessageCatalog = BTreeMap<Severity, CodeMessages>;

/// Build a [`Params`] map from `(name, value)` pairs.
pub fn params<K, I>(pairs: I) -> Params
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Options for [`ValidationReporter::dump`].
#[derive(Clone, Debug)]
pub struct DumpOptions {
    /// Report title; `None` omits the title block.
    pub title: Option<String>,
    /// Drop the title block and blank separator lines.
    pub compact: bool,
    /// Maximum identifiers listed per code and scope; `0` lists all.
    pub id_rows: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            title: Some("Validation Report".to_string()),
            compact: false,
            id_rows: 0,
        }
    }
}

impl DumpOptions {
    pub fn compact() -> Self {
        DumpOptions {
            title: None,
            compact: true,
            id_rows: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ValidationReporter {
    registry: Arc<CodeRegistry>,
    scope: Option<String>,
    messages: MessageCatalog,
}

impl ValidationReporter {
    pub fn new(registry: Arc<CodeRegistry>) -> Self {
        ValidationReporter {
            registry,
            scope: None,
            messages: MessageCatalog::new(),
        }
    }

    /// A reporter whose findings default to `scope` instead of the global scope.
    pub fn with_scope(registry: Arc<CodeRegistry>, scope: impl Into<String>) -> Self {
        ValidationReporter {
            registry,
            scope: Some(scope.into()),
            messages: MessageCatalog::new(),
        }
    }

    /// An empty reporter sharing this reporter's registry.
    pub fn child(&self, scope: Option<&str>) -> Self {
        ValidationReporter {
            registry: Arc::clone(&self.registry),
            scope: scope.map(str::to_string),
            messages: MessageCatalog::new(),
        }
    }

    pub fn registry(&self) -> &Arc<CodeRegistry> {
        &self.registry
    }

    /// Default scope of findings reported without an explicit one.
    pub fn scope(&self) -> &str {
        self.scope.as_deref().unwrap_or(GLOBAL_SCOPE)
    }

    // ─── Mutation ───────────────────────────────────────────────────────

    /// Record a finding in the reporter's default scope.
    ///
    /// # Panics
    ///
    /// If the registry has no entry for `code`, or a declared parameter
    /// (including `identifier`) is not supplied.
    pub fn report(&mut self, code: impl Into<Code>, identifier: Option<&str>, params: Params) {
        self.report_scoped(code, None, identifier, params);
    }

    /// Record a finding under `scope` (the default scope when `None`).
    ///
    /// # Panics
    ///
    /// As for [`report`](Self::report).
    pub fn report_scoped(
        &mut self,
        code: impl Into<Code>,
        scope: Option<&str>,
        identifier: Option<&str>,
        params: Params,
    ) {
        let code = code.into();
        if let Err(e) = self.try_report(code.path(), scope, identifier, params) {
            panic!("invalid report of {code}: {e}");
        }
    }

    /// Record a finding by code path. Returns `true` when the finding is new.
    pub fn try_report(
        &mut self,
        code: &str,
        scope: Option<&str>,
        identifier: Option<&str>,
        mut params: Params,
    ) -> Result<bool, RegistryError> {
        let entry = self.registry.lookup(code)?;
        if entry.takes_identifier() && identifier.is_none() {
            return Err(RegistryError::MissingParameter {
                code: code.to_string(),
                parameter: "identifier".to_string(),
            });
        }
        for name in entry.extra_parameters() {
            if !params.contains_key(name) {
                return Err(RegistryError::MissingParameter {
                    code: code.to_string(),
                    parameter: name.to_string(),
                });
            }
        }
        params.remove("identifier");

        let severity = entry.severity;
        let takes_identifier = entry.takes_identifier();
        let scope = scope.unwrap_or(self.scope()).to_string();
        let identifiers = self
            .messages
            .entry(severity)
            .or_default()
            .entry(code.to_string())
            .or_default();

        if !takes_identifier {
            return Ok(identifiers.insert(scope, IdentifierMessages::new()).is_none());
        }
        let by_identifier = identifiers.entry(scope).or_default();
        let Some(identifier) = identifier else {
            return Ok(false);
        };
        if by_identifier.contains_key(identifier) {
            return Ok(false);
        }
        let stored = if params.is_empty() { None } else { Some(params) };
        by_identifier.insert(identifier.to_string(), stored);
        Ok(true)
    }

    /// Fold another reporter's findings into this one, as if they had been
    /// reported here. Findings `other` holds in the global scope move to
    /// `other`'s default scope, if it has one.
    pub fn merge(&mut self, other: &ValidationReporter) {
        for (severity, codes) in &other.messages {
            let target_codes = self.messages.entry(*severity).or_default();
            for (code, scopes) in codes {
                let target_scopes = target_codes.entry(code.clone()).or_default();
                for (scope, identifiers) in scopes {
                    let scope = match (&other.scope, scope.as_str()) {
                        (Some(child_scope), GLOBAL_SCOPE) => child_scope.clone(),
                        _ => scope.clone(),
                    };
                    let target = target_scopes.entry(scope).or_default();
                    for (identifier, params) in identifiers {
                        target
                            .entry(identifier.clone())
                            .or_insert_with(|| params.clone());
                    }
                }
            }
        }
    }

    // ─── Queries ────────────────────────────────────────────────────────

    pub fn has_code(&self, code: impl Into<Code>) -> bool {
        let code = code.into();
        self.messages
            .get(&code.severity())
            .is_some_and(|codes| codes.contains_key(code.path()))
    }

    pub fn has_any(&self, severity: Severity) -> bool {
        self.messages.get(&severity).is_some_and(|codes| !codes.is_empty())
    }

    pub fn has_messages(&self) -> bool {
        Severity::ALL.iter().any(|s| self.has_any(*s))
    }

    pub fn is_empty(&self) -> bool {
        !self.has_messages()
    }

    /// `true` when nothing of severity error or worse was reported.
    pub fn is_compliant(&self) -> bool {
        !self.has_any(Severity::Critical) && !self.has_any(Severity::Error)
    }

    pub fn messages_of(&self, severity: Severity) -> Option<&CodeMessages> {
        self.messages.get(&severity).filter(|codes| !codes.is_empty())
    }

    /// Findings recorded for one code, by scope.
    pub fn scopes_of(&self, code: impl Into<Code>) -> Option<&ScopedMessages> {
        let code = code.into();
        self.messages.get(&code.severity())?.get(code.path())
    }

    /// Identifiers recorded for one code in one scope.
    pub fn identifiers_of(&self, code: impl Into<Code>, scope: &str) -> Vec<&str> {
        self.scopes_of(code)
            .and_then(|scopes| scopes.get(scope))
            .map(|ids| ids.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn get_messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Number of distinct findings of a severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .get(&severity)
            .map(|codes| {
                codes
                    .values()
                    .flat_map(|scopes| scopes.values())
                    .map(|ids| ids.len().max(1))
                    .sum()
            })
            .unwrap_or(0)
    }

    // ─── Rendering ──────────────────────────────────────────────────────

    /// The nested mapping as JSON. Every severity is present; codes without
    /// an identifier render their scope as `null`.
    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        for severity in Severity::ALL {
            let mut codes_out = Map::new();
            if let Some(codes) = self.messages.get(&severity) {
                for (code, scopes) in codes {
                    let mut scopes_out = Map::new();
                    for (scope, identifiers) in scopes {
                        let rendered = if identifiers.is_empty() {
                            Value::Null
                        } else {
                            Value::Object(
                                identifiers
                                    .iter()
                                    .map(|(id, p)| {
                                        (id.clone(), p.clone().map(Value::Object).unwrap_or(Value::Null))
                                    })
                                    .collect(),
                            )
                        };
                        scopes_out.insert(scope.clone(), rendered);
                    }
                    codes_out.insert(code.clone(), Value::Object(scopes_out));
                }
            }
            root.insert(severity_key(severity).to_string(), Value::Object(codes_out));
        }
        Value::Object(root)
    }

    /// One line per finding: `ERROR - Knowledge Graph Node Category: <message>`.
    pub fn display_messages(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.for_each_rendered(|code, scope, message| {
            let prefix = if scope == GLOBAL_SCOPE {
                String::new()
            } else {
                format!("[{scope}] ")
            };
            lines.push(format!("{prefix}{}: {message}", code_label(code)));
        });
        lines
    }

    /// Human-readable report grouped by severity, then code.
    pub fn dump(&self, out: &mut impl fmt::Write, options: &DumpOptions) -> fmt::Result {
        if !options.compact
            && let Some(title) = &options.title
        {
            writeln!(out, "{title}")?;
            writeln!(out, "{}", "=".repeat(title.chars().count()))?;
            writeln!(out, "trapi-validator {}", env!("CARGO_PKG_VERSION"))?;
            writeln!(out)?;
        }

        if !self.has_messages() {
            return writeln!(out, "No validation messages reported.");
        }

        for severity in Severity::ALL {
            let Some(codes) = self.messages_of(severity) else {
                continue;
            };
            writeln!(out, "{}:", severity.heading())?;
            if !options.compact {
                writeln!(out)?;
            }
            for (code, scopes) in codes {
                writeln!(out, "  {code}")?;
                for (scope, identifiers) in scopes {
                    let prefix = if scope == GLOBAL_SCOPE {
                        String::new()
                    } else {
                        format!("[{scope}] ")
                    };
                    if identifiers.is_empty() {
                        let message = self.registry.render(code, None, None).unwrap_or_default();
                        writeln!(out, "    - {prefix}{message}")?;
                        continue;
                    }
                    let limit = if options.id_rows == 0 {
                        identifiers.len()
                    } else {
                        options.id_rows
                    };
                    for (identifier, params) in identifiers.iter().take(limit) {
                        let message = self
                            .registry
                            .render(code, Some(identifier), params.as_ref())
                            .unwrap_or_default();
                        writeln!(out, "    - {prefix}{message}")?;
                    }
                    if identifiers.len() > limit {
                        writeln!(
                            out,
                            "    ... {} more identifiers for {code}",
                            identifiers.len() - limit
                        )?;
                    }
                }
            }
            if !options.compact {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// [`dump`](Self::dump) into a string, trimmed of trailing whitespace.
    pub fn dumps(&self, options: &DumpOptions) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.dump(&mut out, options);
        out.trim_end().to_string()
    }

    fn for_each_rendered(&self, mut f: impl FnMut(&str, &str, String)) {
        for codes in self.messages.values() {
            for (code, scopes) in codes {
                for (scope, identifiers) in scopes {
                    if identifiers.is_empty() {
                        let message = self.registry.render(code, None, None).unwrap_or_default();
                        f(code, scope, message);
                    }
                    for (identifier, params) in identifiers {
                        let message = self
                            .registry
                            .render(code, Some(identifier), params.as_ref())
                            .unwrap_or_default();
                        f(code, scope, message);
                    }
                }
            }
        }
    }
}

/// Key of a severity in the rendered mapping.
pub fn severity_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Information => "information",
        Severity::Skipped => "skipped",
    }
}

impl fmt::Display for ValidationReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.dump(&mut out, &DumpOptions::compact())?;
        f.write_str(out.trim_end())
    }
}
