//! Small shared helpers: CURIE handling, template rendering, value checks.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static CURIE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*:[^\s]+$").unwrap());

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Longest structural-error reason kept in a report entry.
pub const MAX_REASON_LENGTH: usize = 160;

pub const BIOLINK_PREFIX: &str = "biolink";

// ─── CURIEs ─────────────────────────────────────────────────────────────────

/// `prefix:local_id`, with a non-empty prefix and no whitespace.
pub fn is_curie(s: &str) -> bool {
    CURIE_RE.is_match(s)
}

/// The namespace of a CURIE, or `None` if `s` is not one.
pub fn curie_prefix(s: &str) -> Option<&str> {
    if !is_curie(s) {
        return None;
    }
    s.split_once(':').map(|(prefix, _)| prefix)
}

/// Strip a `biolink:` namespace, if any.
pub fn local_name(term: &str) -> &str {
    term.strip_prefix("biolink:").unwrap_or(term)
}

/// Add the `biolink:` namespace to a bare model term.
pub fn biolink_curie(term: &str) -> String {
    if term.contains(':') {
        term.to_string()
    } else {
        format!("{BIOLINK_PREFIX}:{term}")
    }
}

pub fn is_biolink_curie(s: &str) -> bool {
    curie_prefix(s) == Some(BIOLINK_PREFIX)
}

// ─── Templates ──────────────────────────────────────────────────────────────

/// Named placeholders of a message template, in order of first use.
pub fn template_placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for cap in PLACEHOLDER_RE.captures_iter(template) {
        if let Some(m) = cap.get(1)
            && !names.contains(&m.as_str())
        {
            names.push(m.as_str());
        }
    }
    names
}

/// Substitute `{name}` placeholders. Unknown placeholders are left as written.
pub fn render_template(template: &str, identifier: Option<&str>, params: Option<&Map<String, Value>>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            if name == "identifier"
                && let Some(id) = identifier
            {
                return id.to_string();
            }
            match params.and_then(|p| p.get(name)) {
                Some(value) => display_value(value),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Human-readable rendering of a parameter value.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Shorten a schema-engine message to at most [`MAX_REASON_LENGTH`] characters,
/// keeping its head and tail.
pub fn truncate_reason(reason: &str) -> String {
    let chars: Vec<char> = reason.chars().collect();
    if chars.len() <= MAX_REASON_LENGTH {
        return reason.to_string();
    }
    let separator = " ... ";
    let head = 50;
    let tail = MAX_REASON_LENGTH - head - separator.len();
    let mut out: String = chars[..head].iter().collect();
    out.push_str(separator);
    out.extend(&chars[chars.len() - tail..]);
    out
}

// ─── Values ─────────────────────────────────────────────────────────────────

/// Attribute values that carry no information. Booleans and numbers never do.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) | Value::Number(_) => false,
        Value::String(s) => {
            let s = s.trim();
            s.is_empty() || matches!(s.to_ascii_uppercase().as_str(), "N/A" | "NONE" | "NULL")
        }
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
