use crate::error::{ParseError, ParseErrorKind};
use crate::types::{InputEdge, KnowledgeGraph, QueryGraph, TrapiResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Read a JSON or YAML document into an untyped value.
///
/// JSON is tried first; anything that is not JSON is read as YAML.
pub fn parse_document(input: &str) -> Result<Value, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
        });
    }

    if let Ok(value) = serde_json::from_str::<Value>(input) {
        return Ok(value);
    }

    serde_saphyr::from_str::<Value>(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
        path: None,
    })
}

/// Read one TRAPI component (`QueryGraph`, `KnowledgeGraph`, ...) into its typed form.
pub fn parse_component<T: DeserializeOwned>(value: &Value, component: &str) -> Result<T, ParseError> {
    if !value.is_object() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: format!("{component} must be an object"),
            path: Some(component.to_string()),
        });
    }
    T::deserialize(value).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_json_error(&msg),
            message: msg,
            path: Some(component.to_string()),
        }
    })
}

pub fn parse_query_graph(value: &Value) -> Result<QueryGraph, ParseError> {
    parse_component(value, "QueryGraph")
}

pub fn parse_knowledge_graph(value: &Value) -> Result<KnowledgeGraph, ParseError> {
    parse_component(value, "KnowledgeGraph")
}

pub fn parse_result(value: &Value) -> Result<TrapiResult, ParseError> {
    parse_component(value, "Result")
}

pub fn parse_input_edge(value: &Value) -> Result<InputEdge, ParseError> {
    parse_component(value, "InputEdge")
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("missing field") {
        ParseErrorKind::MissingField
    } else if lower.contains("invalid type") || lower.contains("invalid value") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
