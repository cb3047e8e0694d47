use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    MissingField,
}

/// Produced when a JSON or YAML document cannot be read into a typed structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// The code catalog is malformed, or a code is not in it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("code catalog could not be read: {0}")]
    Syntax(String),
    #[error("code '{0}' appears more than once in the catalog")]
    DuplicateCode(String),
    #[error("catalog entry '{0}' has no $message")]
    MissingMessage(String),
    #[error("catalog entry '{0}' declares parameters but the first one is not 'identifier'")]
    IdentifierNotFirst(String),
    #[error("catalog entry '{code}' uses undeclared parameter '{parameter}'")]
    UndeclaredParameter { code: String, parameter: String },
    #[error("catalog entry '{0}' does not start with a severity")]
    UnknownSeverity(String),
    #[error("catalog node '{0}' mixes a code definition with child codes")]
    MixedNode(String),
    #[error("unknown validation code '{0}'")]
    UnknownCode(String),
    #[error("code '{code}' requires parameter '{parameter}'")]
    MissingParameter { code: String, parameter: String },
}

/// A requested version could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("no {catalog} release or branch matches '{requested}'")]
    NotFound { catalog: String, requested: String },
    #[error("'{0}' is not a semantic version")]
    Invalid(String),
}

/// The schema for a structural version could not be obtained or compiled.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("no TRAPI schema is available for version '{0}'")]
    Unavailable(String),
    #[error("TRAPI schema document is invalid: {0}")]
    InvalidDocument(String),
    #[error("TRAPI schema has no component '{0}'")]
    UnknownComponent(String),
    #[error("schema for component '{component}' could not be compiled: {reason}")]
    Compile { component: String, reason: String },
}

/// An instance did not conform to a schema component.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{component} at '{path}': {reason}")]
pub struct StructuralError {
    pub component: String,
    pub path: String,
    pub reason: String,
}

/// The semantic model collaborator could not supply a model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Biolink Model {0} is not available")]
    Unavailable(String),
    #[error("Biolink Model document is invalid: {0}")]
    InvalidDocument(String),
}

/// Hard failure of a top-level validation call.
///
/// Findings about the validated data are never returned here; they are in the
/// report.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("version resolution failed: {0}")]
    Version(#[from] VersionError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("input could not be parsed: {0}")]
    Parse(#[from] ParseError),
}
