//! Closed enumerations used throughout the validator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tier of a validation code.
///
/// The variant order is the reporting order: critical findings first,
/// skipped-test bookkeeping last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Information,
    Skipped,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Information,
        Severity::Skipped,
    ];

    /// The leading segment used by codes of this tier (`info` for [`Severity::Information`]).
    pub fn code_prefix(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Information => "info",
            Severity::Skipped => "skipped",
        }
    }

    pub fn from_code_prefix(prefix: &str) -> Option<Severity> {
        match prefix {
            "critical" => Some(Severity::Critical),
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            "info" => Some(Severity::Information),
            "skipped" => Some(Severity::Skipped),
            _ => None,
        }
    }

    /// Section heading used by the text report.
    pub fn heading(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Error => "Errors",
            Severity::Warning => "Warnings",
            Severity::Information => "Information",
            Severity::Skipped => "Skipped Tests",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code_prefix())
    }
}

/// The kind of document a rule is looking at. Drives default strictness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphType {
    InputEdge,
    QueryGraph,
    KnowledgeGraph,
}

impl GraphType {
    /// Strictness when no explicit `strict_validation` flag is configured.
    pub fn default_strictness(self) -> bool {
        match self {
            GraphType::QueryGraph => false,
            GraphType::KnowledgeGraph | GraphType::InputEdge => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GraphType::InputEdge => "Input Edge",
            GraphType::QueryGraph => "Query Graph",
            GraphType::KnowledgeGraph => "Knowledge Graph",
        }
    }
}

/// Kind of a semantic model element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Category,
    Predicate,
    Qualifier,
    Slot,
    Enum,
    Other,
}
