//! Version model and resolution for the two independently versioned standards:
//! the TRAPI schema (structural) and the Biolink Model (semantic).
//!
//! A requested version resolves to a [`ConcreteVersion`]:
//!
//! | Request                     | Resolves to |
//! |-----------------------------|-------------|
//! | omitted or `latest`         | newest release in the catalog |
//! | `1` / `1.4` / `v1.4.2`      | newest release sharing the declared components |
//! | a catalog branch name       | that branch, no version comparison |
//! | `trapi_1.5.0.yaml`          | the local file, versioned by its `_` suffix |
//!
//! Final releases are preferred over pre-releases; a pre-release is chosen only
//! when no final release matches.

use crate::error::VersionError;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<prefix>[A-Za-z]*)(?P<major>0|[1-9]\d*)(?:\.(?P<minor>0|[1-9]\d*)(?:\.(?P<patch>0|[1-9]\d*))?)?(?:-(?P<pre>[0-9A-Za-z.\-]+))?(?:\+(?P<build>[0-9A-Za-z.\-]+))?$",
    )
    .unwrap()
});

/// File extensions accepted for local override documents.
const OVERRIDE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

// ─── TRAPI / Biolink thresholds ─────────────────────────────────────────────

/// First TRAPI release carrying `sources` on knowledge graph edges.
pub const TRAPI_1_4_0_BETA: &str = "1.4.0-beta";
/// First TRAPI release where knowledge_level and agent_type are mandatory.
pub const TRAPI_1_6_0: &str = "1.6.0";
/// First Biolink Model release defining knowledge_level and agent_type.
pub const BIOLINK_4_2_0: &str = "4.2.0";

// ─── SemVer ─────────────────────────────────────────────────────────────────

/// A semantic version, possibly partial (`1`, `1.4`) and possibly prefixed (`v1.4.2`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SemVer {
    pub prefix: String,
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub prerelease: Option<String>,
    pub build: Option<String>,
}

impl SemVer {
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// `true` when major, minor and patch are all given.
    pub fn is_complete(&self) -> bool {
        self.minor.is_some() && self.patch.is_some()
    }

    /// Compare on the components both sides declare. `1.4` equals `1.4.2`;
    /// pre-releases are only compared when both patches are present.
    pub fn cmp_at_precision(&self, other: &SemVer) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let (Some(a), Some(b)) = (self.minor, other.minor) else {
            return Ordering::Equal;
        };
        match a.cmp(&b) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let (Some(a), Some(b)) = (self.patch, other.patch) else {
            return Ordering::Equal;
        };
        match a.cmp(&b) {
            Ordering::Equal => {}
            ord => return ord,
        }
        cmp_prerelease(self.prerelease.as_deref(), other.prerelease.as_deref())
    }

    /// Total precedence ordering; missing components count as zero.
    pub fn precedence(&self, other: &SemVer) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.unwrap_or(0).cmp(&other.minor.unwrap_or(0)))
            .then(self.patch.unwrap_or(0).cmp(&other.patch.unwrap_or(0)))
            .then_with(|| cmp_prerelease(self.prerelease.as_deref(), other.prerelease.as_deref()))
    }

    /// `self >= threshold` at declared precision.
    pub fn at_least(&self, threshold: &SemVer) -> bool {
        self.cmp_at_precision(threshold) != Ordering::Less
    }

    /// Does `self`, a catalog release, fall under the requested `pattern`?
    fn matches(&self, pattern: &SemVer) -> bool {
        if self.major != pattern.major {
            return false;
        }
        if pattern.minor.is_some() && self.minor != pattern.minor {
            return false;
        }
        if pattern.patch.is_some() && self.patch != pattern.patch {
            return false;
        }
        pattern.prerelease.is_none() || self.prerelease == pattern.prerelease
    }
}

/// A release sorts after its pre-releases. Pre-release identifiers compare
/// numerically when both are numeric, numeric before alphanumeric otherwise.
fn cmp_prerelease(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let mut left = a.split('.');
            let mut right = b.split('.');
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(x), Some(y)) => {
                        let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                            (Ok(x), Ok(y)) => x.cmp(&y),
                            (Ok(_), Err(_)) => Ordering::Less,
                            (Err(_), Ok(_)) => Ordering::Greater,
                            (Err(_), Err(_)) => x.cmp(y),
                        };
                        if ord != Ordering::Equal {
                            return ord;
                        }
                    }
                }
            }
        }
    }
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SEMVER_RE
            .captures(s.trim())
            .ok_or_else(|| VersionError::Invalid(s.to_string()))?;
        let number = |name: &str| -> Result<Option<u64>, VersionError> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| VersionError::Invalid(s.to_string())))
                .transpose()
        };
        Ok(SemVer {
            prefix: caps.name("prefix").map(|m| m.as_str().to_string()).unwrap_or_default(),
            major: number("major")?.ok_or_else(|| VersionError::Invalid(s.to_string()))?,
            minor: number("minor")?,
            patch: number("patch")?,
            prerelease: caps.name("pre").map(|m| m.as_str().to_string()),
            build: caps.name("build").map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
            if let Some(patch) = self.patch {
                write!(f, ".{patch}")?;
            }
        }
        if let Some(pre) = &self.prerelease {
            write!(f, "-{pre}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

// ─── Concrete versions ──────────────────────────────────────────────────────

/// The outcome of resolution: what a validation run actually validates against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConcreteVersion {
    /// A catalog release, keeping the catalog's own spelling (e.g. `v1.4.2`).
    Release { tag: String, semver: SemVer },
    /// The tip of a catalog branch.
    Branch(String),
    /// A local override document, versioned by its file name.
    LocalFile { path: PathBuf, semver: SemVer },
}

impl ConcreteVersion {
    /// A release known by its tag, e.g. `1.5.0` or `v1.4.2`.
    pub fn release(tag: &str) -> Result<Self, VersionError> {
        Ok(ConcreteVersion::Release {
            tag: tag.to_string(),
            semver: tag.parse()?,
        })
    }

    pub fn semver(&self) -> Option<&SemVer> {
        match self {
            ConcreteVersion::Release { semver, .. } | ConcreteVersion::LocalFile { semver, .. } => Some(semver),
            ConcreteVersion::Branch(_) => None,
        }
    }

    /// `self >= threshold`. A branch is treated as the tip of development and
    /// passes every threshold.
    pub fn at_least(&self, threshold: &str) -> bool {
        let Ok(threshold) = threshold.parse::<SemVer>() else {
            return false;
        };
        match self.semver() {
            Some(v) => v.at_least(&threshold),
            None => true,
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            ConcreteVersion::LocalFile { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for ConcreteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcreteVersion::Release { tag, .. } => f.write_str(tag),
            ConcreteVersion::Branch(name) => f.write_str(name),
            ConcreteVersion::LocalFile { semver, .. } => write!(f, "{semver}"),
        }
    }
}

// ─── Catalogs ───────────────────────────────────────────────────────────────

/// Source of known releases and branches for one standard. Remote catalogs
/// (e.g. a repository's tags) implement this outside the crate.
pub trait VersionCatalog: Send + Sync {
    /// Catalog name used in error messages, e.g. `TRAPI`.
    fn name(&self) -> &str;
    fn releases(&self) -> Vec<String>;
    fn branches(&self) -> Vec<String>;
}

/// A fixed list of releases and branches.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    pub name: String,
    pub releases: Vec<String>,
    pub branches: Vec<String>,
}

impl StaticCatalog {
    pub fn new<R, B>(name: &str, releases: R, branches: B) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        StaticCatalog {
            name: name.to_string(),
            releases: releases.into_iter().map(Into::into).collect(),
            branches: branches.into_iter().map(Into::into).collect(),
        }
    }
}

impl VersionCatalog for StaticCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn releases(&self) -> Vec<String> {
        self.releases.clone()
    }

    fn branches(&self) -> Vec<String> {
        self.branches.clone()
    }
}

// ─── Resolver ───────────────────────────────────────────────────────────────

/// Resolves requested versions against the structural and semantic catalogs.
#[derive(Clone)]
pub struct VersionResolver {
    structural: Arc<dyn VersionCatalog>,
    semantic: Arc<dyn VersionCatalog>,
}

impl VersionResolver {
    pub fn new(structural: Arc<dyn VersionCatalog>, semantic: Arc<dyn VersionCatalog>) -> Self {
        VersionResolver { structural, semantic }
    }

    pub fn resolve_structural_version(&self, input: Option<&str>) -> Result<ConcreteVersion, VersionError> {
        resolve(self.structural.as_ref(), input)
    }

    pub fn resolve_semantic_version(&self, input: Option<&str>) -> Result<ConcreteVersion, VersionError> {
        resolve(self.semantic.as_ref(), input)
    }
}

impl fmt::Debug for VersionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionResolver")
            .field("structural", &self.structural.name())
            .field("semantic", &self.semantic.name())
            .finish()
    }
}

/// Resolve `input` against one catalog.
pub fn resolve(catalog: &dyn VersionCatalog, input: Option<&str>) -> Result<ConcreteVersion, VersionError> {
    let requested = input.map(str::trim).filter(|s| !s.is_empty());
    let not_found = || VersionError::NotFound {
        catalog: catalog.name().to_string(),
        requested: requested.unwrap_or("latest").to_string(),
    };

    let Some(requested) = requested.filter(|s| !s.eq_ignore_ascii_case("latest")) else {
        let resolved = newest(catalog, None).ok_or_else(not_found)?;
        tracing::debug!(catalog = catalog.name(), version = %resolved, "resolved latest version");
        return Ok(resolved);
    };

    if let Some(local) = local_override(requested)? {
        tracing::debug!(catalog = catalog.name(), version = %local, "using local override document");
        return Ok(local);
    }

    if catalog.branches().iter().any(|b| b == requested) {
        return Ok(ConcreteVersion::Branch(requested.to_string()));
    }

    let pattern: SemVer = requested.parse().map_err(|_| not_found())?;
    let resolved = newest(catalog, Some(&pattern)).ok_or_else(not_found)?;
    tracing::debug!(catalog = catalog.name(), requested, version = %resolved, "resolved version");
    Ok(resolved)
}

/// Newest catalog release matching `pattern`, preferring final releases.
fn newest(catalog: &dyn VersionCatalog, pattern: Option<&SemVer>) -> Option<ConcreteVersion> {
    let candidates: Vec<(String, SemVer)> = catalog
        .releases()
        .into_iter()
        .filter_map(|tag| tag.parse::<SemVer>().ok().map(|v| (tag, v)))
        .filter(|(_, v)| pattern.is_none_or(|p| v.matches(p)))
        .collect();

    let pick = |final_only: bool| {
        candidates
            .iter()
            .filter(|(_, v)| !final_only || !v.is_prerelease())
            .max_by(|(_, a), (_, b)| a.precedence(b))
            .cloned()
    };
    pick(true)
        .or_else(|| pick(false))
        .map(|(tag, semver)| ConcreteVersion::Release { tag, semver })
}

/// A request naming a local document such as `schemas/trapi_1.5.0.yaml`.
fn local_override(requested: &str) -> Result<Option<ConcreteVersion>, VersionError> {
    let path = Path::new(requested);
    let is_document = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| OVERRIDE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
    if !is_document {
        return Ok(None);
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let suffix = stem.rsplit('_').next().unwrap_or(stem);
    let semver: SemVer = suffix.parse()?;
    Ok(Some(ConcreteVersion::LocalFile {
        path: path.to_path_buf(),
        semver,
    }))
}
