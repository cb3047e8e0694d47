use super::common::{biolink_catalog, resolver, trapi_catalog};
use std::cmp::Ordering;
use std::path::Path;
use trapi_validator::versioning::{SemVer, StaticCatalog, resolve};
use trapi_validator::{ConcreteVersion, VersionError};

fn tag(version: &ConcreteVersion) -> String {
    version.to_string()
}

// ─── SemVer ─────────────────────────────────────────────────────────────────

#[test]
fn semver_parses_full_and_partial_versions() {
    let v: SemVer = "v1.4.2-beta.1+build5".parse().unwrap();
    assert_eq!(v.prefix, "v");
    assert_eq!((v.major, v.minor, v.patch), (1, Some(4), Some(2)));
    assert_eq!(v.prerelease.as_deref(), Some("beta.1"));
    assert_eq!(v.build.as_deref(), Some("build5"));
    assert_eq!(v.to_string(), "v1.4.2-beta.1+build5");

    let partial: SemVer = "1.3".parse().unwrap();
    assert_eq!(partial.patch, None);
    assert!(!partial.is_complete());
}

#[test]
fn semver_rejects_garbage() {
    assert!(matches!("one.two".parse::<SemVer>(), Err(VersionError::Invalid(_))));
    assert!("1.02.3".parse::<SemVer>().is_err());
}

#[test]
fn prerelease_sorts_before_release() {
    let beta: SemVer = "1.4.0-beta".parse().unwrap();
    let release: SemVer = "1.4.0".parse().unwrap();
    assert_eq!(beta.precedence(&release), Ordering::Less);
    assert!(release.at_least(&beta));
    assert!(!beta.at_least(&release));
}

#[test]
fn comparison_at_declared_precision() {
    let short: SemVer = "1.4".parse().unwrap();
    let long: SemVer = "1.4.2".parse().unwrap();
    assert_eq!(short.cmp_at_precision(&long), Ordering::Equal);
    assert_eq!(short.precedence(&long), Ordering::Less);
}

#[test]
fn numeric_prerelease_identifiers_compare_numerically() {
    let a: SemVer = "1.0.0-rc.2".parse().unwrap();
    let b: SemVer = "1.0.0-rc.10".parse().unwrap();
    assert_eq!(a.precedence(&b), Ordering::Less);
}

// ─── Resolution ─────────────────────────────────────────────────────────────

#[test]
fn partial_version_resolves_to_latest_patch() {
    let resolver = resolver();
    let version = resolver.resolve_structural_version(Some("1.3")).unwrap();
    assert_eq!(tag(&version), "1.3.2");
}

#[test]
fn omitted_version_equals_latest() {
    let resolver = resolver();
    let omitted = resolver.resolve_structural_version(None).unwrap();
    let latest = resolver.resolve_structural_version(Some("latest")).unwrap();
    assert_eq!(omitted, latest);
    assert_eq!(tag(&latest), "1.5.0");
}

#[test]
fn final_release_preferred_over_prerelease() {
    let v = resolve(&trapi_catalog(), Some("1.4")).unwrap();
    assert_eq!(tag(&v), "1.4.2");
    let v = resolve(&trapi_catalog(), Some("1.5")).unwrap();
    assert_eq!(tag(&v), "1.5.0");
}

#[test]
fn prerelease_chosen_when_no_final_release_matches() {
    let v = resolve(&trapi_catalog(), Some("1.6")).unwrap();
    assert_eq!(tag(&v), "1.6.0-beta");
}

#[test]
fn exact_prerelease_request() {
    let v = resolve(&trapi_catalog(), Some("1.4.0-beta")).unwrap();
    assert_eq!(tag(&v), "1.4.0-beta");
}

#[test]
fn catalog_spelling_is_kept() {
    let catalog = StaticCatalog::new("TRAPI", ["v1.4.0", "v1.4.2"], Vec::<String>::new());
    let v = resolve(&catalog, Some("1.4")).unwrap();
    assert_eq!(tag(&v), "v1.4.2");
}

#[test]
fn branch_names_resolve_to_branches() {
    let v = resolve(&biolink_catalog(), Some("master")).unwrap();
    assert_eq!(v, ConcreteVersion::Branch("master".to_string()));
    assert!(v.at_least("99.0.0"));
}

#[test]
fn local_override_is_versioned_by_file_name() {
    let v = resolve(&trapi_catalog(), Some("schemas/trapi_1.5.0.yaml")).unwrap();
    assert_eq!(v.local_path(), Some(Path::new("schemas/trapi_1.5.0.yaml")));
    assert_eq!(tag(&v), "1.5.0");
    assert!(v.at_least("1.4.0-beta"));
}

#[test]
fn unknown_version_is_not_found() {
    let err = resolve(&trapi_catalog(), Some("2.0")).unwrap_err();
    assert!(
        matches!(err, VersionError::NotFound { ref catalog, ref requested } if catalog == "TRAPI" && requested == "2.0"),
        "{err}"
    );
    assert!(resolve(&trapi_catalog(), Some("not-a-version")).is_err());
}

#[test]
fn empty_catalog_has_no_latest() {
    let catalog = StaticCatalog::new("Biolink", Vec::<String>::new(), Vec::<String>::new());
    assert!(resolve(&catalog, None).is_err());
}

#[test]
fn semantic_versions_resolve_against_their_own_catalog() {
    let v = resolver().resolve_semantic_version(Some("4")).unwrap();
    assert_eq!(tag(&v), "4.2.0");
}

// ─── Thresholds ─────────────────────────────────────────────────────────────

#[test]
fn release_thresholds() {
    let v = ConcreteVersion::release("1.4.0").unwrap();
    assert!(v.at_least("1.4.0-beta"));
    assert!(!v.at_least("1.6.0"));
    let v = ConcreteVersion::release("1.3.2").unwrap();
    assert!(!v.at_least("1.4.0-beta"));
}
