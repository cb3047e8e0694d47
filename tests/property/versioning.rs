use proptest::prelude::*;
use std::cmp::Ordering;
use trapi_validator::versioning::{SemVer, StaticCatalog, resolve};

fn prerelease() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("alpha".to_string()),
        Just("beta".to_string()),
        (0u64..20).prop_map(|n| format!("rc.{n}")),
    ])
}

fn semver() -> impl Strategy<Value = SemVer> {
    (0u64..5, 0u64..10, 0u64..10, prerelease()).prop_map(|(major, minor, patch, prerelease)| SemVer {
        prefix: String::new(),
        major,
        minor: Some(minor),
        patch: Some(patch),
        prerelease,
        build: None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn display_parses_back(v in semver(), prefix in prop::sample::select(vec!["", "v"])) {
        let v = SemVer { prefix: prefix.to_string(), ..v };
        let text = v.to_string();
        let parsed: SemVer = text.parse().unwrap();
        prop_assert_eq!(parsed, v);
    }

    #[test]
    fn precedence_is_antisymmetric(a in semver(), b in semver()) {
        prop_assert_eq!(a.precedence(&b), b.precedence(&a).reverse());
        prop_assert_eq!(a.precedence(&a), Ordering::Equal);
    }

    #[test]
    fn precedence_is_transitive(a in semver(), b in semver(), c in semver()) {
        if a.precedence(&b) != Ordering::Greater && b.precedence(&c) != Ordering::Greater {
            prop_assert_ne!(a.precedence(&c), Ordering::Greater);
        }
    }

    #[test]
    fn complete_versions_compare_alike_at_any_precision(a in semver(), b in semver()) {
        prop_assert_eq!(a.cmp_at_precision(&b), a.precedence(&b));
        prop_assert_eq!(a.at_least(&b), a.precedence(&b) != Ordering::Less);
    }

    #[test]
    fn truncated_version_matches_its_source(v in semver()) {
        let short = SemVer { patch: None, prerelease: None, ..v.clone() };
        prop_assert_eq!(short.cmp_at_precision(&v), Ordering::Equal);
        prop_assert!(v.at_least(&short));
    }

    #[test]
    fn partial_request_picks_highest_final_patch(
        minor in 0u64..6,
        patches in prop::collection::btree_set(0u64..15, 1..6),
    ) {
        let releases: Vec<String> = patches.iter().map(|p| format!("1.{minor}.{p}")).collect();
        let catalog = StaticCatalog::new("TRAPI", releases, Vec::<String>::new());
        let requested = format!("1.{minor}");
        let resolved = resolve(&catalog, Some(requested.as_str())).unwrap();
        let highest = patches.iter().max().copied().unwrap_or_default();
        prop_assert_eq!(resolved.to_string(), format!("1.{minor}.{highest}"));
    }

    #[test]
    fn garbage_never_panics(input in "\\PC{0,24}") {
        let _ = input.parse::<SemVer>();
        let catalog = StaticCatalog::new("Biolink", ["4.2.0"], Vec::<String>::new());
        let _ = resolve(&catalog, Some(input.as_str()));
    }
}
