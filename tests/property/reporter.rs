use proptest::prelude::*;
use serde_json::{Value, json};
use trapi_validator::codes::{Code, ErrorCode, WarningCode};
use trapi_validator::report::{GLOBAL_SCOPE, Params, severity_key};
use trapi_validator::{CodeRegistry, Severity, ValidationReporter};

const CODES: &[Code] = &[
    Code::Error(ErrorCode::KnowledgeGraphNodeCategoryMissing),
    Code::Error(ErrorCode::KnowledgeGraphEdgeSourcesMissing),
    Code::Warning(WarningCode::KnowledgeGraphNodeNameMissing),
];

fn finding() -> impl Strategy<Value = (usize, Option<String>, String)> {
    (
        0..CODES.len(),
        prop::option::of(prop::sample::select(vec!["infores:a", "infores:b"]).prop_map(str::to_string)),
        "[A-Za-z]{1,6}:[0-9]{1,4}",
    )
}

fn apply(reporter: &mut ValidationReporter, findings: &[(usize, Option<String>, String)]) {
    for (code, scope, id) in findings {
        reporter.report_scoped(CODES[*code], scope.as_deref(), Some(id.as_str()), Params::new());
    }
}

fn reporter() -> ValidationReporter {
    ValidationReporter::new(CodeRegistry::builtin())
}

/// Identifiers rendered under one severity of `to_value`.
fn rendered_count(value: &Value, severity: Severity) -> usize {
    value[severity_key(severity)]
        .as_object()
        .map(|codes| {
            codes
                .values()
                .filter_map(Value::as_object)
                .flat_map(|scopes| scopes.values())
                .map(|ids| ids.as_object().map_or(1, |ids| ids.len()))
                .sum()
        })
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reporting_twice_changes_nothing(findings in prop::collection::vec(finding(), 0..24)) {
        let mut once = reporter();
        apply(&mut once, &findings);
        let mut twice = reporter();
        apply(&mut twice, &findings);
        apply(&mut twice, &findings);
        prop_assert_eq!(once.to_value(), twice.to_value());
    }

    #[test]
    fn merge_order_does_not_matter(
        left in prop::collection::vec(finding(), 0..12),
        right in prop::collection::vec(finding(), 0..12),
    ) {
        let (mut a, mut b) = (reporter(), reporter());
        apply(&mut a, &left);
        apply(&mut b, &right);

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);
        prop_assert_eq!(ab.to_value(), ba.to_value());

        let mut direct = reporter();
        apply(&mut direct, &left);
        apply(&mut direct, &right);
        prop_assert_eq!(ab.to_value(), direct.to_value());
    }

    #[test]
    fn count_agrees_with_rendering(findings in prop::collection::vec(finding(), 0..24)) {
        let mut r = reporter();
        apply(&mut r, &findings);
        let value = r.to_value();
        for severity in Severity::ALL {
            prop_assert_eq!(r.count(severity), rendered_count(&value, severity), "{:?}", severity);
        }
        prop_assert_eq!(r.is_compliant(), r.count(Severity::Error) == 0);
    }

    #[test]
    fn child_findings_land_in_child_scope(ids in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let parent = reporter();
        let mut child = parent.child(Some("infores:kp"));
        for id in &ids {
            child.report(ErrorCode::KnowledgeGraphNodeCategoryMissing, Some(id.as_str()), Params::new());
        }
        let mut merged = parent.clone();
        merged.merge(&child);
        prop_assert!(merged.identifiers_of(ErrorCode::KnowledgeGraphNodeCategoryMissing, GLOBAL_SCOPE).is_empty());
        let mut expected: Vec<&str> = ids.iter().map(String::as_str).collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(
            merged.identifiers_of(ErrorCode::KnowledgeGraphNodeCategoryMissing, "infores:kp"),
            expected
        );
    }

    #[test]
    fn rendered_dump_mentions_every_identifier(ids in prop::collection::btree_set("[a-z]{3,8}", 1..6)) {
        let mut r = reporter();
        for id in &ids {
            r.report(WarningCode::KnowledgeGraphNodeNameMissing, Some(id.as_str()), Params::new());
        }
        let dump = r.to_string();
        for id in &ids {
            prop_assert!(dump.contains(id.as_str()), "{} missing from {}", id, dump);
        }
        let value = r.to_value();
        prop_assert_eq!(&value["error"], &json!({}));
    }
}
