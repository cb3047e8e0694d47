#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::json;
use trapi_validator::codes::Code;
use trapi_validator::report::Params;
use trapi_validator::{CodeRegistry, DumpOptions, ValidationReporter};

#[derive(Arbitrary, Debug)]
struct Finding {
    code: u16,
    scope: Option<String>,
    identifier: String,
    value: String,
}

fuzz_target!(|findings: Vec<Finding>| {
    let codes: Vec<Code> = Code::all().collect();
    let registry = CodeRegistry::builtin();
    let mut reporter = ValidationReporter::new(registry.clone());
    for f in &findings {
        let code = codes[usize::from(f.code) % codes.len()];
        let entry = registry.lookup(code.path()).expect("builtin code is registered");
        let params: Params = entry
            .extra_parameters()
            .map(|name| (name.to_string(), json!(f.value)))
            .collect();
        reporter.report_scoped(code, f.scope.as_deref(), Some(f.identifier.as_str()), params);
    }
    let _ = reporter.to_value();
    let _ = reporter.dumps(&DumpOptions::default());
});
