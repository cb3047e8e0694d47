#![no_main]

use libfuzzer_sys::fuzz_target;
use trapi_validator::versioning::{SemVer, StaticCatalog, resolve};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(v) = s.parse::<SemVer>() {
        let reparsed: SemVer = v.to_string().parse().expect("display output must parse");
        assert_eq!(reparsed, v);
    }
    let catalog = StaticCatalog::new("TRAPI", ["1.3.2", "1.4.0-beta", "1.4.2", "1.5.0"], ["master"]);
    let _ = resolve(&catalog, Some(&*s));
});
