#![no_main]

use libfuzzer_sys::fuzz_target;
use trapi_validator::parse::{parse_document, parse_knowledge_graph, parse_query_graph};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(doc) = parse_document(&s) {
        let _ = parse_knowledge_graph(&doc);
        let _ = parse_query_graph(&doc);
    }
});
