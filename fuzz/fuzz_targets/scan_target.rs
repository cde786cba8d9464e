#![no_main]

use libfuzzer_sys::fuzz_target;
use mr3x_docs::{find_documents, FeatureGate};

fuzz_target!(|data: &[u8]| {
    // Fuzz find_documents with arbitrary byte sequences interpreted as UTF-8
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = find_documents(text, FeatureGate::ENABLED);
        let _ = find_documents(text, FeatureGate::DISABLED);
    }
});
