#![no_main]

use libfuzzer_sys::fuzz_target;
use mr3x_docs::{format_document_input, validate_document, DocumentClassifier, FeatureGate};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = validate_document(text);

    for gate in [FeatureGate::ENABLED, FeatureGate::DISABLED] {
        let result = DocumentClassifier::new(gate).validate(text);
        // A valid result always carries its display form.
        assert_eq!(result.is_valid(), result.formatted().is_some());

        let masked = format_document_input(text, gate);
        assert!(masked.chars().filter(char::is_ascii_alphanumeric).count() <= 14);
    }
});
