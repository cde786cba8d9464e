use tracing::debug;

use crate::config::Mr3xConfig;
use crate::domain::{Scheme, Validation, ValidationError};
use crate::engine::compliance::{validate_cnpj, validate_cnpj_alphanumeric, validate_cpf};
use crate::engine::gate::FeatureGate;
use crate::output::format_document_input;
use crate::utils::{clean_alphanumeric, clean_digits, has_letter, is_all_digits};

/// Numeric-only dispatcher: 11 digits are a CPF, 14 a CNPJ.
#[must_use]
pub fn validate_document(raw: &str) -> Validation {
    let digits = clean_digits(raw);
    match digits.len() {
        11 => validate_cpf(&digits),
        14 => validate_cnpj(&digits),
        _ => ValidationError::DocumentLength.into(),
    }
}

/// Alphanumeric-aware dispatcher, gated by the `MR3X_CNPJ_2026` environment
/// flag. The flag is read on every call; use [`DocumentClassifier`] to pin it.
#[must_use]
pub fn validate_document_2026(raw: &str) -> Validation {
    DocumentClassifier::new(FeatureGate::from_env()).validate(raw)
}

/// Picks the scheme for an input and validates it under that scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentClassifier {
    gate: FeatureGate,
}

impl DocumentClassifier {
    #[must_use]
    pub const fn new(gate: FeatureGate) -> Self {
        Self { gate }
    }

    #[must_use]
    pub fn from_config(config: &Mr3xConfig) -> Self {
        Self::new(config.feature_gate())
    }

    #[must_use]
    pub const fn gate(&self) -> FeatureGate {
        self.gate
    }

    /// Scheme the cleaned input would be validated under, if any.
    #[must_use]
    pub fn classify(&self, raw: &str) -> Option<Scheme> {
        let cleaned = clean_alphanumeric(raw);
        match cleaned.len() {
            11 if is_all_digits(&cleaned) => Some(Scheme::Cpf),
            14 if is_all_digits(&cleaned) => Some(Scheme::CnpjLegacy),
            14 if self.gate.alphanumeric_cnpj() && has_letter(&cleaned) => {
                Some(Scheme::Cnpj2026)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn validate(&self, raw: &str) -> Validation {
        let scheme = self.classify(raw);
        debug!(
            scheme = scheme.map(Scheme::label),
            gate = self.gate.alphanumeric_cnpj(),
            "classified document"
        );

        match scheme {
            Some(Scheme::Cpf) => validate_cpf(raw),
            Some(Scheme::CnpjLegacy) => validate_cnpj(raw),
            Some(Scheme::Cnpj2026) => validate_cnpj_alphanumeric(raw),
            None => ValidationError::UnsupportedFormat.into(),
        }
    }

    #[must_use]
    pub fn validate_batch(&self, inputs: &[&str]) -> Vec<Validation> {
        inputs.iter().map(|raw| self.validate(raw)).collect()
    }

    /// Live mask for a document field, honoring this classifier's gate.
    #[must_use]
    pub fn format_input(&self, raw: &str) -> String {
        format_document_input(raw, self.gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocumentKind;

    const ENABLED: DocumentClassifier = DocumentClassifier::new(FeatureGate::ENABLED);
    const DISABLED: DocumentClassifier = DocumentClassifier::new(FeatureGate::DISABLED);

    // --- validate_document ---

    #[test]
    fn test_document_cpf_path() {
        assert_eq!(
            validate_document("111.444.777-35").scheme(),
            Some(Scheme::Cpf)
        );
    }

    #[test]
    fn test_document_cnpj_path() {
        assert_eq!(
            validate_document("11.222.333/0001-81").scheme(),
            Some(Scheme::CnpjLegacy)
        );
    }

    #[test]
    fn test_document_wrong_length() {
        let result = validate_document("123");
        assert_eq!(result.error(), Some(ValidationError::DocumentLength));
        assert!(result
            .error()
            .unwrap()
            .to_string()
            .contains("11 dígitos (CPF) ou 14 dígitos (CNPJ)"));
    }

    #[test]
    fn test_document_ignores_letters() {
        // Letters are stripped, leaving 9 digits.
        assert_eq!(
            validate_document("12ABC34501DE35").error(),
            Some(ValidationError::DocumentLength)
        );
    }

    #[test]
    fn test_document_propagates_scheme_errors() {
        assert_eq!(
            validate_document("111.111.111-11").error(),
            Some(ValidationError::RepeatedSequence(DocumentKind::Cpf))
        );
    }

    // --- validate_document_2026 ---

    // The only test touching MR3X_CNPJ_2026; keep every env change in here.
    #[test]
    fn test_document_2026_rereads_env_each_call() {
        use crate::engine::CNPJ_2026_ENV;

        std::env::remove_var(CNPJ_2026_ENV);
        assert_eq!(
            validate_document_2026("12ABC34501DE45").error(),
            Some(ValidationError::UnsupportedFormat)
        );

        std::env::set_var(CNPJ_2026_ENV, "1");
        let valid = validate_document_2026("12abc34501de45");
        assert_eq!(valid.scheme(), Some(Scheme::Cnpj2026));
        assert_eq!(valid.formatted(), Some("12ABC34501DE45"));

        std::env::set_var(CNPJ_2026_ENV, "TRUE");
        assert_eq!(
            validate_document_2026("12ABC34501DE45").error(),
            Some(ValidationError::UnsupportedFormat)
        );

        std::env::set_var(CNPJ_2026_ENV, "true");
        assert!(validate_document_2026("12ABC34501DE45").is_valid());
        assert_eq!(
            validate_document_2026("111.444.777-35").scheme(),
            Some(Scheme::Cpf)
        );

        std::env::remove_var(CNPJ_2026_ENV);
        assert!(!validate_document_2026("12ABC34501DE45").is_valid());
    }

    // --- classifier ---

    #[test]
    fn test_classify_table() {
        assert_eq!(ENABLED.classify("111.444.777-35"), Some(Scheme::Cpf));
        assert_eq!(ENABLED.classify("11222333000181"), Some(Scheme::CnpjLegacy));
        assert_eq!(ENABLED.classify("12ABC34501DE45"), Some(Scheme::Cnpj2026));
        assert_eq!(DISABLED.classify("12ABC34501DE45"), None);
        assert_eq!(ENABLED.classify("1114447773A"), None);
        assert_eq!(ENABLED.classify("123"), None);
    }

    #[test]
    fn test_gate_off_rejects_alphanumeric() {
        assert_eq!(
            DISABLED.validate("12ABC34501DE35").error(),
            Some(ValidationError::UnsupportedFormat)
        );
    }

    #[test]
    fn test_gate_on_checks_alphanumeric_digits() {
        assert_eq!(
            ENABLED.validate("12ABC34501DE35").error(),
            Some(ValidationError::Cnpj2026CheckDigits)
        );
        let valid = ENABLED.validate("12.abc.345/01de-45");
        assert_eq!(valid.scheme(), Some(Scheme::Cnpj2026));
        assert_eq!(valid.formatted(), Some("12ABC34501DE45"));
    }

    #[test]
    fn test_numeric_paths_ignore_gate() {
        for classifier in [ENABLED, DISABLED] {
            assert_eq!(
                classifier.validate("111.444.777-35").formatted(),
                Some("111.444.777-35")
            );
            assert_eq!(
                classifier.validate("11222333000181").scheme(),
                Some(Scheme::CnpjLegacy)
            );
        }
    }

    #[test]
    fn test_other_lengths_unsupported() {
        assert_eq!(
            DISABLED.validate("123").error(),
            Some(ValidationError::UnsupportedFormat)
        );
        assert_eq!(
            ENABLED.validate("").error(),
            Some(ValidationError::UnsupportedFormat)
        );
    }

    #[test]
    fn test_validate_batch_preserves_order() {
        let results = DISABLED.validate_batch(&["111.444.777-35", "123"]);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_valid());
        assert!(!results[1].is_valid());
    }

    #[test]
    fn test_format_input_uses_gate() {
        assert_eq!(ENABLED.format_input("12abc"), "12ABC");
        assert_eq!(DISABLED.format_input("12abc"), "12");
    }
}
