use crate::engine::FeatureGate;
use crate::utils::{apply_mask, clean_alphanumeric, clean_digits, has_letter};

pub const CPF_MASK: &str = "###.###.###-##";
pub const CNPJ_MASK: &str = "##.###.###/####-##";
pub const CEP_MASK: &str = "#####-###";

/// Longest cleaned input the live formatter keeps.
pub const MAX_DOCUMENT_CHARS: usize = 14;

#[must_use]
pub fn format_cpf(raw: &str) -> String {
    apply_mask(&clean_digits(raw), CPF_MASK)
}

#[must_use]
pub fn format_cnpj(raw: &str) -> String {
    apply_mask(&clean_digits(raw), CNPJ_MASK)
}

#[must_use]
pub fn format_cep(raw: &str) -> String {
    apply_mask(&clean_digits(raw), CEP_MASK)
}

#[must_use]
pub fn is_valid_cep_format(raw: &str) -> bool {
    clean_digits(raw).len() == 8
}

/// Mask a CPF/CNPJ field as the user types.
///
/// Up to 11 digits get the CPF mask and longer numeric input the CNPJ mask.
/// With the gate on, any letter switches to the alphanumeric CNPJ, which is
/// shown uppercase and unpunctuated. With the gate off letters are dropped.
///
/// Letters take precedence over length: with the gate on, input of 11 or
/// fewer characters that contains a letter is not CPF-masked.
#[must_use]
pub fn format_document_input(raw: &str, gate: FeatureGate) -> String {
    let mut cleaned = if gate.alphanumeric_cnpj() {
        clean_alphanumeric(raw)
    } else {
        clean_digits(raw)
    };
    cleaned.truncate(MAX_DOCUMENT_CHARS);

    if has_letter(&cleaned) {
        cleaned
    } else if cleaned.len() <= 11 {
        apply_mask(&cleaned, CPF_MASK)
    } else {
        apply_mask(&cleaned, CNPJ_MASK)
    }
}

/// Drop every separator, keeping uppercase alphanumerics.
#[must_use]
pub fn strip_document(formatted: &str) -> String {
    clean_alphanumeric(formatted)
}
