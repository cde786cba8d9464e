use crate::domain::{DocumentKind, Scheme, ValidDocument, Validation, ValidationError};
use crate::engine::checksum::{values_of, verify_cnpj, verify_cpf};
use crate::output::{format_cnpj, format_cpf};
use crate::utils::{clean_alphanumeric, clean_digits, is_repeated_sequence};

// --- CPF (Brazil) ---

/// Validate a Brazilian CPF using Módulo 11. Punctuation is ignored.
#[must_use]
pub fn validate_cpf(raw: &str) -> Validation {
    let digits = clean_digits(raw);
    match check_numeric(&digits, DocumentKind::Cpf, verify_cpf) {
        Ok(()) => Validation::Valid(ValidDocument {
            scheme: Scheme::Cpf,
            formatted: format_cpf(&digits),
            normalized: digits,
        }),
        Err(err) => err.into(),
    }
}

// --- CNPJ (Brazil) ---

/// Validate a numeric (legacy) Brazilian CNPJ using Módulo 11.
#[must_use]
pub fn validate_cnpj(raw: &str) -> Validation {
    let digits = clean_digits(raw);
    match check_numeric(&digits, DocumentKind::Cnpj, verify_cnpj) {
        Ok(()) => Validation::Valid(ValidDocument {
            scheme: Scheme::CnpjLegacy,
            formatted: format_cnpj(&digits),
            normalized: digits,
        }),
        Err(err) => err.into(),
    }
}

fn check_numeric(
    digits: &str,
    kind: DocumentKind,
    verify: fn(&[u32]) -> bool,
) -> Result<(), ValidationError> {
    if digits.len() != kind.digit_count() {
        return Err(ValidationError::wrong_length(kind));
    }

    // Reject all-same digits (e.g. 111.111.111-11)
    if is_repeated_sequence(digits) {
        return Err(ValidationError::RepeatedSequence(kind));
    }

    let values = values_of(digits).ok_or(ValidationError::wrong_length(kind))?;
    if verify(&values) {
        Ok(())
    } else {
        Err(ValidationError::CheckDigits(kind))
    }
}

// --- CNPJ alfanumérico (2026) ---

/// Validate a 14-character alphanumeric CNPJ. Letters are case-folded; the
/// result keeps the bare uppercase form, with no punctuation inserted.
#[must_use]
pub fn validate_cnpj_alphanumeric(raw: &str) -> Validation {
    let cleaned = clean_alphanumeric(raw);
    if cleaned.len() != DocumentKind::Cnpj.digit_count() {
        return ValidationError::UnsupportedFormat.into();
    }

    let Some(values) = values_of(&cleaned) else {
        return ValidationError::UnsupportedFormat.into();
    };

    if !verify_cnpj(&values) {
        return ValidationError::Cnpj2026CheckDigits.into();
    }

    Validation::Valid(ValidDocument {
        scheme: Scheme::Cnpj2026,
        formatted: cleaned.clone(),
        normalized: cleaned,
    })
}
