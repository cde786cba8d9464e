use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Scheme, Validation};
use crate::engine::compliance::{validate_cnpj, validate_cnpj_alphanumeric, validate_cpf};
use crate::engine::gate::FeatureGate;
use crate::utils::has_letter;

static CPF_EXTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{3}\.?\d{3}\.?\d{3}-?\d{2}\b").expect("CPF extract regex")
});

static CNPJ_EXTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}\b").expect("CNPJ extract regex")
});

static CNPJ_2026_EXTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9A-Za-z]{2}\.?[0-9A-Za-z]{3}\.?[0-9A-Za-z]{3}/?[0-9A-Za-z]{4}-?\d{2}\b")
        .expect("CNPJ 2026 extract regex")
});

/// A document number found in free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMatch {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column of the first character.
    pub column: usize,
    pub raw: String,
    /// Scheme implied by the shape of the match.
    pub scheme: Scheme,
    pub validation: Validation,
}

/// Find CPF and CNPJ candidates in `text` and validate each one.
/// Alphanumeric CNPJs are only looked for when the gate is on.
#[must_use]
pub fn find_documents(text: &str, gate: FeatureGate) -> Vec<DocumentMatch> {
    let mut found = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let mut line_matches = Vec::new();

        for mat in CPF_EXTRACT_RE.find_iter(line) {
            line_matches.push((mat.start(), mat.as_str(), Scheme::Cpf));
        }
        for mat in CNPJ_EXTRACT_RE.find_iter(line) {
            line_matches.push((mat.start(), mat.as_str(), Scheme::CnpjLegacy));
        }
        if gate.alphanumeric_cnpj() {
            for mat in CNPJ_2026_EXTRACT_RE.find_iter(line) {
                if has_letter(mat.as_str()) {
                    line_matches.push((mat.start(), mat.as_str(), Scheme::Cnpj2026));
                }
            }
        }

        line_matches.sort_by_key(|&(start, _, _)| start);

        found.extend(line_matches.into_iter().map(|(start, raw, scheme)| {
            let validation = match scheme {
                Scheme::Cpf => validate_cpf(raw),
                Scheme::CnpjLegacy => validate_cnpj(raw),
                Scheme::Cnpj2026 => validate_cnpj_alphanumeric(raw),
            };
            DocumentMatch {
                line: idx + 1,
                column: start + 1,
                raw: raw.to_string(),
                scheme,
                validation,
            }
        }));
    }

    found
}
