use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Family of a Brazilian fiscal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    /// Number of characters in the cleaned form, check digits included.
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => f.write_str("CPF"),
            Self::Cnpj => f.write_str("CNPJ"),
        }
    }
}

/// Check-digit scheme a document was validated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scheme {
    #[serde(rename = "cpf")]
    Cpf,
    #[serde(rename = "legacy")]
    CnpjLegacy,
    #[serde(rename = "2026")]
    Cnpj2026,
}

impl Scheme {
    #[must_use]
    pub const fn kind(self) -> DocumentKind {
        match self {
            Self::Cpf => DocumentKind::Cpf,
            Self::CnpjLegacy | Self::Cnpj2026 => DocumentKind::Cnpj,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::CnpjLegacy => "legacy",
            Self::Cnpj2026 => "2026",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a document was rejected. The `Display` text is what end users see.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} deve ter {expected} dígitos")]
    WrongLength { kind: DocumentKind, expected: usize },

    #[error("{0} inválido (sequência inválida)")]
    RepeatedSequence(DocumentKind),

    #[error("{0} inválido (dígitos verificadores incorretos)")]
    CheckDigits(DocumentKind),

    #[error("Documento deve ter 11 dígitos (CPF) ou 14 dígitos (CNPJ)")]
    DocumentLength,

    #[error("Documento 2026 inválido (DV)")]
    Cnpj2026CheckDigits,

    #[error("Formato de documento não suportado")]
    UnsupportedFormat,
}

impl ValidationError {
    #[must_use]
    pub const fn wrong_length(kind: DocumentKind) -> Self {
        Self::WrongLength {
            kind,
            expected: kind.digit_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidDocument {
    pub scheme: Scheme,
    /// Display form: punctuated for CPF and legacy CNPJ, bare for 2026 CNPJ.
    pub formatted: String,
    /// Punctuation-free, uppercase form.
    pub normalized: String,
}

/// Outcome of a single validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(ValidDocument),
    Invalid(ValidationError),
}

impl Validation {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    pub fn formatted(&self) -> Option<&str> {
        match self {
            Self::Valid(doc) => Some(&doc.formatted),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Self::Valid(doc) => Some(&doc.normalized),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub const fn scheme(&self) -> Option<Scheme> {
        match self {
            Self::Valid(doc) => Some(doc.scheme),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<ValidationError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(err) => Some(*err),
        }
    }

    /// Convert into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<ValidDocument, ValidationError> {
        match self {
            Self::Valid(doc) => Ok(doc),
            Self::Invalid(err) => Err(err),
        }
    }
}

impl From<ValidationError> for Validation {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}
