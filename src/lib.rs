//! Brazilian fiscal document validation and formatting.
//!
//! Validates CPF and CNPJ numbers (including the alphanumeric CNPJ scheme
//! behind a feature gate), masks them for display, and finds them in free text.
//!
//! ```
//! use mr3x_docs::{validate_document, Scheme};
//!
//! let result = validate_document("11.222.333/0001-81");
//! assert!(result.is_valid());
//! assert_eq!(result.scheme(), Some(Scheme::CnpjLegacy));
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod utils;

pub use config::Mr3xConfig;
pub use domain::{DocumentKind, Scheme, ValidDocument, Validation, ValidationError};
pub use engine::{
    find_documents, validate_cnpj, validate_cpf, validate_document, validate_document_2026,
    DocumentClassifier, DocumentMatch, FeatureGate,
};
pub use error::{Mr3xError, Result as Mr3xResult};
pub use output::{
    format_cep, format_cnpj, format_cpf, format_document_input, is_valid_cep_format,
    OutputFormat, RedactionConfig,
};

/// Find documents in `text` using the configuration from `mr3x.toml` and the
/// environment.
///
/// # Example
/// ```no_run
/// # fn main() -> mr3x_docs::Mr3xResult<()> {
/// let found = mr3x_docs::scan_str("CPF: 529.982.247-25")?;
/// assert_eq!(found.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn scan_str(text: &str) -> Mr3xResult<Vec<DocumentMatch>> {
    let config = Mr3xConfig::load()?;
    Ok(scan_str_with_config(text, &config))
}

#[must_use]
pub fn scan_str_with_config(text: &str, config: &Mr3xConfig) -> Vec<DocumentMatch> {
    find_documents(text, config.feature_gate())
}
