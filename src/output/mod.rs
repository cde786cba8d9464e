mod formatter;
mod mask;
mod redact;

pub use formatter::{format_matches, format_validations, OutputFormat, ValidationReport};
pub use mask::{
    format_cep, format_cnpj, format_cpf, format_document_input, is_valid_cep_format,
    strip_document, CEP_MASK, CNPJ_MASK, CPF_MASK, MAX_DOCUMENT_CHARS,
};
pub use redact::{redact_document, RedactionConfig};
