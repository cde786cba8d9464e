use anyhow::{Context, Result};

use mr3x_docs::output::{format_validations, OutputFormat, ValidationReport};
use mr3x_docs::{validate_document, DocumentClassifier, FeatureGate, Mr3xConfig, Validation};

pub fn run_validate(
    documents: &[String],
    format: OutputFormat,
    alphanumeric: bool,
    legacy: bool,
) -> Result<()> {
    let inputs: Vec<&str> = documents.iter().map(String::as_str).collect();

    let validations: Vec<Validation> = if legacy {
        inputs.iter().map(|raw| validate_document(raw)).collect()
    } else {
        let config = Mr3xConfig::load().context("Failed to load mr3x.toml")?;
        let gate = if alphanumeric {
            FeatureGate::ENABLED
        } else {
            config.feature_gate()
        };
        DocumentClassifier::new(gate).validate_batch(&inputs)
    };

    let reports: Vec<ValidationReport> = documents
        .iter()
        .zip(validations)
        .map(|(input, validation)| ValidationReport {
            input: input.clone(),
            validation,
        })
        .collect();

    println!("{}", format_validations(&reports, format).trim_end());

    if reports.iter().any(|r| !r.validation.is_valid()) {
        std::process::exit(1);
    }

    Ok(())
}
