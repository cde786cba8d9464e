use anyhow::Result;
use clap::ValueEnum;

use mr3x_docs::output::{format_cep, format_cnpj, format_cpf, is_valid_cep_format};
use mr3x_docs::{DocumentClassifier, FeatureGate, Mr3xConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    Cpf,
    Cnpj,
    Cep,
    /// Live CPF/CNPJ field mask
    Input,
}

pub fn run_format(kind: FormatKind, value: &str, alphanumeric: bool) -> Result<()> {
    let formatted = match kind {
        FormatKind::Cpf => format_cpf(value),
        FormatKind::Cnpj => format_cnpj(value),
        FormatKind::Cep => {
            if !is_valid_cep_format(value) {
                anyhow::bail!("CEP deve ter 8 dígitos: {value}");
            }
            format_cep(value)
        }
        FormatKind::Input => {
            let gate = if alphanumeric {
                FeatureGate::ENABLED
            } else {
                Mr3xConfig::load()?.feature_gate()
            };
            DocumentClassifier::new(gate).format_input(value)
        }
    };

    println!("{formatted}");
    Ok(())
}
