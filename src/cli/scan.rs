use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use mr3x_docs::output::{format_matches, OutputFormat};
use mr3x_docs::{find_documents, FeatureGate, Mr3xConfig};

pub fn run_scan(
    file: Option<&Path>,
    format: OutputFormat,
    no_redact: bool,
    alphanumeric: bool,
) -> Result<()> {
    let config = Mr3xConfig::load().context("Failed to load mr3x.toml")?;

    let content = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let gate = if alphanumeric {
        FeatureGate::ENABLED
    } else {
        config.feature_gate()
    };

    let mut redaction = config.redaction();
    if no_redact {
        redaction.enabled = false;
    }

    let matches = find_documents(&content, gate);
    tracing::debug!(found = matches.len(), "scan finished");

    println!("{}", format_matches(&matches, format, &redaction).trim_end());

    if matches.iter().any(|m| m.validation.is_valid()) {
        std::process::exit(1);
    }

    Ok(())
}
