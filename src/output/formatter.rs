use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::domain::{Scheme, Validation};
use crate::engine::DocumentMatch;
use crate::output::redact::{redact_document, RedactionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "tty" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Unknown format: {s}. Valid options: terminal, json"
            )),
        }
    }
}

/// One validated input as shown to the user.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub input: String,
    pub validation: Validation,
}

#[derive(Serialize)]
struct JsonValidation<'a> {
    input: &'a str,
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<Scheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a ValidationReport> for JsonValidation<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        let v = &report.validation;
        Self {
            input: &report.input,
            is_valid: v.is_valid(),
            formatted: v.formatted(),
            normalized: v.normalized(),
            scheme: v.scheme(),
            error: v.error().map(|e| e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct JsonMatch {
    line: usize,
    column: usize,
    document: String,
    scheme: Scheme,
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct Summary {
    valid: usize,
    invalid: usize,
}

#[derive(Serialize)]
struct JsonValidationOutput<'a> {
    results: Vec<JsonValidation<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonScanOutput {
    documents: Vec<JsonMatch>,
    summary: Summary,
}

#[must_use]
pub fn format_validations(reports: &[ValidationReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Terminal => format_validations_terminal(reports),
        OutputFormat::Json => format_validations_json(reports),
    }
}

#[must_use]
pub fn format_matches(
    matches: &[DocumentMatch],
    format: OutputFormat,
    redaction: &RedactionConfig,
) -> String {
    match format {
        OutputFormat::Terminal => format_matches_terminal(matches, redaction),
        OutputFormat::Json => format_matches_json(matches, redaction),
    }
}

fn format_validations_terminal(reports: &[ValidationReport]) -> String {
    let mut output = String::new();

    for report in reports {
        match &report.validation {
            Validation::Valid(doc) => {
                let _ = writeln!(
                    output,
                    "{} {} {} [{}]",
                    "✓".green().bold(),
                    report.input.bright_white(),
                    "→".bright_black(),
                    doc.scheme.label().bright_cyan()
                );
                let _ = writeln!(output, "    {}", doc.formatted.green());
            }
            Validation::Invalid(err) => {
                let _ = writeln!(
                    output,
                    "{} {} {} {}",
                    "✗".red().bold(),
                    report.input.bright_white(),
                    "→".bright_black(),
                    err.to_string().red()
                );
            }
        }
    }

    let valid = reports.iter().filter(|r| r.validation.is_valid()).count();
    let _ = writeln!(
        output,
        "\n{}",
        format!("{valid} válido(s), {} inválido(s)", reports.len() - valid).bold()
    );

    output
}

fn format_validations_json(reports: &[ValidationReport]) -> String {
    let valid = reports.iter().filter(|r| r.validation.is_valid()).count();
    let output = JsonValidationOutput {
        results: reports.iter().map(JsonValidation::from).collect(),
        summary: Summary {
            valid,
            invalid: reports.len() - valid,
        },
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

fn format_matches_terminal(matches: &[DocumentMatch], redaction: &RedactionConfig) -> String {
    let mut output = String::new();

    if matches.is_empty() {
        let _ = writeln!(output, "{}", "No documents found.".green().bold());
        return output;
    }

    for m in matches {
        let shown = redact_document(&m.raw, redaction);
        let status = match m.validation.error() {
            None => "VALID".red().bold(),
            Some(_) => "INVALID DV".yellow().bold(),
        };
        let _ = writeln!(
            output,
            "  [LINE {}:{}] {} {} {}",
            m.line.to_string().bright_white(),
            m.column.to_string().bright_white(),
            status,
            m.scheme.kind().to_string().bright_cyan(),
            shown
        );
    }

    let valid = matches.iter().filter(|m| m.validation.is_valid()).count();
    let _ = writeln!(
        output,
        "\n{}",
        format!(
            "{} document(s) found, {valid} with valid check digits.",
            matches.len()
        )
        .bold()
    );

    output
}

fn format_matches_json(matches: &[DocumentMatch], redaction: &RedactionConfig) -> String {
    let valid = matches.iter().filter(|m| m.validation.is_valid()).count();
    let output = JsonScanOutput {
        documents: matches
            .iter()
            .map(|m| JsonMatch {
                line: m.line,
                column: m.column,
                document: redact_document(&m.raw, redaction),
                scheme: m.scheme,
                is_valid: m.validation.is_valid(),
                error: m.validation.error().map(|e| e.to_string()),
            })
            .collect(),
        summary: Summary {
            valid,
            invalid: matches.len() - valid,
        },
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
