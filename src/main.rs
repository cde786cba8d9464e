mod cli;
mod presets;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use cli::format::FormatKind;
use mr3x_docs::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "mr3x-docs",
    about = "MR3X document validator - CPF, CNPJ and CEP",
    version
)]
enum Cli {
    /// Validate CPF/CNPJ numbers
    Validate(ValidateArgs),
    /// Apply a display mask to a value
    Format(FormatArgs),
    /// Find CPF/CNPJ numbers in a file (or stdin)
    Scan(ScanArgs),
    /// Write a default mr3x.toml
    Init(InitArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
struct ValidateArgs {
    #[arg(required = true, help = "Documents to validate (punctuation is ignored)")]
    documents: Vec<String>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json"
    )]
    format: OutputFormat,

    #[arg(long, help = "Accept alphanumeric (2026) CNPJs regardless of config")]
    alphanumeric: bool,

    #[arg(
        long,
        conflicts_with = "alphanumeric",
        help = "Digits only: 11 for CPF, 14 for CNPJ"
    )]
    legacy: bool,
}

#[derive(Parser)]
struct FormatArgs {
    #[arg(value_enum, help = "Mask to apply")]
    kind: FormatKind,

    value: String,

    #[arg(long, help = "Allow letters when formatting live input")]
    alphanumeric: bool,
}

#[derive(Parser)]
struct ScanArgs {
    #[arg(help = "File to scan (reads stdin if omitted)")]
    file: Option<PathBuf>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json"
    )]
    format: OutputFormat,

    #[arg(long, help = "Disable document redaction (show full numbers)")]
    no_redact: bool,

    #[arg(long, help = "Also look for alphanumeric (2026) CNPJs")]
    alphanumeric: bool,
}

#[derive(Parser)]
struct InitArgs {
    #[arg(
        long,
        default_value = "default",
        value_parser = ["default", "alphanumeric"],
        help = "Configuration preset: default, alphanumeric"
    )]
    preset: String,

    #[arg(long, help = "Overwrite existing mr3x.toml if it already exists")]
    force: bool,
}

#[derive(Parser)]
struct CompletionsArgs {
    #[arg(help = "Target shell: bash, zsh, fish, elvish, powershell")]
    shell: Shell,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Cli::Validate(args) => cli::validate::run_validate(
            &args.documents,
            args.format,
            args.alphanumeric,
            args.legacy,
        ),
        Cli::Format(args) => cli::format::run_format(args.kind, &args.value, args.alphanumeric),
        Cli::Scan(args) => cli::scan::run_scan(
            args.file.as_deref(),
            args.format,
            args.no_redact,
            args.alphanumeric,
        ),
        Cli::Init(args) => cli::init::run_init(&args.preset, args.force),
        Cli::Completions(args) => {
            generate(
                args.shell,
                &mut Cli::command(),
                "mr3x-docs",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
