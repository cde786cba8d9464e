use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::engine::{parse_flag, FeatureGate, CNPJ_2026_ENV};
use crate::error::{Mr3xError, Result};
use crate::output::RedactionConfig;

pub const CONFIG_FILE: &str = "mr3x.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Mr3xConfig {
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DocumentsConfig {
    /// Accept alphanumeric ("2026") CNPJs.
    #[serde(default)]
    pub alphanumeric_cnpj: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub redact_documents: bool,
    #[serde(default = "default_visible_chars")]
    pub redact_visible_chars: usize,
}

fn default_true() -> bool {
    true
}

fn default_visible_chars() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            redact_documents: default_true(),
            redact_visible_chars: default_visible_chars(),
        }
    }
}

impl Mr3xConfig {
    /// Load `mr3x.toml` from the working directory (defaults when absent),
    /// then let `MR3X_CNPJ_2026` override the document gate.
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);
        let config = if config_path.exists() {
            Self::load_from(config_path)?
        } else {
            Self::default()
        };
        Ok(config.with_gate_override(std::env::var(CNPJ_2026_ENV).ok().as_deref()))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config = Self::parse(&content)?;
        debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Mr3xConfig =
            toml::from_str(content).map_err(|e| Mr3xError::Toml(e.to_string()))?;
        if config.output.redact_documents && config.output.redact_visible_chars > 6 {
            return Err(Mr3xError::Config(format!(
                "redact_visible_chars must be at most 6, got {}",
                config.output.redact_visible_chars
            )));
        }
        Ok(config)
    }

    /// A set environment value wins over the file; unset leaves it alone.
    #[must_use]
    pub fn with_gate_override(mut self, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.documents.alphanumeric_cnpj = parse_flag(v);
        }
        self
    }

    #[must_use]
    pub fn feature_gate(&self) -> FeatureGate {
        FeatureGate::new(self.documents.alphanumeric_cnpj)
    }

    #[must_use]
    pub fn redaction(&self) -> RedactionConfig {
        RedactionConfig {
            enabled: self.output.redact_documents,
            visible_chars: self.output.redact_visible_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Mr3xConfig::default();
        assert!(!config.documents.alphanumeric_cnpj);
        assert!(config.output.redact_documents);
        assert_eq!(config.output.redact_visible_chars, 2);
        assert_eq!(config.feature_gate(), FeatureGate::DISABLED);
    }

    #[test]
    fn test_parse_valid_toml() {
        let config = Mr3xConfig::parse(
            r"
[documents]
alphanumeric_cnpj = true

[output]
redact_visible_chars = 3
",
        )
        .unwrap();
        assert_eq!(config.feature_gate(), FeatureGate::ENABLED);
        assert_eq!(config.redaction().visible_chars, 3);
        assert!(config.redaction().enabled);
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(matches!(
            Mr3xConfig::parse("[documents\nalphanumeric_cnpj = 1"),
            Err(Mr3xError::Toml(_))
        ));
    }

    #[test]
    fn test_parse_rejects_wide_redaction() {
        assert!(matches!(
            Mr3xConfig::parse("[output]\nredact_visible_chars = 7"),
            Err(Mr3xError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[documents]\nalphanumeric_cnpj = true\n").unwrap();
        let config = Mr3xConfig::load_from(&config_path).unwrap();
        assert!(config.documents.alphanumeric_cnpj);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = Mr3xConfig::load_from(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(Mr3xError::Io(_))));
    }

    #[test]
    fn test_gate_override() {
        let on = Mr3xConfig::default().with_gate_override(Some("1"));
        assert!(on.documents.alphanumeric_cnpj);

        let off = on.clone().with_gate_override(Some("yes"));
        assert!(!off.documents.alphanumeric_cnpj);

        let kept = on.with_gate_override(None);
        assert!(kept.documents.alphanumeric_cnpj);
    }
}
