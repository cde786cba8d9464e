#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub enabled: bool,
    pub visible_chars: usize,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            visible_chars: 2,
        }
    }
}

/// Mask the middle of a document number, keeping separators in place.
/// `529.982.247-25` becomes `52*.***.***-25` with two visible chars each side.
#[must_use]
pub fn redact_document(document: &str, config: &RedactionConfig) -> String {
    if !config.enabled {
        return document.to_string();
    }

    let total = document.chars().filter(char::is_ascii_alphanumeric).count();
    if total <= config.visible_chars * 2 {
        return "[REDACTED]".to_string();
    }

    let keep_until = config.visible_chars;
    let keep_from = total - config.visible_chars;
    let mut seen = 0;

    document
        .chars()
        .map(|c| {
            if !c.is_ascii_alphanumeric() {
                return c;
            }
            let pos = seen;
            seen += 1;
            if pos < keep_until || pos >= keep_from {
                c
            } else {
                '*'
            }
        })
        .collect()
}
