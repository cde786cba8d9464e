pub const PRESET_DEFAULT: &str = r"[documents]
alphanumeric_cnpj = false

[output]
redact_documents = true
redact_visible_chars = 2
";

pub const PRESET_ALPHANUMERIC: &str = r"[documents]
alphanumeric_cnpj = true

[output]
redact_documents = true
redact_visible_chars = 2
";
