/// Environment variable that enables the alphanumeric CNPJ scheme.
pub const CNPJ_2026_ENV: &str = "MR3X_CNPJ_2026";

/// Whether alphanumeric ("2026") CNPJs are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureGate {
    alphanumeric_cnpj: bool,
}

impl FeatureGate {
    pub const ENABLED: Self = Self {
        alphanumeric_cnpj: true,
    };
    pub const DISABLED: Self = Self {
        alphanumeric_cnpj: false,
    };

    #[must_use]
    pub const fn new(alphanumeric_cnpj: bool) -> Self {
        Self { alphanumeric_cnpj }
    }

    /// Read the gate from the process environment. Not memoized.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(CNPJ_2026_ENV).ok().as_deref())
    }

    /// Interpret a raw flag value; unset means disabled.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        Self::new(value.is_some_and(parse_flag))
    }

    #[must_use]
    pub const fn alphanumeric_cnpj(self) -> bool {
        self.alphanumeric_cnpj
    }
}

/// Only the exact strings `"true"` and `"1"` switch a flag on.
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(value, "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_true_and_one() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
    }

    #[test]
    fn test_parse_flag_is_exact() {
        assert!(!parse_flag("TRUE"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag(" 1"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_from_value() {
        assert_eq!(FeatureGate::from_value(None), FeatureGate::DISABLED);
        assert_eq!(FeatureGate::from_value(Some("1")), FeatureGate::ENABLED);
        assert_eq!(FeatureGate::from_value(Some("false")), FeatureGate::DISABLED);
    }

    #[test]
    fn test_default_is_disabled() {
        assert!(!FeatureGate::default().alphanumeric_cnpj());
    }
}
