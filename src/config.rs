//! Limits for equivalence checking.

/// Environment variable overriding [`CheckConfig::max_pairs`].
pub const MAX_PAIRS_VAR: &str = "RELCALC_MAX_PAIRS";
/// Environment variable overriding [`CheckConfig::max_violations`].
pub const MAX_VIOLATIONS_VAR: &str = "RELCALC_MAX_VIOLATIONS";

/// Limits applied by a [`Checker`](crate::equiv::Checker).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Refuse checks whose `|domain| * |codomain|` is larger than this
    pub max_pairs: usize,
    /// Stop collecting counterexamples after this many (per direction)
    pub max_violations: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_pairs: 1 << 20,
            max_violations: 16,
        }
    }
}

impl CheckConfig {
    /// Defaults, overridden by `RELCALC_MAX_PAIRS` / `RELCALC_MAX_VIOLATIONS`
    /// when set to a valid number.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(n) = lookup(MAX_PAIRS_VAR).and_then(|v| v.trim().parse().ok()) {
            config.max_pairs = n;
        }
        if let Some(n) = lookup(MAX_VIOLATIONS_VAR).and_then(|v| v.trim().parse().ok()) {
            config.max_violations = n;
        }
        config
    }

    pub fn with_max_pairs(mut self, max_pairs: usize) -> Self {
        self.max_pairs = max_pairs;
        self
    }

    pub fn with_max_violations(mut self, max_violations: usize) -> Self {
        self.max_violations = max_violations;
        self
    }
}
