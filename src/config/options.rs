use std::env;

use super::constants::{DEFAULT_MAX_DECIMALS, ENV_PREFIX};

/// Policy applied by the number normalizer
///
/// Resolved once when a converter is built and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// Accept a leading `-` (default: true)
    pub allow_negative: bool,

    /// Decimal digits kept after the marker, excess is truncated (default: 20)
    pub max_decimals: usize,

    /// Parse `e`/`E` exponents instead of rejecting them (default: false)
    pub allow_scientific_notation: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            allow_negative: true,
            max_decimals: DEFAULT_MAX_DECIMALS,
            allow_scientific_notation: false,
        }
    }
}

impl NormalizationOptions {
    /// Load normalization policy from environment variables
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Some(val) = read_var("ALLOW_NEGATIVE") {
            options.allow_negative = val.to_lowercase() == "true";
        }

        if let Some(val) = read_var("MAX_DECIMALS") {
            match val.parse() {
                Ok(max) => options.max_decimals = max,
                Err(_) => tracing::warn!(value = %val, "Ignoring invalid max decimals setting"),
            }
        }

        if let Some(val) = read_var("ALLOW_SCIENTIFIC") {
            options.allow_scientific_notation = val.to_lowercase() == "true";
        }

        options
    }

    pub fn with_max_decimals(mut self, max_decimals: usize) -> Self {
        self.max_decimals = max_decimals;
        self
    }

    pub fn with_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    pub fn with_scientific_notation(mut self, allow: bool) -> Self {
        self.allow_scientific_notation = allow;
        self
    }
}

fn read_var(suffix: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, suffix)).ok()
}
