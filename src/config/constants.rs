/// Maximum number of decimal digits kept after the decimal marker
///
/// Excess digits are truncated, never rounded.
pub const DEFAULT_MAX_DECIMALS: usize = 20;

/// Language used when the caller does not pick one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Phrase the Romanian engine yields for magnitudes above one decillion
pub const ROMANIAN_OVER_LIMIT: &str = "peste limita";

/// Sentinel the Romanian engine returns when no parse succeeds
pub const ROMANIAN_SENTINEL: &str = "NaN";

/// Prefix shared by every environment variable the crate reads
pub const ENV_PREFIX: &str = "SPOKEN_NUMBERS_";
