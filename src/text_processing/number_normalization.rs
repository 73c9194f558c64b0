/// Number-string normalization
///
/// Turns raw user input such as `"1.234.567,89"`, `" -42 "` or `"1,234"` into a
/// canonical decomposition (sign, integer digits, decimal digits). Handles both
/// US (`1,234.5`) and EU (`1.234,5`) separator conventions.
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizationOptions;
use crate::error::NormalizeError;

lazy_static! {
    /// Comma-grouped integer with an optional dot fraction: 1,234,567.89
    static ref US_GROUPED_REGEX: Regex = Regex::new(r"^\d{1,3}(,\d{3})+(\.\d+)?$").unwrap();

    /// Dot-grouped integer with an optional comma fraction: 1.234.567,89
    static ref EU_GROUPED_REGEX: Regex = Regex::new(r"^\d{1,3}(\.\d{3})+(,\d+)?$").unwrap();

    /// A single thousands group with no fraction: 1,000 or 12.500
    /// A zero head reads as a fraction instead (0.123, 0.001)
    static ref LONE_GROUP_REGEX: Regex = Regex::new(r"^[1-9]\d{0,2}[.,]\d{3}$").unwrap();

    /// Middle group too short to be a thousands group: 1.2.3, 123,45,67
    static ref SHORT_MIDDLE_GROUP_REGEX: Regex = Regex::new(r"\d+[.,]\d{1,2}[.,]\d+").unwrap();

    static ref DIGITS_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Canonical decomposition of a numeric string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedNumber {
    /// Raw input, kept for diagnostics
    pub original: String,
    /// Sign, digits and optional `.` fraction with separators removed
    pub normalized: String,
    /// Best-effort numeric value, advisory only
    pub value: f64,
    pub is_negative: bool,
    /// Digits without leading zeros ("0" for zero)
    pub integer_part: String,
    /// Fraction digits, truncated but otherwise verbatim
    pub decimal_part: String,
    pub has_decimal: bool,
}

/// Number normalizer with a fixed policy
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberNormalizer {
    options: NormalizationOptions,
}

impl NumberNormalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Normalize a raw numeric string
    ///
    /// Steps, in order:
    /// 1. Fold Unicode spaces and full-width forms to ASCII
    /// 2. Trim and sign detection
    /// 3. Character validation and optional exponent expansion
    /// 4. Separator disambiguation (US vs EU)
    /// 5. Component validation, leading-zero stripping and decimal truncation
    pub fn normalize(&self, raw: &str) -> Result<NormalizedNumber, NormalizeError> {
        let folded = fold_compat(raw);
        let mut body = folded.trim();

        if body.is_empty() {
            return Err(NormalizeError::EmptyInput);
        }

        let mut is_negative = false;
        if let Some(rest) = body.strip_prefix('-') {
            if !self.options.allow_negative {
                return Err(NormalizeError::NegativeNotAllowed);
            }
            is_negative = true;
            body = rest.trim();
            if body.is_empty() {
                return Err(NormalizeError::InvalidCharacters);
            }
        }

        if !body.chars().all(|ch| self.is_allowed_char(ch)) {
            return Err(NormalizeError::InvalidCharacters);
        }

        let expanded;
        if self.options.allow_scientific_notation && body.contains(|ch: char| ch == 'e' || ch == 'E') {
            expanded = expand_scientific(body)?;
            body = &expanded;
        }

        let (integer_raw, decimal_raw) = split_separators(body)?;

        let integer_digits: String = integer_raw
            .chars()
            .filter(|ch| !matches!(ch, ',' | '.') && !ch.is_whitespace())
            .collect();
        if !DIGITS_REGEX.is_match(&integer_digits) {
            return Err(NormalizeError::InvalidIntegerPart);
        }

        let mut decimal_part = match decimal_raw {
            Some(digits) if !digits.is_empty() => {
                if !DIGITS_REGEX.is_match(digits) {
                    return Err(NormalizeError::InvalidDecimalPart);
                }
                digits.to_string()
            }
            _ => String::new(),
        };

        let integer_part = match integer_digits.trim_start_matches('0') {
            "" => "0".to_string(),
            stripped => stripped.to_string(),
        };

        // Digits are ASCII, so byte truncation is safe
        decimal_part.truncate(self.options.max_decimals);
        let has_decimal = !decimal_part.is_empty();

        let mut normalized = String::with_capacity(integer_part.len() + decimal_part.len() + 2);
        if is_negative {
            normalized.push('-');
        }
        normalized.push_str(&integer_part);
        if has_decimal {
            normalized.push('.');
            normalized.push_str(&decimal_part);
        }

        let value = normalized.parse::<f64>().unwrap_or(f64::NAN);

        tracing::trace!(input = raw, normalized = %normalized, "Normalized number");

        Ok(NormalizedNumber {
            original: raw.to_string(),
            normalized,
            value,
            is_negative,
            integer_part,
            decimal_part,
            has_decimal,
        })
    }

    fn is_allowed_char(&self, ch: char) -> bool {
        match ch {
            '0'..='9' | ',' | '.' => true,
            'e' | 'E' | '+' | '-' => self.options.allow_scientific_notation,
            c => c.is_whitespace(),
        }
    }
}

/// Map Unicode spaces to ' ' and full-width forms to ASCII
///
/// Other compatibility characters (superscripts, circled digits) pass through
/// untouched so the allow-set rejects them.
fn fold_compat(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\u{FF01}'..='\u{FF5E}' => folded.extend(std::iter::once(ch).nfkc()),
            c if c.is_whitespace() => folded.push(' '),
            c => folded.push(c),
        }
    }
    folded
}

/// Normalize with the default policy
pub fn normalize(raw: &str) -> Result<NormalizedNumber, NormalizeError> {
    NumberNormalizer::default().normalize(raw)
}

/// Expand `1.2e3` style input into plain decimal digits
fn expand_scientific(body: &str) -> Result<String, NormalizeError> {
    let compact: String = body.chars().filter(|ch| !ch.is_whitespace()).collect();
    let number = compact
        .parse::<f64>()
        .map_err(|_| NormalizeError::InvalidScientificNotation)?;

    // f64's Display never uses exponent notation
    if !number.is_finite() || number.is_sign_negative() {
        return Err(NormalizeError::InvalidScientificNotation);
    }

    Ok(number.to_string())
}

/// Split a sign-free body into (integer, decimal) at the decimal marker
///
/// Grouping separators stay in the integer half; the caller strips them.
fn split_separators(body: &str) -> Result<(&str, Option<&str>), NormalizeError> {
    let dots = body.matches('.').count();
    let commas = body.matches(',').count();

    match dots + commas {
        0 => Ok((body, None)),
        1 => {
            if LONE_GROUP_REGEX.is_match(body) {
                tracing::debug!(input = body, "Lone separator read as thousands grouping");
                return Ok((body, None));
            }
            Ok(split_at_rightmost(body))
        }
        _ => {
            if US_GROUPED_REGEX.is_match(body) {
                tracing::debug!(input = body, "US grouping detected");
                return Ok(split_on(body, '.'));
            }
            if EU_GROUPED_REGEX.is_match(body) {
                tracing::debug!(input = body, "EU grouping detected");
                return Ok(split_on(body, ','));
            }
            if dots > 1 || commas > 1 || SHORT_MIDDLE_GROUP_REGEX.is_match(body) {
                return Err(NormalizeError::InvalidFormat);
            }
            Ok(split_at_rightmost(body))
        }
    }
}

fn split_on(body: &str, marker: char) -> (&str, Option<&str>) {
    match body.split_once(marker) {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (body, None),
    }
}

fn split_at_rightmost(body: &str) -> (&str, Option<&str>) {
    match body.rfind(|ch: char| ch == '.' || ch == ',') {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> NumberNormalizer {
        NumberNormalizer::default()
    }

    // ===== Basic functionality =====

    #[test]
    fn test_simple_numbers() {
        assert_eq!(normalize("123").unwrap().value, 123.0);
        assert_eq!(normalize("0").unwrap().value, 0.0);
        assert_eq!(normalize("  42  ").unwrap().value, 42.0);
    }

    #[test]
    fn test_negative_number() {
        let result = normalize("-42").unwrap();
        assert_eq!(result.value, -42.0);
        assert!(result.is_negative);
        assert_eq!(result.integer_part, "42");
        assert_eq!(result.normalized, "-42");
    }

    #[test]
    fn test_negative_rejected_by_policy() {
        let normalizer = NumberNormalizer::new(NormalizationOptions::default().with_negative(false));
        assert_eq!(normalizer.normalize("-5"), Err(NormalizeError::NegativeNotAllowed));
    }

    #[test]
    fn test_decimal_number() {
        let result = normalize("123.45").unwrap();
        assert_eq!(result.value, 123.45);
        assert!(result.has_decimal);
        assert_eq!(result.integer_part, "123");
        assert_eq!(result.decimal_part, "45");
    }

    #[test]
    fn test_max_decimals_truncates() {
        let normalizer = NumberNormalizer::new(NormalizationOptions::default().with_max_decimals(2));
        let result = normalizer.normalize("123.4567").unwrap();
        assert_eq!(result.decimal_part, "45");
        assert_eq!(result.normalized, "123.45");
    }

    #[test]
    fn test_zero_max_decimals_drops_fraction() {
        let normalizer = NumberNormalizer::new(NormalizationOptions::default().with_max_decimals(0));
        let result = normalizer.normalize("7.25").unwrap();
        assert!(!result.has_decimal);
        assert_eq!(result.normalized, "7");
    }

    #[test]
    fn test_original_preserved() {
        let result = normalize(" 1.234,5 ").unwrap();
        assert_eq!(result.original, " 1.234,5 ");
    }

    // ===== Characters and scientific notation =====

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(normalize("123abc"), Err(NormalizeError::InvalidCharacters));
        assert_eq!(normalize("$123"), Err(NormalizeError::InvalidCharacters));
        assert_eq!(normalize("1.2e3"), Err(NormalizeError::InvalidCharacters));
        assert_eq!(normalize("--5"), Err(NormalizeError::InvalidCharacters));
    }

    #[test]
    fn test_bare_sign_is_invalid_characters() {
        assert_eq!(normalize("-"), Err(NormalizeError::InvalidCharacters));
        assert_eq!(normalize("- "), Err(NormalizeError::InvalidCharacters));
        assert_eq!(normalize(" - "), Err(NormalizeError::InvalidCharacters));
    }

    #[test]
    fn test_scientific_notation_when_enabled() {
        let normalizer =
            NumberNormalizer::new(NormalizationOptions::default().with_scientific_notation(true));
        assert_eq!(normalizer.normalize("1.2e3").unwrap().integer_part, "1200");

        let small = normalizer.normalize("5e-3").unwrap();
        assert_eq!(small.integer_part, "0");
        assert_eq!(small.decimal_part, "005");
    }

    #[test]
    fn test_invalid_scientific_notation() {
        let normalizer =
            NumberNormalizer::new(NormalizationOptions::default().with_scientific_notation(true));
        assert_eq!(
            normalizer.normalize("1e2e3"),
            Err(NormalizeError::InvalidScientificNotation)
        );
        assert_eq!(
            normalizer.normalize("1e999"),
            Err(NormalizeError::InvalidScientificNotation)
        );
    }

    #[test]
    fn test_unicode_spaces_and_digits_folded() {
        assert_eq!(normalize("1\u{00A0}234").unwrap().integer_part, "1234");
        assert_eq!(normalize("1\u{202F}234").unwrap().integer_part, "1234");
        assert_eq!(normalize("\u{FF11}\u{FF12}").unwrap().integer_part, "12");
        assert_eq!(normalize("\u{FF11}\u{FF0C}\u{FF15}").unwrap().decimal_part, "5");
    }

    #[test]
    fn test_compatibility_digits_rejected() {
        for input in ["10\u{00B2}", "2\u{00B3}", "\u{2460}\u{2461}", "\u{2083}"] {
            assert_eq!(normalize(input), Err(NormalizeError::InvalidCharacters), "input {:?}", input);
        }
    }

    #[test]
    fn test_internal_whitespace_allowed() {
        assert_eq!(normalize("1 234").unwrap().integer_part, "1234");
    }

    // ===== Separator disambiguation =====

    #[test]
    fn test_us_thousands() {
        assert_eq!(normalize("1,234,567").unwrap().value, 1234567.0);
        let result = normalize("1,234,567.89").unwrap();
        assert_eq!(result.integer_part, "1234567");
        assert_eq!(result.decimal_part, "89");
    }

    #[test]
    fn test_eu_thousands() {
        assert_eq!(normalize("1.234.567").unwrap().value, 1234567.0);
        let result = normalize("1.234.567,89").unwrap();
        assert_eq!(result.integer_part, "1234567");
        assert_eq!(result.decimal_part, "89");
    }

    #[test]
    fn test_lone_group_is_thousands() {
        let cases = [
            ("1,234", "1234"),
            ("1.234", "1234"),
            ("1,000", "1000"),
            ("10,000", "10000"),
            ("100,000", "100000"),
            ("1.000", "1000"),
            ("2,050", "2050"),
            ("1.001", "1001"),
        ];
        for (input, integer) in cases {
            let result = normalize(input).unwrap();
            assert_eq!(result.integer_part, integer, "input {}", input);
            assert!(!result.has_decimal, "input {}", input);
            assert_eq!(result.normalized, integer);
        }
        assert_eq!(normalize("-1,234").unwrap().normalized, "-1234");
        assert_eq!(normalize("-1,000").unwrap().normalized, "-1000");
    }

    #[test]
    fn test_lone_separator_with_zero_lead_is_decimal() {
        let result = normalize("0.123").unwrap();
        assert_eq!(result.integer_part, "0");
        assert_eq!(result.decimal_part, "123");

        let result = normalize("0,001").unwrap();
        assert_eq!(result.integer_part, "0");
        assert_eq!(result.decimal_part, "001");
    }

    #[test]
    fn test_lone_separator_long_fraction_is_decimal() {
        let result = normalize("1.2345").unwrap();
        assert_eq!(result.decimal_part, "2345");
        let result = normalize("1234.567").unwrap();
        assert_eq!(result.integer_part, "1234");
        assert_eq!(result.decimal_part, "567");
    }

    #[test]
    fn test_alternative_decimal_separators() {
        assert_eq!(normalize("123,45").unwrap().value, 123.45);
        assert_eq!(normalize("123.45").unwrap().value, 123.45);
        assert_eq!(normalize("1,23").unwrap().decimal_part, "23");
    }

    #[test]
    fn test_multiple_separators_rejected() {
        for input in ["1.2.3", "1,2,3", "123.45.67", "123,45,67", "1.2.3.4", "1..23", "1,,23"] {
            assert_eq!(normalize(input), Err(NormalizeError::InvalidFormat), "input {}", input);
        }
    }

    #[test]
    fn test_mixed_separators_rejected() {
        assert_eq!(normalize("1,234.567,89"), Err(NormalizeError::InvalidFormat));
        assert_eq!(normalize("1.234,567.89"), Err(NormalizeError::InvalidFormat));
        assert_eq!(normalize("1,23.4"), Err(NormalizeError::InvalidFormat));
    }

    #[test]
    fn test_rightmost_separator_is_decimal_marker() {
        let result = normalize("12.3456,7").unwrap();
        assert_eq!(result.integer_part, "123456");
        assert_eq!(result.decimal_part, "7");
    }

    #[test]
    fn test_missing_integer_digits() {
        assert_eq!(normalize(".5"), Err(NormalizeError::InvalidIntegerPart));
    }

    #[test]
    fn test_trailing_separator_has_no_decimal() {
        let result = normalize("5.").unwrap();
        assert_eq!(result.integer_part, "5");
        assert!(!result.has_decimal);
    }

    #[test]
    fn test_whitespace_inside_fraction_rejected() {
        assert_eq!(normalize("1.2 3"), Err(NormalizeError::InvalidDecimalPart));
    }

    // ===== Edge cases =====

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), Err(NormalizeError::EmptyInput));
        assert_eq!(normalize("   "), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(normalize("000123").unwrap().integer_part, "123");
        assert_eq!(
            normalize("000123").unwrap().integer_part,
            normalize("123").unwrap().integer_part
        );
        assert_eq!(normalize("000123.450").unwrap().decimal_part, "450");
    }

    #[test]
    fn test_only_zeros() {
        let result = normalize("0000").unwrap();
        assert_eq!(result.integer_part, "0");
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_large_integer_kept_exact() {
        let digits = "123456789012345678901234567890";
        assert_eq!(normalize(digits).unwrap().integer_part, digits);
    }

    #[test]
    fn test_options_accessor() {
        let normalizer = normalizer();
        assert_eq!(normalizer.options().max_decimals, 20);
    }
}
