/// Number-to-words converter bound to one language
use num_bigint::BigUint;

use crate::config::NormalizationOptions;
use crate::error::{ConvertError, NormalizeError, Result};
use crate::languages::{FailurePolicy, Language};
use crate::text_processing::{NormalizedNumber, NumberNormalizer};

/// Converts numeric strings into spoken words for a single language
#[derive(Debug, Clone, Copy)]
pub struct NumberToWords {
    language: Language,
    normalizer: NumberNormalizer,
}

impl NumberToWords {
    pub fn new(language: Language) -> Self {
        Self::with_options(language, NormalizationOptions::default())
    }

    pub fn with_options(language: Language, options: NormalizationOptions) -> Self {
        Self {
            language,
            normalizer: NumberNormalizer::new(options),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Run only the normalization step, for diagnostics
    pub fn normalize(&self, raw: &str) -> Result<NormalizedNumber> {
        Ok(self.normalizer.normalize(raw)?)
    }

    /// Convert a raw numeric string into words
    ///
    /// English and Spanish surface normalization failures. Romanian retries with
    /// a loose parse and returns "NaN" when that also finds nothing.
    pub fn convert(&self, raw: &str) -> Result<String> {
        let engine = self.language.engine();

        let err = match self.convert_strict(raw) {
            Ok(words) => return Ok(words),
            Err(err) => err,
        };

        match engine.on_failure {
            FailurePolicy::Raise => Err(err),
            FailurePolicy::ReturnSentinel(sentinel) => {
                tracing::warn!(
                    input = raw,
                    language = %self.language,
                    error = %err,
                    "Strict conversion failed, using loose parse"
                );
                let words = engine
                    .fallback
                    .and_then(|fallback| fallback(engine, raw))
                    .unwrap_or_else(|| sentinel.to_string());
                Ok(words)
            }
        }
    }

    fn convert_strict(&self, raw: &str) -> Result<String> {
        let number = self.normalize(raw)?;

        let magnitude: BigUint = number
            .integer_part
            .parse()
            .map_err(|_| ConvertError::from(NormalizeError::InvalidIntegerPart))?;
        let decimals = number.has_decimal.then_some(number.decimal_part.as_str());

        let words = self
            .language
            .engine()
            .assemble(number.is_negative, &magnitude, decimals);

        tracing::trace!(input = raw, language = %self.language, words = %words, "Converted number");

        Ok(words)
    }
}

impl Default for NumberToWords {
    fn default() -> Self {
        Self::new(Language::English)
    }
}
