// Library modules for the binaries and integration tests
pub mod config;
pub mod converter;
pub mod error;
pub mod languages;
pub mod logging;
pub mod models;
pub mod registry;
pub mod text_processing;

pub use config::constants::DEFAULT_LANGUAGE;
pub use config::NormalizationOptions;
pub use converter::NumberToWords;
pub use error::{ConvertError, NormalizeError, Result};
pub use languages::Language;
pub use registry::{create_converter, create_converter_with_options, is_language_supported, supported_languages};
pub use text_processing::{normalize, NormalizedNumber, NumberNormalizer};

/// Convert `raw` into words in the language named by `tag`
///
/// Pass [`DEFAULT_LANGUAGE`] for English.
pub fn number_to_words(raw: &str, tag: &str) -> Result<String> {
    create_converter(tag)?.convert(raw)
}
