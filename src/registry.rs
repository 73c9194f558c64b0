/// Language registry
///
/// Maps language tags ("en", "ro", "es") to converters.
use crate::config::NormalizationOptions;
use crate::converter::NumberToWords;
use crate::error::Result;
use crate::languages::Language;

/// Build a converter for `tag` with default normalization options
pub fn create_converter(tag: &str) -> Result<NumberToWords> {
    create_converter_with_options(tag, NormalizationOptions::default())
}

pub fn create_converter_with_options(tag: &str, options: NormalizationOptions) -> Result<NumberToWords> {
    let language: Language = tag.parse()?;
    tracing::debug!(language = %language, "Created converter");
    Ok(NumberToWords::with_options(language, options))
}

/// Registered language tags
pub fn supported_languages() -> Vec<&'static str> {
    Language::all().into_iter().map(Language::tag).collect()
}

pub fn is_language_supported(tag: &str) -> bool {
    Language::from_tag(tag).is_some()
}
