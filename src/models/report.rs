use serde::Serialize;

use crate::text_processing::NormalizedNumber;

/// Result of one CLI conversion, serialized with `--json`
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionReport {
    pub fn success(input: &str, language: &str, words: String, normalized: Option<NormalizedNumber>) -> Self {
        Self {
            input: input.to_string(),
            language: language.to_string(),
            words: Some(words),
            normalized,
            error: None,
        }
    }

    pub fn failure(input: &str, language: &str, error: String) -> Self {
        Self {
            input: input.to_string(),
            language: language.to_string(),
            words: None,
            normalized: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
