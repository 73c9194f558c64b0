use std::fmt;

/// Reasons a numeric string cannot be normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    // Input shape errors
    EmptyInput,
    NegativeNotAllowed,
    InvalidCharacters,
    InvalidScientificNotation,

    // Separator errors
    InvalidFormat,

    // Component errors
    InvalidIntegerPart,
    InvalidDecimalPart,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::EmptyInput => write!(f, "Empty input"),
            NormalizeError::NegativeNotAllowed => write!(f, "Negative numbers are not allowed"),
            NormalizeError::InvalidCharacters => write!(f, "Invalid characters in number string"),
            NormalizeError::InvalidScientificNotation => write!(f, "Invalid scientific notation"),
            NormalizeError::InvalidFormat => {
                write!(f, "Invalid number format: multiple decimal separators")
            }
            NormalizeError::InvalidIntegerPart => write!(f, "Invalid integer part"),
            NormalizeError::InvalidDecimalPart => write!(f, "Invalid decimal part"),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Errors surfaced by converters and the language registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input could not be normalized
    ConversionFailed(NormalizeError),

    /// No engine is registered for the requested tag
    UnsupportedLanguage(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ConversionFailed(cause) => {
                write!(f, "Failed to convert number: {}", cause)
            }
            ConvertError::UnsupportedLanguage(tag) => write!(f, "Unsupported language: {}", tag),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::ConversionFailed(cause) => Some(cause),
            ConvertError::UnsupportedLanguage(_) => None,
        }
    }
}

// Conversions
impl From<NormalizeError> for ConvertError {
    fn from(err: NormalizeError) -> Self {
        ConvertError::ConversionFailed(err)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_failed_carries_cause_message() {
        let err = ConvertError::from(NormalizeError::InvalidFormat);
        assert_eq!(
            err.to_string(),
            "Failed to convert number: Invalid number format: multiple decimal separators"
        );
    }

    #[test]
    fn test_unsupported_language_names_tag() {
        let err = ConvertError::UnsupportedLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Unsupported language: fr");
    }

    #[test]
    fn test_source_is_normalize_error() {
        use std::error::Error;

        let err = ConvertError::ConversionFailed(NormalizeError::EmptyInput);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Empty input"));
    }
}
