/// Per-language word engines
///
/// Every language is a vocabulary table plus a set of strategy functions. English
/// runs the shared scale algorithm in `base`, Spanish swaps in its own
/// below-thousand and scale assembly, Romanian brings a separate agreement-aware
/// algorithm.
pub mod base;
pub mod english;
pub mod romanian;
pub mod spanish;

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::ConvertError;
use crate::text_processing::whitespace::collapse_whitespace;

/// Name of one power-of-1000 scale group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleName {
    /// Form used when the count is one
    pub singular: &'static str,
    /// Form used for every other count
    pub plural: &'static str,
}

impl ScaleName {
    pub const fn invariant(name: &'static str) -> Self {
        Self {
            singular: name,
            plural: name,
        }
    }

    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }
}

/// Static vocabulary for one language
#[derive(Debug)]
pub struct WordTable {
    pub ones: [&'static str; 10],
    /// 10 through 19
    pub teens: [&'static str; 10],
    /// Multiples of ten, slots 0 and 1 unused by the tens rule
    pub tens: [&'static str; 10],
    pub hundred: &'static str,
    /// Index 0 is the thousands group
    pub scales: &'static [ScaleName],
    pub zero: &'static str,
    pub negative: &'static str,
    pub separator: &'static str,
}

/// What a converter does when strict conversion fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Surface the error to the caller
    Raise,
    /// Try the engine's fallback parser, then return the sentinel
    ReturnSentinel(&'static str),
}

/// Vocabulary plus the strategy functions a language plugs in
pub struct Engine {
    pub table: &'static WordTable,
    pub below_thousand: fn(&WordTable, u32) -> String,
    pub scale_words: fn(&Engine, &BigUint) -> String,
    pub decimal_words: fn(&WordTable, &str) -> String,
    pub on_failure: FailurePolicy,
    pub fallback: Option<fn(&Engine, &str) -> Option<String>>,
}

impl Engine {
    /// Words for a non-negative integer of any size
    pub fn integer_words(&self, magnitude: &BigUint) -> String {
        (self.scale_words)(self, magnitude)
    }

    /// Build `[negative] <integer> [separator <decimals>]`
    pub fn assemble(&self, is_negative: bool, magnitude: &BigUint, decimals: Option<&str>) -> String {
        let mut phrase = String::new();

        if is_negative {
            phrase.push_str(self.table.negative);
            phrase.push(' ');
        }

        phrase.push_str(&self.integer_words(magnitude));

        if let Some(digits) = decimals.filter(|d| !d.is_empty()) {
            phrase.push(' ');
            phrase.push_str(self.table.separator);
            phrase.push(' ');
            phrase.push_str(&(self.decimal_words)(self.table, digits));
        }

        collapse_whitespace(&phrase)
    }
}

/// Supported output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Romanian,
    Spanish,
}

impl Language {
    /// All languages in registration order
    pub fn all() -> Vec<Language> {
        vec![Language::English, Language::Romanian, Language::Spanish]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Romanian => "ro",
            Language::Spanish => "es",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Romanian => "Romanian",
            Language::Spanish => "Spanish",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        Self::all().into_iter().find(|language| language.tag() == tag)
    }

    /// Engine selected for this language
    pub fn engine(self) -> &'static Engine {
        match self {
            Language::English => &english::ENGINE,
            Language::Romanian => &romanian::ENGINE,
            Language::Spanish => &spanish::ENGINE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = ConvertError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Language::from_tag(tag).ok_or_else(|| ConvertError::UnsupportedLanguage(tag.to_string()))
    }
}
