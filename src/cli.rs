/// CLI argument parsing and help text
use std::fmt;

use spoken_numbers::{supported_languages, Language};

/// What the binary was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Convert,
    Normalize,
    ListLanguages,
    Help,
    Version,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: Mode,
    /// Explicit `--lang` value, overrides `SPOKEN_NUMBERS_LANG`
    pub language: Option<String>,
    pub json: bool,
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    MissingValue(String),
    UnknownOption(String),
    NoNumbers,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            CliError::UnknownOption(flag) => write!(f, "Unknown option: {}", flag),
            CliError::NoNumbers => write!(f, "No numbers given"),
        }
    }
}

impl std::error::Error for CliError {}

/// Anything starting with `-` followed by a digit, dot or comma is a number
fn looks_numeric(arg: &str) -> bool {
    arg.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .map(|ch| ch.is_ascii_digit() || ch == '.' || ch == ',')
        .unwrap_or(false)
}

/// Parse arguments, excluding the program name
pub fn parse_args(args: &[String]) -> Result<CliArgs, CliError> {
    let mut parsed = CliArgs {
        mode: Mode::Convert,
        language: None,
        json: false,
        numbers: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliArgs { mode: Mode::Help, ..parsed }),
            "-v" | "--version" => return Ok(CliArgs { mode: Mode::Version, ..parsed }),
            "--languages" => parsed.mode = Mode::ListLanguages,
            "--normalize" => parsed.mode = Mode::Normalize,
            "--json" => parsed.json = true,
            "-l" | "--lang" => {
                let tag = iter.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                parsed.language = Some(tag.clone());
            }
            "--" => {
                parsed.numbers.extend(iter.by_ref().cloned());
            }
            flag if flag.starts_with('-') && !looks_numeric(flag) => {
                if let Some(tag) = flag.strip_prefix("--lang=") {
                    parsed.language = Some(tag.to_string());
                } else {
                    return Err(CliError::UnknownOption(flag.to_string()));
                }
            }
            number => parsed.numbers.push(number.to_string()),
        }
    }

    if parsed.numbers.is_empty() && matches!(parsed.mode, Mode::Convert | Mode::Normalize) {
        return Err(CliError::NoNumbers);
    }

    Ok(parsed)
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("spoken_numbers v{}", version);
    println!("Convert numeric strings to spoken words");
    println!();
    println!("USAGE:");
    println!("    spoken_numbers [OPTIONS] <NUMBER>...");
    println!();
    println!("OPTIONS:");
    println!("    -l, --lang <TAG>      Output language (default: en)");
    println!("    --json                Print one JSON report per number");
    println!("    --normalize           Print the normalized decomposition as JSON");
    println!("    --languages           List supported languages");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    spoken_numbers 1,234.56");
    println!("    spoken_numbers --lang ro 1.234,56");
    println!("    spoken_numbers --lang es --json 21 100 1000000");
    println!("    spoken_numbers --normalize \"1 234 567,8\"");
    println!();
    println!("LANGUAGES:");
    println!("    {}", supported_languages().join(", "));
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    SPOKEN_NUMBERS_LANG              - Default output language");
    println!("    SPOKEN_NUMBERS_ALLOW_NEGATIVE    - Accept negative numbers (default: true)");
    println!("    SPOKEN_NUMBERS_MAX_DECIMALS      - Decimal digits kept (default: 20)");
    println!("    SPOKEN_NUMBERS_ALLOW_SCIENTIFIC  - Accept 1.5e3 style input (default: false)");
    println!("    SPOKEN_NUMBERS_LOG_FORMAT        - Log format (compact/pretty/json)");
    println!("    RUST_LOG                         - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be placed in a .env file in the current directory");
}

pub fn print_version() {
    println!("spoken_numbers v{}", env!("CARGO_PKG_VERSION"));
}

pub fn print_languages() {
    for language in Language::all() {
        println!("{}  {}", language.tag(), language.name());
    }
}
