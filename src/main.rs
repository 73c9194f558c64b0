mod cli;

use std::env;
use std::process::ExitCode;

use cli::{CliArgs, Mode};
use spoken_numbers::logging::{init_logging, LogConfig};
use spoken_numbers::models::ConversionReport;
use spoken_numbers::{create_converter_with_options, NormalizationOptions, NumberToWords, DEFAULT_LANGUAGE};

fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let log_config = LogConfig::from_env();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let raw_args: Vec<String> = env::args().skip(1).collect();
    let args = match cli::parse_args(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    match args.mode {
        Mode::Help => {
            cli::print_help();
            return ExitCode::SUCCESS;
        }
        Mode::Version => {
            cli::print_version();
            return ExitCode::SUCCESS;
        }
        Mode::ListLanguages => {
            cli::print_languages();
            return ExitCode::SUCCESS;
        }
        Mode::Convert | Mode::Normalize => {}
    }

    // --lang wins over SPOKEN_NUMBERS_LANG, which wins over the built-in default
    let tag = args
        .language
        .clone()
        .or_else(|| env::var("SPOKEN_NUMBERS_LANG").ok())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let options = NormalizationOptions::from_env();
    tracing::debug!(language = %tag, ?options, "Starting conversion");

    let converter = match create_converter_with_options(&tag, options) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut all_ok = true;
    for raw in &args.numbers {
        let ok = match args.mode {
            Mode::Normalize => print_normalized(&converter, raw),
            _ => print_conversion(&converter, &args, raw),
        };
        all_ok &= ok;
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print words (or a JSON report) for one number, returning whether it succeeded
fn print_conversion(converter: &NumberToWords, args: &CliArgs, raw: &str) -> bool {
    let tag = converter.language().tag();
    let result = converter.convert(raw);

    if !args.json {
        return match result {
            Ok(words) => {
                println!("{}", words);
                true
            }
            Err(e) => {
                eprintln!("{}: {}", raw, e);
                false
            }
        };
    }

    let report = match result {
        Ok(words) => ConversionReport::success(raw, tag, words, converter.normalize(raw).ok()),
        Err(e) => ConversionReport::failure(raw, tag, e.to_string()),
    };

    match serde_json::to_string(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize report: {}", e);
            return false;
        }
    }

    report.is_success()
}

fn print_normalized(converter: &NumberToWords, raw: &str) -> bool {
    let number = match converter.normalize(raw) {
        Ok(number) => number,
        Err(e) => {
            eprintln!("{}: {}", raw, e);
            return false;
        }
    };

    match serde_json::to_string_pretty(&number) {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(e) => {
            eprintln!("Failed to serialize normalized number: {}", e);
            false
        }
    }
}
