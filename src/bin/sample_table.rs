use spoken_numbers::logging::{init_logging, LogConfig};
use spoken_numbers::{Language, NumberToWords};

const SAMPLES: &[&str] = &[
    "0",
    "7",
    "21",
    "100",
    "101",
    "1,234",
    "12.500",
    "1000000",
    "2,000,000",
    "1.234.567,89",
    "-0.5",
    "3.05",
    "1000000000",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_logging(&LogConfig::from_env())?;

    let converters: Vec<NumberToWords> = Language::all().into_iter().map(NumberToWords::new).collect();

    println!("Converting {} samples into {} languages", SAMPLES.len(), converters.len());

    for raw in SAMPLES {
        println!();
        println!("{}", raw);
        for converter in &converters {
            let words = match converter.convert(raw) {
                Ok(words) => words,
                Err(e) => format!("<{}>", e),
            };
            println!("  {:<3} {}", converter.language().tag(), words);
        }
    }

    Ok(())
}
