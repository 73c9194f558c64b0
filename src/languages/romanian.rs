/// Romanian engine
///
/// Romanian scale words agree with their count: "o mie", "două mii",
/// "cinci mii", but "douăzeci și două de mii". Counts of 20 and above take the
/// partitive "de" unless the last two digits fall below 20 on a count past 100.
///
/// Magnitudes above one decillion are spoken as "peste limita". Strict parse
/// failures fall back to a looser parse and finally to the "NaN" sentinel.
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Zero;

use super::{base, Engine, FailurePolicy, ScaleName, WordTable};
use crate::config::constants::{ROMANIAN_OVER_LIMIT, ROMANIAN_SENTINEL};

lazy_static! {
    static ref ONE_DECILLION: BigUint = base::scale_value(11);
}

const ONE_HUNDRED: &str = "o sută";
const TWO_HUNDRED: &str = "două sute";
const CONJUNCTION: &str = "și";
const PARTITIVE: &str = "de";

static SCALES: [ScaleName; 11] = [
    ScaleName::new("o mie", "mii"),
    ScaleName::new("un milion", "milioane"),
    ScaleName::new("un miliard", "miliarde"),
    ScaleName::new("un trilion", "trilioane"),
    ScaleName::new("un cvadrilion", "cvadrilioane"),
    ScaleName::new("un cvintilion", "cvintilioane"),
    ScaleName::new("un sextilion", "sextilioane"),
    ScaleName::new("un septilion", "septilioane"),
    ScaleName::new("un octilion", "octilioane"),
    ScaleName::new("un nonilion", "nonilioane"),
    ScaleName::new("un decilion", "decilioane"),
];

pub static TABLE: WordTable = WordTable {
    ones: ["zero", "unu", "doi", "trei", "patru", "cinci", "șase", "șapte", "opt", "nouă"],
    teens: [
        "zece",
        "unsprezece",
        "douăsprezece",
        "treisprezece",
        "paisprezece",
        "cincisprezece",
        "șaisprezece",
        "șaptesprezece",
        "optsprezece",
        "nouăsprezece",
    ],
    tens: [
        "zero",
        "zece",
        "douăzeci",
        "treizeci",
        "patruzeci",
        "cincizeci",
        "șaizeci",
        "șaptezeci",
        "optzeci",
        "nouăzeci",
    ],
    hundred: "sute",
    scales: &SCALES,
    zero: "zero",
    negative: "minus",
    separator: "virgulă",
};

pub static ENGINE: Engine = Engine {
    table: &TABLE,
    below_thousand,
    scale_words,
    decimal_words,
    on_failure: FailurePolicy::ReturnSentinel(ROMANIAN_SENTINEL),
    fallback: Some(fallback),
};

fn below_twenty(table: &WordTable, n: usize) -> &'static str {
    if n < 10 {
        table.ones[n]
    } else {
        table.teens[n - 10]
    }
}

fn below_hundred(table: &WordTable, n: usize) -> String {
    if n < 20 {
        return below_twenty(table, n).to_string();
    }

    match n % 10 {
        0 => table.tens[n / 10].to_string(),
        ones => format!("{} {} {}", table.tens[n / 10], CONJUNCTION, below_twenty(table, ones)),
    }
}

pub fn below_thousand(table: &WordTable, n: u32) -> String {
    let mut parts = Vec::new();

    match (n / 100) as usize {
        0 => {}
        1 => parts.push(ONE_HUNDRED.to_string()),
        2 => parts.push(TWO_HUNDRED.to_string()),
        hundreds => parts.push(format!("{} {}", table.ones[hundreds], table.hundred)),
    }

    let rest = (n % 100) as usize;
    if rest > 0 {
        parts.push(below_hundred(table, rest));
    }

    parts.join(" ")
}

/// Agree a scale word with its count (1..=999)
pub fn scale_phrase(table: &WordTable, count: u32, scale: &ScaleName) -> String {
    match count {
        1 => scale.singular.to_string(),
        2 => format!("două {}", scale.plural),
        c if c < 20 || (c > 100 && c % 100 < 20) => {
            format!("{} {}", below_thousand(table, c), scale.plural)
        }
        c => {
            let mut words = below_thousand(table, c);
            // Scale nouns are feminine or neuter plural: "douăzeci și două de mii"
            if c % 10 == 2 {
                if let Some(stem) = words.strip_suffix("doi") {
                    words = format!("{}două", stem);
                }
            }
            format!("{} {} {}", words, PARTITIVE, scale.plural)
        }
    }
}

/// Walk the scale thresholds from decillion down, collecting agreed groups
pub fn scale_words(engine: &Engine, magnitude: &BigUint) -> String {
    let table = engine.table;

    if *magnitude > *ONE_DECILLION {
        return ROMANIAN_OVER_LIMIT.to_string();
    }
    if magnitude.is_zero() {
        return table.zero.to_string();
    }

    let mut words = Vec::new();
    let mut remaining = magnitude.clone();

    for (index, scale) in table.scales.iter().enumerate().rev() {
        let threshold = base::scale_value(index + 1);
        if remaining < threshold {
            continue;
        }

        let count = &remaining / &threshold;
        remaining %= &threshold;
        words.push(scale_phrase(table, base::small_value(&count), scale));
    }

    if !remaining.is_zero() {
        words.push(below_thousand(table, base::small_value(&remaining)));
    }

    words.join(" ")
}

/// Spoken decimal digits
///
/// Two-digit fractions read like numbers ("patruzeci și cinci"), longer ones
/// digit by digit. Trailing "00" pairs on three or more digits are read as
/// "zero zero" after the rest.
pub fn decimal_words(table: &WordTable, digits: &str) -> String {
    let mut core = digits;
    let mut zero_pairs = 0;
    while core.len() >= 3 && core.ends_with("00") {
        core = &core[..core.len() - 2];
        zero_pairs += 1;
    }

    let mut words = read_decimal_core(table, core);
    for _ in 0..zero_pairs {
        words.push_str(" zero zero");
    }
    words
}

fn read_decimal_core(table: &WordTable, core: &str) -> String {
    let digits: Vec<usize> = core
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .map(|d| d as usize)
        .collect();

    match digits.as_slice() {
        [] => String::new(),
        [digit] => below_twenty(table, *digit).to_string(),
        [0, digit] => format!("{} {}", table.zero, table.ones[*digit]),
        [tens, units] => below_hundred(table, tens * 10 + units),
        _ => digits
            .iter()
            .map(|d| table.ones[*d])
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

/// Loose parse used when strict normalization fails
///
/// Strips a leading `-`, splits on `.`/`,` and keeps the leading digits of the
/// first two pieces. Returns `None` when no integer digits are found.
pub fn fallback(engine: &Engine, raw: &str) -> Option<String> {
    let raw = raw.trim_start();
    if raw.is_empty() {
        return None;
    }

    let (is_negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let mut parts = body.split(|ch: char| ch == '.' || ch == ',');
    let integer_str = parts.next().filter(|s| !s.is_empty()).unwrap_or("0");
    let integer_digits = leading_digits(integer_str.trim_start());
    if integer_digits.is_empty() {
        return None;
    }

    let magnitude: BigUint = integer_digits.parse().ok()?;
    let decimals = parts.next().map(leading_digits).filter(|d| !d.is_empty());

    Some(engine.assemble(is_negative, &magnitude, decimals))
}
