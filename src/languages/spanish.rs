/// Spanish engine
///
/// Differs from the shared algorithm in:
/// - "cien" for exactly one hundred, "ciento"/"doscientos"/... otherwise
/// - fused 21-29 ("veintiuno") and "y" between tens and ones from 31 up
/// - "un millón" / "dos millones" agreement and bare "mil" for a count of one
/// - compound scales ("mil millones") treated as a single unit
use num_bigint::BigUint;
use num_traits::Zero;

use super::{base, Engine, FailurePolicy, ScaleName, WordTable};

const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

const TWENTIES: [&str; 10] = [
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const CONJUNCTION: &str = "y";

static SCALES: [ScaleName; 6] = [
    ScaleName::invariant("mil"),
    ScaleName::new("millón", "millones"),
    ScaleName::invariant("mil millones"),
    ScaleName::new("billón", "billones"),
    ScaleName::invariant("mil billones"),
    ScaleName::new("trillón", "trillones"),
];

pub static TABLE: WordTable = WordTable {
    ones: ["", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve"],
    teens: [
        "diez",
        "once",
        "doce",
        "trece",
        "catorce",
        "quince",
        "dieciséis",
        "diecisiete",
        "dieciocho",
        "diecinueve",
    ],
    tens: [
        "", "", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
        "noventa",
    ],
    hundred: "cien",
    scales: &SCALES,
    zero: "cero",
    negative: "menos",
    separator: "coma",
};

pub static ENGINE: Engine = Engine {
    table: &TABLE,
    below_thousand,
    scale_words,
    decimal_words: base::decimal_words,
    on_failure: FailurePolicy::Raise,
    fallback: None,
};

pub fn below_thousand(table: &WordTable, n: u32) -> String {
    if n == 100 {
        return table.hundred.to_string();
    }

    let mut parts = Vec::new();

    let hundreds = (n / 100) as usize;
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds].to_string());
    }

    let rest = (n % 100) as usize;
    if rest > 0 {
        parts.push(below_hundred(table, rest));
    }

    parts.join(" ")
}

fn below_hundred(table: &WordTable, n: usize) -> String {
    match n {
        0..=9 => table.ones[n].to_string(),
        10..=19 => table.teens[n - 10].to_string(),
        20..=29 => TWENTIES[n - 20].to_string(),
        _ => match n % 10 {
            0 => table.tens[n / 10].to_string(),
            ones => format!("{} {} {}", table.tens[n / 10], CONJUNCTION, table.ones[ones]),
        },
    }
}

/// "mil", "mil millones", ... are spoken without a leading "un"
fn is_thousand_compound(scale: &ScaleName) -> bool {
    scale.singular == "mil" || scale.singular.starts_with("mil ")
}

fn scale_phrase(engine: &Engine, count: &BigUint, scale: &ScaleName) -> String {
    if *count == BigUint::from(1u32) {
        if is_thousand_compound(scale) {
            return scale.singular.to_string();
        }
        return format!("un {}", scale.singular);
    }

    format!("{} {}", base::count_words(engine, count), scale.plural)
}

pub fn scale_words(engine: &Engine, magnitude: &BigUint) -> String {
    let table = engine.table;

    if magnitude.is_zero() {
        return table.zero.to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = magnitude.clone();

    for (index, scale) in table.scales.iter().enumerate().rev() {
        let value = base::scale_value(index + 1);
        if remaining < value {
            continue;
        }

        let count = &remaining / &value;
        remaining %= &value;
        groups.push(scale_phrase(engine, &count, scale));
    }

    if !remaining.is_zero() {
        groups.push(below_thousand(table, base::small_value(&remaining)));
    }

    groups.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: u64) -> String {
        ENGINE.integer_words(&BigUint::from(n))
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(below_thousand(&TABLE, 100), "cien");
        assert_eq!(below_thousand(&TABLE, 101), "ciento uno");
        assert_eq!(below_thousand(&TABLE, 123), "ciento veintitrés");
        assert_eq!(below_thousand(&TABLE, 200), "doscientos");
        assert_eq!(below_thousand(&TABLE, 555), "quinientos cincuenta y cinco");
    }

    #[test]
    fn test_twenties_are_fused() {
        assert_eq!(below_thousand(&TABLE, 20), "veinte");
        assert_eq!(below_thousand(&TABLE, 21), "veintiuno");
        assert_eq!(below_thousand(&TABLE, 22), "veintidós");
        assert_eq!(below_thousand(&TABLE, 29), "veintinueve");
    }

    #[test]
    fn test_conjunction_from_thirty_one() {
        assert_eq!(below_thousand(&TABLE, 30), "treinta");
        assert_eq!(below_thousand(&TABLE, 31), "treinta y uno");
        assert_eq!(below_thousand(&TABLE, 99), "noventa y nueve");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(words(1000), "mil");
        assert_eq!(words(1001), "mil uno");
        assert_eq!(words(2000), "dos mil");
        assert_eq!(words(100_000), "cien mil");
    }

    #[test]
    fn test_million_agreement() {
        assert_eq!(words(1_000_000), "un millón");
        assert_eq!(words(2_000_000), "dos millones");
    }

    #[test]
    fn test_compound_scales() {
        assert_eq!(words(1_000_000_000), "mil millones");
        assert_eq!(words(2_000_000_000), "dos mil millones");
        assert_eq!(words(1_000_000_000_000_000), "mil billones");
        assert_eq!(words(3_000_000_000_000_000), "tres mil billones");
    }

    #[test]
    fn test_beyond_trillion() {
        let magnitude = base::scale_value(7);
        assert_eq!(ENGINE.integer_words(&magnitude), "mil trillones");
    }
}
