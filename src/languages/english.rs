/// English vocabulary on top of the shared scale algorithm
use super::{base, Engine, FailurePolicy, ScaleName, WordTable};

static SCALES: [ScaleName; 11] = [
    ScaleName::invariant("thousand"),
    ScaleName::invariant("million"),
    ScaleName::invariant("billion"),
    ScaleName::invariant("trillion"),
    ScaleName::invariant("quadrillion"),
    ScaleName::invariant("quintillion"),
    ScaleName::invariant("sextillion"),
    ScaleName::invariant("septillion"),
    ScaleName::invariant("octillion"),
    ScaleName::invariant("nonillion"),
    ScaleName::invariant("decillion"),
];

pub static TABLE: WordTable = WordTable {
    ones: ["", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
    teens: [
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    tens: [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundred: "hundred",
    scales: &SCALES,
    zero: "zero",
    negative: "negative",
    separator: "point",
};

pub static ENGINE: Engine = Engine {
    table: &TABLE,
    below_thousand: base::below_thousand,
    scale_words: base::scale_words,
    decimal_words: base::decimal_words,
    on_failure: FailurePolicy::Raise,
    fallback: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_largest_named_scale() {
        let decillion = base::scale_value(11);
        assert_eq!(ENGINE.integer_words(&decillion), "one decillion");
    }

    #[test]
    fn test_trillion() {
        let value = BigUint::from(1_000_000_000_000u64);
        assert_eq!(ENGINE.integer_words(&value), "one trillion");
    }

    #[test]
    fn test_decimal_zero_reads_zero() {
        assert_eq!((ENGINE.decimal_words)(&TABLE, "07"), "zero seven");
    }
}
