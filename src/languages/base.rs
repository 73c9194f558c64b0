/// Shared scale-grouping algorithm
///
/// Used as-is by English and partly reused by Spanish.
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::{Engine, WordTable};

/// 1000 raised to `power`
pub fn scale_value(power: usize) -> BigUint {
    BigUint::from(1000u32).pow(power as u32)
}

/// Value of a group that is known to be below 1000
pub(crate) fn small_value(group: &BigUint) -> u32 {
    group.to_u32().unwrap_or_default()
}

/// Words for the count in front of a scale name
///
/// Counts past the largest named scale are spelled with the full algorithm,
/// e.g. "one thousand decillion".
pub(crate) fn count_words(engine: &Engine, count: &BigUint) -> String {
    match count.to_u32() {
        Some(small) if small < 1000 => (engine.below_thousand)(engine.table, small),
        _ => engine.integer_words(count),
    }
}

/// Scan scales from the largest down, emitting `<count> <scale>` per group
pub fn scale_words(engine: &Engine, magnitude: &BigUint) -> String {
    let table = engine.table;

    if magnitude.is_zero() {
        return table.zero.to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = magnitude.clone();

    for (index, scale) in table.scales.iter().enumerate().rev() {
        let value = scale_value(index + 1);
        if remaining < value {
            continue;
        }

        let count = &remaining / &value;
        remaining %= &value;
        groups.push(format!("{} {}", count_words(engine, &count), scale.singular));
    }

    if !remaining.is_zero() {
        groups.push((engine.below_thousand)(table, small_value(&remaining)));
    }

    groups.join(" ")
}

/// `<ones> hundred`, then the 0-99 remainder with hyphenated compounds
pub fn below_thousand(table: &WordTable, n: u32) -> String {
    let mut parts = Vec::new();

    let hundreds = (n / 100) as usize;
    if hundreds > 0 {
        parts.push(format!("{} {}", table.ones[hundreds], table.hundred));
    }

    let rest = (n % 100) as usize;
    if rest > 0 {
        let words = match rest {
            1..=9 => table.ones[rest].to_string(),
            10..=19 => table.teens[rest - 10].to_string(),
            _ => match rest % 10 {
                0 => table.tens[rest / 10].to_string(),
                ones => format!("{}-{}", table.tens[rest / 10], table.ones[ones]),
            },
        };
        parts.push(words);
    }

    parts.join(" ")
}

/// Read each digit on its own, zeros included
pub fn decimal_words(table: &WordTable, digits: &str) -> String {
    digits
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .map(|digit| match digit {
            0 => table.zero,
            d => table.ones[d as usize],
        })
        .collect::<Vec<_>>()
        .join(" ")
}
