//! Amount-to-words conversion for the net pay legal line
//!
//! Uses the Indian grouping convention: the lowest group holds three digits
//! (ones, tens, hundreds), followed by two-digit Thousand and Lakh groups. The
//! Crore group takes whatever remains and is itself spelled out recursively, so
//! 1,000 crore reads "One Thousand Crore".

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;

/// Spell out the rupee part of an amount in English words
///
/// Only the integer part is converted; paise are dropped. A negative amount is
/// spelled by its magnitude. Zero (including amounts below one rupee) is "Zero".
#[must_use]
pub fn amount_to_words(amount: Decimal) -> String {
    let rupees = amount.abs().trunc().to_u128().unwrap_or(0);
    number_to_words(rupees)
}

/// Spell out a non-negative integer with Indian grouping
#[must_use]
pub fn number_to_words(value: u128) -> String {
    if value == 0 {
        return "Zero".to_string();
    }
    let mut parts: Vec<String> = Vec::new();

    let crores = value / CRORE;
    if crores > 0 {
        parts.push(format!("{} Crore", number_to_words(crores)));
    }

    let below_crore = value % CRORE;
    let lakhs = below_crore / 100_000;
    let thousands = (below_crore / 1_000) % 100;
    let hundreds = below_crore % 1_000;

    if lakhs > 0 {
        parts.push(format!("{} Lakh", below_thousand(lakhs)));
    }
    if thousands > 0 {
        parts.push(format!("{} Thousand", below_thousand(thousands)));
    }
    if hundreds > 0 {
        parts.push(below_thousand(hundreds));
    }
    parts.join(" ")
}

/// Words for 1..=999; empty for 0
fn below_thousand(n: u128) -> String {
    let mut words: Vec<&str> = Vec::with_capacity(4);
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("Hundred");
    }
    if rest >= 20 {
        words.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            words.push(ONES[rest % 10]);
        }
    } else if rest > 0 {
        words.push(ONES[rest]);
    }
    words.join(" ")
}
