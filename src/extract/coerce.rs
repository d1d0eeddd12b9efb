//! Lenient numeric coercion of spreadsheet cells
//!
//! Malformed cells must never abort payslip generation: anything that cannot be
//! read as a number becomes zero.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;

use crate::extract::resolve::CellValue;

/// Convert a resolved cell into an amount
///
/// Absent, null and blank cells are zero. Text keeps only digits, minus signs
/// and decimal points (so "₹ 1,234.50" reads as 1234.50) and the longest
/// leading number of what remains is parsed. Anything unparseable is zero.
#[must_use]
pub fn to_amount(value: Option<&CellValue>) -> Decimal {
    match value {
        None | Some(CellValue::Null) => Decimal::ZERO,
        Some(CellValue::Number(n)) => number_to_amount(*n),
        Some(CellValue::Text(s)) => parse_amount(s),
    }
}

/// Amount for a numeric cell; non-finite or out-of-range values are zero
#[must_use]
pub fn number_to_amount(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Amount for a text cell
#[must_use]
pub fn parse_amount(text: &str) -> Decimal {
    if text.trim().is_empty() {
        return Decimal::ZERO;
    }
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    leading_number(&stripped)
        .and_then(|number| Decimal::from_str(&number).ok())
        .unwrap_or(Decimal::ZERO)
}

/// Longest prefix of the form `-?digits(.digits)?`, with a zero inserted before
/// a bare fractional part. `None` when the prefix holds no digit.
fn leading_number(stripped: &str) -> Option<String> {
    let mut chars = stripped.chars().peekable();
    let mut number = String::with_capacity(stripped.len() + 1);

    if chars.peek() == Some(&'-') {
        number.push('-');
        chars.next();
    }

    let mut integer_digits = 0usize;
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        number.push(c);
        integer_digits += 1;
        chars.next();
    }

    let mut fraction = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
            fraction.push(c);
            chars.next();
        }
    }

    if integer_digits == 0 && fraction.is_empty() {
        return None;
    }
    if integer_digits == 0 {
        number.push('0');
    }
    if !fraction.is_empty() {
        number.push('.');
        number.push_str(&fraction);
    }
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn test_formatted_text_amounts() {
        assert_eq!(to_amount(Some(&text("₹ 1,234.50"))), dec!(1234.50));
        assert_eq!(to_amount(Some(&text("30000"))), dec!(30000));
        assert_eq!(to_amount(Some(&text("INR 1,00,000/-"))), dec!(100000));
        assert_eq!(to_amount(Some(&text("-250.75"))), dec!(-250.75));
        assert_eq!(to_amount(Some(&text(".5"))), dec!(0.5));
        assert_eq!(to_amount(Some(&text("12.5.3"))), dec!(12.5));
    }

    #[test]
    fn test_numeric_cells() {
        assert_eq!(to_amount(Some(&CellValue::Number(1800.0))), dec!(1800));
        assert_eq!(to_amount(Some(&CellValue::Number(99.25))), dec!(99.25));
        assert_eq!(to_amount(Some(&CellValue::Number(f64::NAN))), Decimal::ZERO);
        assert_eq!(to_amount(Some(&CellValue::Number(f64::INFINITY))), Decimal::ZERO);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(to_amount(None), Decimal::ZERO);
        assert_eq!(to_amount(Some(&CellValue::Null)), Decimal::ZERO);
        assert_eq!(to_amount(Some(&text(""))), Decimal::ZERO);
        assert_eq!(to_amount(Some(&text("   "))), Decimal::ZERO);
        assert_eq!(to_amount(Some(&text("N/A"))), Decimal::ZERO);
        assert_eq!(to_amount(Some(&text("-"))), Decimal::ZERO);
        assert_eq!(to_amount(Some(&text("."))), Decimal::ZERO);
        assert_eq!(to_amount(Some(&text("--5"))), Decimal::ZERO);
    }
}
