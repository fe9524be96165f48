// web_app/model/currency.rs - Brazilian real formatting
//
// Matches what `toLocaleString('pt-BR', { style: 'currency', currency: 'BRL' })`
// produces in the browser: "R$" followed by a non-breaking space, dots as
// thousands separators and a comma before the two cent digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol for BRL amounts.
pub const BRL_SYMBOL: &str = "R$";

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded = rounded.abs();
    rounded.rescale(2);

    let text = rounded.to_string();
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}{}\u{a0}{},{}",
        if negative { "-" } else { "" },
        BRL_SYMBOL,
        group_thousands(units),
        cents
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl(text: &str) -> String {
        text.replace(' ', "\u{a0}")
    }

    #[test]
    fn test_format_whole_amounts() {
        assert_eq!(format_brl(Decimal::from(20)), brl("R$ 20,00"));
        assert_eq!(format_brl(Decimal::ZERO), brl("R$ 0,00"));
    }

    #[test]
    fn test_format_thousands_separator() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), brl("R$ 1.234,56"));
        assert_eq!(format_brl(Decimal::new(100000000, 2)), brl("R$ 1.000.000,00"));
        assert_eq!(format_brl(Decimal::new(99999, 2)), brl("R$ 999,99"));
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_brl(Decimal::new(10005, 3)), brl("R$ 10,01"));
        assert_eq!(format_brl(Decimal::new(10004, 3)), brl("R$ 10,00"));
    }

    #[test]
    fn test_format_negative_amounts() {
        assert_eq!(format_brl(Decimal::new(-1550, 2)), brl("-R$ 15,50"));
        // -0.001 rounds to zero and must not keep the sign
        assert_eq!(format_brl(Decimal::new(-1, 3)), brl("R$ 0,00"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }
}
