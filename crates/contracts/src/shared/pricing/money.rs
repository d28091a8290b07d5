//! Денежные значения: разбор ввода, округление и вывод с двумя знаками

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Округление до 2 знаков, половина - от нуля (half-up)
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Текст с фиксированной точкой и ровно двумя знаками ("123.00")
pub fn format_fixed2(value: Decimal) -> String {
    format!("{:.2}", round2(value))
}

/// Разбор пользовательского ввода. Допускается запятая как разделитель
/// дробной части и пробелы вокруг числа. Пустая строка и мусор дают `None`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(dec("1.005")), dec("1.01"));
        assert_eq!(round2(dec("1.004")), dec("1.00"));
        assert_eq!(round2(dec("-1.005")), dec("-1.01"));
        assert_eq!(round2(dec("33.3333")), dec("33.33"));
    }

    #[test]
    fn test_format_fixed2() {
        assert_eq!(format_fixed2(dec("123")), "123.00");
        assert_eq!(format_fixed2(dec("0")), "0.00");
        assert_eq!(format_fixed2(dec("99.999")), "100.00");
        assert_eq!(format_fixed2(dec("-4.5")), "-4.50");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100"), Some(dec("100")));
        assert_eq!(parse_amount(" 12,5 "), Some(dec("12.5")));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
