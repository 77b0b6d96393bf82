//! Утилиты форматирования чисел для дашборда
//!
//! Денежные суммы выводятся без дробной части, с разделителем тысяч и
//! подписью валюты:
//!
//! ```
//! use frontend::shared::number_format::format_currency;
//! assert_eq!(format_currency(1234567.0).unwrap(), "1\u{a0}234\u{a0}567 so'm");
//! ```

use thiserror::Error;

/// Подпись валюты, если конфигурация не задаёт другую
pub const DEFAULT_CURRENCY_LABEL: &str = "so'm";

/// Разделитель тысяч локали `uz-UZ` (неразрывный пробел)
pub const DEFAULT_GROUP_SEPARATOR: char = '\u{00a0}';

/// На вход форматтера пришло NaN или бесконечность.
///
/// Значения снимка всегда конечны, так что это ошибка вызывающего кода.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot format non-finite number {0}")]
pub struct InvalidNumberError(pub f64);

/// Настройки локали для сумм и количеств
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLocale {
    pub group_separator: char,
    pub currency_label: String,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR,
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
        }
    }
}

impl NumberLocale {
    pub fn new(group_separator: char, currency_label: impl Into<String>) -> Self {
        Self {
            group_separator,
            currency_label: currency_label.into(),
        }
    }

    /// Округляет половину от нуля, разбивает на разряды и добавляет подпись валюты
    pub fn format_currency(&self, amount: f64) -> Result<String, InvalidNumberError> {
        ensure_finite(amount)?;

        let rounded = amount.round();
        // -0.4 округляется до -0, "-0" выводить нельзя
        let digits = if rounded == 0.0 {
            "0".to_string()
        } else {
            format!("{:.0}", rounded)
        };

        Ok(format!(
            "{} {}",
            group_digits(&digits, self.group_separator),
            self.currency_label
        ))
    }

    /// Целое с разделителем тысяч, для количеств
    pub fn format_integer(&self, value: u64) -> String {
        group_digits(&value.to_string(), self.group_separator)
    }
}

/// Форматирует сумму в локали по умолчанию
pub fn format_currency(amount: f64) -> Result<String, InvalidNumberError> {
    NumberLocale::default().format_currency(amount)
}

/// Форматирует значение, уже выраженное в процентах, например `25.0%`
pub fn format_percent(value: f64) -> Result<String, InvalidNumberError> {
    ensure_finite(value)?;

    let rounded = round_to_tenth(value);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    Ok(format!("{:.1}%", rounded))
}

/// Округляет до одного знака после запятой, половину от нуля
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn ensure_finite(value: f64) -> Result<(), InvalidNumberError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidNumberError(value))
    }
}

/// Вставляет `separator` каждые 3 цифры с конца целой части
fn group_digits(integer_part: &str, separator: char) -> String {
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(separator);
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0).unwrap(), "0 so'm");
        assert_eq!(format_currency(999.0).unwrap(), "999 so'm");
        assert_eq!(format_currency(1000.0).unwrap(), "1\u{a0}000 so'm");
        assert_eq!(
            format_currency(1234567.0).unwrap(),
            "1\u{a0}234\u{a0}567 so'm"
        );
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-500.0).unwrap(), "-500 so'm");
        assert_eq!(format_currency(-1234.0).unwrap(), "-1\u{a0}234 so'm");
        assert_eq!(format_currency(-123456.0).unwrap(), "-123\u{a0}456 so'm");
    }

    #[test]
    fn test_format_currency_drops_fraction() {
        assert_eq!(format_currency(1234.5).unwrap(), "1\u{a0}235 so'm");
        assert_eq!(format_currency(1234.49).unwrap(), "1\u{a0}234 so'm");
        assert_eq!(format_currency(-0.4).unwrap(), "0 so'm");
    }

    #[test]
    fn test_format_currency_rejects_non_finite() {
        assert!(format_currency(f64::NAN).is_err());
        assert_eq!(
            format_currency(f64::INFINITY),
            Err(InvalidNumberError(f64::INFINITY))
        );
        assert!(format_currency(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_custom_locale() {
        let locale = NumberLocale::new(',', "USD");
        assert_eq!(locale.format_currency(1500000.0).unwrap(), "1,500,000 USD");
        assert_eq!(locale.format_integer(4200), "4,200");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0).unwrap(), "25.0%");
        assert_eq!(format_percent(15.04).unwrap(), "15.0%");
        assert_eq!(format_percent(-2.16).unwrap(), "-2.2%");
        assert_eq!(format_percent(0.0).unwrap(), "0.0%");
        assert_eq!(format_percent(-0.01).unwrap(), "0.0%");
        assert!(format_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_format_integer() {
        let locale = NumberLocale::default();
        assert_eq!(locale.format_integer(0), "0");
        assert_eq!(locale.format_integer(12), "12");
        assert_eq!(locale.format_integer(1234567), "1\u{a0}234\u{a0}567");
    }
}
