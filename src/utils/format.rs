//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Currency display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount
    pub symbol: String,
    /// Fraction digits shown
    pub decimals: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    /// Create a format with the given symbol and two decimals
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Format an amount, e.g. `1234.5` -> `$1,234.50`.
    ///
    /// Ties round away from zero and any negative amount keeps its sign,
    /// so `-0.001` shows as `-$0.00`.
    pub fn format(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let (whole, fraction) = round_half_away(value.abs(), self.decimals);

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_thousands(&whole));
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out
    }

    /// Parse user input back to an amount.
    ///
    /// Strips the symbol, `$`, commas and whitespace, then reads the longest
    /// numeric prefix. Unparseable input yields `0`.
    pub fn parse(&self, input: &str) -> f64 {
        let cleaned: String = input
            .replace(self.symbol.as_str(), "")
            .chars()
            .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
            .collect();
        parse_float_prefix(&cleaned)
            .filter(|n| !n.is_nan())
            .unwrap_or(0.0)
    }
}

/// Digits printed past the rounding position; enough to tell an exact tie
/// from a near one for any amount a table shows
const ROUNDING_GUARD_DIGITS: usize = 40;

/// Round a non-negative amount to `decimals` places, ties away from zero.
///
/// Returns the whole and fraction digits.
fn round_half_away(magnitude: f64, decimals: usize) -> (String, String) {
    let wide = format!("{:.*}", decimals + ROUNDING_GUARD_DIGITS, magnitude);
    let (whole, rest) = wide.split_once('.').unwrap_or((wide.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(rest.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();
    let mut whole_len = whole.len();

    if rest.as_bytes().get(decimals).is_some_and(|b| *b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            whole_len += 1;
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (whole, fraction) = text.split_at(whole_len);
    (whole.to_string(), fraction.to_string())
}

/// Insert thousand separators into a run of digits
pub fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let len = chars.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Parse the longest leading decimal number, like a browser `parseFloat`
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Coerce input the way a browser `Number(text)` does.
///
/// Blank input is `0`; anything that is not entirely numeric is NaN.
pub fn coerce_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.trim_start_matches(['+', '-']) {
        "Infinity" => {
            return if trimmed.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        rest if rest.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
            return f64::NAN;
        }
        _ => {}
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(1234.5), "$1,234.50");
        assert_eq!(fmt.format(0.0), "$0.00");
        assert_eq!(fmt.format(999.999), "$1,000.00");
        assert_eq!(fmt.format(-1234567.891), "-$1,234,567.89");
        assert_eq!(fmt.format(-0.001), "-$0.00");
    }

    #[test]
    fn test_format_currency_ties_round_away_from_zero() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(0.125), "$0.13");
        assert_eq!(fmt.format(1234.625), "$1,234.63");
        assert_eq!(fmt.format(-2.375), "-$2.38");
        assert_eq!(fmt.format(99.995), "$100.00");
        // 1.005 is stored just below the tie
        assert_eq!(fmt.format(1.005), "$1.00");

        let whole = CurrencyFormat {
            symbol: "$".into(),
            decimals: 0,
        };
        assert_eq!(whole.format(2.5), "$3");
        assert_eq!(whole.format(999.5), "$1,000");
    }

    #[test]
    fn test_currency_round_trip() {
        let fmt = CurrencyFormat::default();
        let parsed = fmt.parse(&fmt.format(1234.5));
        assert!((parsed - 1234.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_currency() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.parse("$ 12,000"), 12000.0);
        assert_eq!(fmt.parse("12abc"), 12.0);
        assert_eq!(fmt.parse("-$5.25"), -5.25);
        assert_eq!(fmt.parse("abc"), 0.0);
        assert_eq!(fmt.parse(""), 0.0);

        let euro = CurrencyFormat::with_symbol("€");
        assert_eq!(euro.parse("€1,050.10"), 1050.1);
        assert_eq!(euro.format(1050.1), "€1,050.10");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("3.14abc"), Some(3.14));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("x1"), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  42 "), 42.0);
        assert_eq!(coerce_number("1e2"), 100.0);
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("nan").is_nan());
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
