//! Display-amount formatting with grouping and ceiling enforcement
//!
//! Form fields and print documents exchange amounts as grouped two-decimal
//! strings ("1,234,567.89"). This module owns the conversion in both
//! directions together with the maximum-amount ceiling applied on entry.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::notify::{NoticeKind, Notifier};

/// Largest amount a document accepts: one hundred trillion.
pub const AMOUNT_CEILING: Decimal = dec!(100000000000000);

/// Magnitude at which grouping switches to the explicit digit walk.
pub const MANUAL_GROUPING_FLOOR: Decimal = dec!(1000000000000);

/// Digits in the integer part of [`AMOUNT_CEILING`].
const CEILING_INTEGER_DIGITS: usize = 15;

/// A formatted amount together with the value behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAmount {
    /// Grouped two-decimal text, e.g. "1,234,567.89"
    pub text: String,
    /// The rounded (and possibly clamped) value the text represents
    pub value: Decimal,
    /// True when the input exceeded [`AMOUNT_CEILING`] and was clamped
    pub clamped: bool,
}

/// Formats raw field input as a grouped two-decimal amount.
///
/// Everything except digits, comma, and dot is stripped before parsing,
/// so currency symbols and stray text are tolerated. Unparsable input
/// yields "0.00" rather than an error.
pub fn format_amount(raw: &str) -> FormattedAmount {
    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    cleaned.retain(|c| c != ',');
    let value = match leading_decimal(&cleaned) {
        Some(value) => value,
        // A digit run past Decimal's representable range never parses;
        // an integer part longer than the ceiling's fifteen digits is
        // above the ceiling, not garbage
        None if integer_digit_count(&cleaned) > CEILING_INTEGER_DIGITS => Decimal::MAX,
        None => Decimal::ZERO,
    };
    format_value(value)
}

/// Formats a known decimal value, applying the ceiling and grouping rules.
///
/// Magnitudes at or above [`MANUAL_GROUPING_FLOOR`] are grouped by walking
/// the digit string from the right; smaller magnitudes go through the
/// plain two-decimal path before grouping.
pub fn format_value(value: Decimal) -> FormattedAmount {
    let clamped = value.abs() > AMOUNT_CEILING;
    let bounded = if clamped {
        if value.is_sign_negative() {
            -AMOUNT_CEILING
        } else {
            AMOUNT_CEILING
        }
    } else {
        value
    };
    let rounded = bounded.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = if rounded.abs() >= MANUAL_GROUPING_FLOOR {
        group_manual(rounded)
    } else {
        group_standard(rounded)
    };
    FormattedAmount {
        text,
        value: rounded,
        clamped,
    }
}

/// Formats raw input and surfaces one warning through `notifier` when the
/// value had to be clamped to the ceiling.
pub fn format_amount_notified(raw: &str, notifier: &dyn Notifier) -> FormattedAmount {
    let formatted = format_amount(raw);
    if formatted.clamped {
        notifier.notify(
            NoticeKind::Warning,
            &format!(
                "Amount exceeds the maximum of {}",
                format_value(AMOUNT_CEILING).text
            ),
        );
    }
    formatted
}

/// Parses a grouped amount string back to its decimal value.
///
/// Thousands separators and whitespace are ignored; absent or partial
/// input parses to zero.
pub fn parse_amount(formatted: &str) -> Decimal {
    let cleaned: String = formatted
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    leading_decimal(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Takes the longest numeric prefix (optional sign, digits, at most one
/// dot) and parses it, mirroring lenient float parsing.
fn leading_decimal(s: &str) -> Option<Decimal> {
    let mut prefix = String::new();
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '-' | '+' if i == 0 => prefix.push(c),
            '0'..='9' => prefix.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                prefix.push(c);
            }
            _ => break,
        }
    }
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if prefix.starts_with('.') {
        prefix.insert(0, '0');
    } else if prefix.starts_with("-.") || prefix.starts_with("+.") {
        prefix.insert(1, '0');
    }
    if prefix.ends_with('.') {
        prefix.pop();
    }
    prefix.parse().ok()
}

/// Significant digits before the decimal point of a sanitized numeric
/// string; zero when the integer part holds any non-digit.
fn integer_digit_count(cleaned: &str) -> usize {
    let integer = cleaned.split('.').next().unwrap_or("");
    if integer.bytes().all(|b| b.is_ascii_digit()) {
        integer.trim_start_matches('0').len()
    } else {
        0
    }
}

/// Groups a value below the manual floor: render at two decimals, then
/// insert separators left to right.
fn group_standard(value: Decimal) -> String {
    let plain = format!("{:.2}", value);
    let (number, frac) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let (sign, digits) = split_sign(number);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}.{}", sign, grouped, frac)
}

/// Groups a trillion-scale value by walking its digits from the right and
/// inserting a separator after every third digit.
fn group_manual(value: Decimal) -> String {
    let plain = format!("{:.2}", value);
    let (number, frac) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let (sign, digits) = split_sign(number);
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (pos, c) in digits.chars().rev().enumerate() {
        if pos > 0 && pos % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();
    format!("{}{}.{}", sign, grouped, frac)
}

fn split_sign(number: &str) -> (&str, &str) {
    match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    }
}
