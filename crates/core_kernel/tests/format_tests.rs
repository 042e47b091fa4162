//! Unit tests for display-amount formatting
//!
//! Tests cover sanitization, grouping at both scales, the ceiling rule,
//! and the parse inverse.

use core_kernel::format::{
    format_amount, format_value, parse_amount, AMOUNT_CEILING, MANUAL_GROUPING_FLOOR,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod formatting {
    use super::*;

    #[test]
    fn test_small_amount_gets_two_decimals() {
        assert_eq!(format_amount("7").text, "7.00");
    }

    #[test]
    fn test_thousands_are_grouped() {
        assert_eq!(format_amount("1000").text, "1,000.00");
        assert_eq!(format_amount("987654321").text, "987,654,321.00");
    }

    #[test]
    fn test_existing_separators_are_ignored() {
        assert_eq!(format_amount("1,234,567.89").text, "1,234,567.89");
    }

    #[test]
    fn test_decimal_input_is_rounded_to_two_places() {
        assert_eq!(format_amount("0.999").text, "1.00");
        assert_eq!(format_amount("123.456").text, "123.46");
    }

    #[test]
    fn test_zero_renders_as_zero() {
        assert_eq!(format_amount("0").text, "0.00");
    }

    #[test]
    fn test_non_numeric_input_renders_as_zero() {
        assert_eq!(format_amount("not a number").text, "0.00");
        assert_eq!(format_amount("--").text, "0.00");
    }

    #[test]
    fn test_format_value_accepts_decimal_directly() {
        assert_eq!(format_value(dec!(250000.5)).text, "250,000.50");
    }
}

mod ceiling {
    use super::*;

    #[test]
    fn test_value_above_ceiling_is_clamped() {
        let formatted = format_value(dec!(200000000000000));
        assert!(formatted.clamped);
        assert_eq!(formatted.value, AMOUNT_CEILING);
        assert_eq!(formatted.text, "100,000,000,000,000.00");
    }

    #[test]
    fn test_value_at_ceiling_passes_through() {
        let formatted = format_value(AMOUNT_CEILING);
        assert!(!formatted.clamped);
        assert_eq!(formatted.value, AMOUNT_CEILING);
    }

    #[test]
    fn test_one_cent_above_ceiling_is_clamped() {
        let formatted = format_value(AMOUNT_CEILING + dec!(0.01));
        assert!(formatted.clamped);
        assert_eq!(formatted.value, AMOUNT_CEILING);
    }

    #[test]
    fn test_clamped_text_parses_back_to_ceiling() {
        let formatted = format_amount("999999999999999999");
        assert_eq!(parse_amount(&formatted.text), AMOUNT_CEILING);
    }

    #[test]
    fn test_digit_run_past_parse_range_is_clamped() {
        let formatted = format_amount(&"9".repeat(30));
        assert!(formatted.clamped);
        assert_eq!(formatted.value, AMOUNT_CEILING);
        assert_eq!(formatted.text, "100,000,000,000,000.00");
    }

    #[test]
    fn test_overlong_input_with_leading_zeros_still_parses() {
        let formatted = format_amount(&format!("{}42", "0".repeat(30)));
        assert!(!formatted.clamped);
        assert_eq!(formatted.text, "42.00");
    }
}

mod trillion_scale {
    use super::*;

    #[test]
    fn test_floor_boundary_uses_manual_grouping() {
        let formatted = format_value(MANUAL_GROUPING_FLOOR);
        assert_eq!(formatted.text, "1,000,000,000,000.00");
    }

    #[test]
    fn test_thirteen_digit_amount() {
        assert_eq!(
            format_value(dec!(9876543210987.65)).text,
            "9,876,543,210,987.65"
        );
    }

    #[test]
    fn test_fourteen_digit_amount() {
        assert_eq!(
            format_value(dec!(12345678901234.56)).text,
            "12,345,678,901,234.56"
        );
    }

    #[test]
    fn test_grouping_is_continuous_across_the_floor() {
        let below = format_value(MANUAL_GROUPING_FLOOR - dec!(0.01));
        let at = format_value(MANUAL_GROUPING_FLOOR);
        assert_eq!(below.text, "999,999,999,999.99");
        assert_eq!(at.text, "1,000,000,000,000.00");
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_amount("1234.56"), dec!(1234.56));
    }

    #[test]
    fn test_parse_grouped_number() {
        assert_eq!(parse_amount("12,345,678.90"), dec!(12345678.90));
    }

    #[test]
    fn test_parse_empty_returns_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
    }

    #[test]
    fn test_parse_stops_at_first_foreign_character() {
        assert_eq!(parse_amount("42.5 pcs"), dec!(42.5));
    }

    #[test]
    fn test_parse_handles_integer_text() {
        assert_eq!(parse_amount("1,000"), dec!(1000));
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn test_round_trip_at_representative_magnitudes() {
        let cases = [
            dec!(0),
            dec!(0.01),
            dec!(1),
            dec!(999.99),
            dec!(1000),
            dec!(654321.09),
            dec!(999999999999.99),
            dec!(1000000000000),
            dec!(99999999999999.99),
            dec!(100000000000000),
        ];
        for value in cases {
            let formatted = format_value(value);
            assert_eq!(
                parse_amount(&formatted.text),
                value,
                "round trip failed for {}",
                value
            );
        }
    }
}
