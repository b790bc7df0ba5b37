//! Property tests for the numeric formatter

use heapless::String;
use proptest::prelude::*;
use sensorpanel_core::format::{float_to_text, int_to_text};

fn digit_count(value: i32) -> usize {
    let mut magnitude = value.unsigned_abs();
    let mut count = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        count += 1;
    }
    count
}

proptest! {
    #[test]
    fn int_text_parses_back(value in any::<i32>(), min_digits in 0usize..20) {
        let mut text: String<40> = String::new();
        int_to_text(value, min_digits, &mut text).unwrap();

        let parsed: i64 = text.as_str().parse().unwrap();
        prop_assert_eq!(parsed, value as i64);
    }

    #[test]
    fn int_text_digit_count(value in any::<i32>(), min_digits in 0usize..20) {
        let mut text: String<40> = String::new();
        let written = int_to_text(value, min_digits, &mut text).unwrap();

        let sign = usize::from(value < 0);
        let digits = text.len() - sign;
        prop_assert_eq!(digits, min_digits.max(digit_count(value)));
        prop_assert_eq!(written, text.len());
        prop_assert_eq!(text.starts_with('-'), value < 0);
    }

    #[test]
    fn int_text_never_overruns(value in any::<i32>(), min_digits in 0usize..20) {
        let mut text: String<6> = String::new();
        let _ = int_to_text(value, min_digits, &mut text);
        prop_assert!(text.len() <= 6);
    }

    #[test]
    fn float_text_truncates_toward_zero(value in -100_000.0f32..100_000.0, digits in 1usize..4) {
        let mut text: String<32> = String::new();
        float_to_text(value, digits, &mut text).unwrap();

        let (int_text, frac_text) = text.as_str().split_once('.').unwrap();
        prop_assert_eq!(frac_text.len(), digits);

        let parsed: f64 = text.as_str().parse().unwrap();
        let mut step = 1.0f64;
        for _ in 0..digits {
            step /= 10.0;
        }
        // Truncation keeps the rendered magnitude at or below the input
        prop_assert!(parsed.abs() <= (value as f64).abs() + 1e-9);
        prop_assert!((value as f64).abs() - parsed.abs() < step + 1e-6);
        prop_assert_eq!(int_text.starts_with('-'), value < 0.0);
    }
}
