//! Numeric-to-text conversion
//!
//! Converts integers and floats to decimal text without going through
//! `core::fmt`. Output is appended to a caller-supplied fixed-capacity
//! string; nothing is ever written past its capacity.
//!
//! Sizing: an `i32` needs at most 11 characters (sign + 10 digits). A float
//! needs sign + 10 integer digits + `.` + the requested fractional digits,
//! so [`NUMBER_TEXT_CAPACITY`] covers every float with up to 12 fractional
//! digits.

use heapless::String;

/// Longest `i32` rendering: `-2147483648`
pub const MAX_INT_CHARS: usize = 11;

/// Capacity of [`NumberText`]
pub const NUMBER_TEXT_CAPACITY: usize = 24;

/// Fixed-capacity text holding one converted number
pub type NumberText = String<NUMBER_TEXT_CAPACITY>;

/// Fractional digits actually computed; further requested digits are zeros
const MAX_SIGNIFICANT_FRACTION_DIGITS: usize = 9;

/// Formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Output did not fit; the first `written` characters were kept
    Overflow { written: usize },
}

/// Appends characters until the destination is full, remembering overflow
struct Sink<'a, const N: usize> {
    out: &'a mut String<N>,
    start: usize,
    overflowed: bool,
}

impl<'a, const N: usize> Sink<'a, N> {
    fn new(out: &'a mut String<N>) -> Self {
        let start = out.len();
        Self {
            out,
            start,
            overflowed: false,
        }
    }

    fn push(&mut self, byte: u8) {
        if !self.overflowed && self.out.push(byte as char).is_err() {
            self.overflowed = true;
        }
    }

    fn push_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    fn finish(self) -> Result<usize, FormatError> {
        let written = self.out.len() - self.start;
        if self.overflowed {
            Err(FormatError::Overflow { written })
        } else {
            Ok(written)
        }
    }
}

/// Fill `scratch` with the decimal digits of `magnitude`, most significant
/// first, and return how many were written. Zero yields a single `0`.
fn decimal_digits(mut magnitude: u32, scratch: &mut [u8; 10]) -> usize {
    let mut count = 0;
    loop {
        scratch[count] = b'0' + (magnitude % 10) as u8;
        count += 1;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    // Digits come out least significant first
    scratch[..count].reverse();
    count
}

/// Emit an optional sign, zero padding up to `min_digits`, then the digits
fn write_magnitude<const N: usize>(
    sink: &mut Sink<'_, N>,
    negative: bool,
    magnitude: u32,
    min_digits: usize,
) {
    let mut scratch = [0u8; 10];
    let count = decimal_digits(magnitude, &mut scratch);

    if negative {
        sink.push(b'-');
    }
    for _ in count..min_digits {
        sink.push(b'0');
    }
    sink.push_all(&scratch[..count]);
}

/// Append the decimal text of `value` to `out`
///
/// The digit count (sign excluded) is at least `min_digits`, padded with
/// leading zeros. Zero always produces at least one `0`. Negative values get
/// a single leading `-`.
///
/// Returns the number of characters written, sign included. If `out` fills
/// up, the text is truncated and [`FormatError::Overflow`] reports how much
/// was kept.
pub fn int_to_text<const N: usize>(
    value: i32,
    min_digits: usize,
    out: &mut String<N>,
) -> Result<usize, FormatError> {
    let mut sink = Sink::new(out);
    write_magnitude(&mut sink, value < 0, value.unsigned_abs(), min_digits);
    sink.finish()
}

/// Append the decimal text of `value` with `fraction_digits` digits after
/// the point
///
/// The fractional part is truncated, not rounded: `3.14159` with two digits
/// is `3.14`. The sign is emitted once, even when the integer part is zero
/// (`-0.5` becomes `-0.50`). With `fraction_digits == 0` no point is written.
///
/// The integer magnitude saturates at `u32::MAX`. Only the first nine
/// fractional digits carry information; any beyond are written as zeros.
/// Non-finite values produce `NaN`, `Inf` or `-Inf`.
pub fn float_to_text<const N: usize>(
    value: f32,
    fraction_digits: usize,
    out: &mut String<N>,
) -> Result<usize, FormatError> {
    let mut sink = Sink::new(out);

    if value.is_nan() {
        sink.push_all(b"NaN");
        return sink.finish();
    }
    if value.is_infinite() {
        let sentinel: &[u8] = if value < 0.0 { b"-Inf" } else { b"Inf" };
        sink.push_all(sentinel);
        return sink.finish();
    }

    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };

    let int_part = if magnitude >= 4_294_967_296.0 {
        u32::MAX
    } else {
        magnitude as u32
    };
    let fraction = if int_part == u32::MAX {
        0.0
    } else {
        magnitude - int_part as f32
    };

    write_magnitude(&mut sink, negative, int_part, 1);

    if fraction_digits > 0 {
        sink.push(b'.');

        let significant = fraction_digits.min(MAX_SIGNIFICANT_FRACTION_DIGITS);
        let mut scale: u32 = 1;
        for _ in 0..significant {
            scale *= 10;
        }

        let scaled = (fraction as f64 * scale as f64) as u32;
        write_magnitude(&mut sink, false, scaled.min(scale - 1), significant);

        for _ in significant..fraction_digits {
            sink.push(b'0');
        }
    }

    sink.finish()
}

/// Integer as [`NumberText`]
///
/// Any `i32` fits with up to 23 digits of padding. Wider padding is
/// truncated to the capacity and logged.
pub fn format_int(value: i32, min_digits: usize) -> NumberText {
    let mut text = NumberText::new();
    if let Err(_e) = int_to_text(value, min_digits, &mut text) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Integer text truncated: {}", _e);
    }
    text
}

/// Float as [`NumberText`]
///
/// Any float fits with up to 12 fractional digits, the saturated integer
/// part included (`-4294967295.000000000000` is exactly 24 characters).
/// More digits are truncated to the capacity and logged.
pub fn format_float(value: f32, fraction_digits: usize) -> NumberText {
    let mut text = NumberText::new();
    if let Err(_e) = float_to_text(value, fraction_digits, &mut text) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Float text truncated: {}", _e);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i32, min_digits: usize) -> (NumberText, usize) {
        let mut text = NumberText::new();
        let written = int_to_text(value, min_digits, &mut text).unwrap();
        (text, written)
    }

    fn float(value: f32, digits: usize) -> NumberText {
        let mut text = NumberText::new();
        float_to_text(value, digits, &mut text).unwrap();
        text
    }

    #[test]
    fn test_zero_is_never_empty() {
        assert_eq!(int(0, 0).0.as_str(), "0");
        assert_eq!(int(0, 1).0.as_str(), "0");
        assert_eq!(int(0, 3).0.as_str(), "000");
    }

    #[test]
    fn test_negative_padding() {
        let (text, written) = int(-5, 2);
        assert_eq!(text.as_str(), "-05");
        assert_eq!(written, 3);
    }

    #[test]
    fn test_no_padding_when_wider() {
        assert_eq!(int(2412, 1).0.as_str(), "2412");
        assert_eq!(int(-2412, 2).0.as_str(), "-2412");
    }

    #[test]
    fn test_int_extremes() {
        let (text, written) = int(i32::MIN, 1);
        assert_eq!(text.as_str(), "-2147483648");
        assert_eq!(written, MAX_INT_CHARS);
        assert_eq!(int(i32::MAX, 1).0.as_str(), "2147483647");
    }

    #[test]
    fn test_appends_after_existing_text() {
        let mut text: String<16> = String::new();
        text.push_str("Ch ").unwrap();
        let written = int_to_text(36, 1, &mut text).unwrap();
        assert_eq!(written, 2);
        assert_eq!(text.as_str(), "Ch 36");
    }

    #[test]
    fn test_int_overflow_truncates() {
        let mut text: String<3> = String::new();
        let result = int_to_text(-12345, 1, &mut text);
        assert_eq!(result, Err(FormatError::Overflow { written: 3 }));
        assert_eq!(text.as_str(), "-12");
    }

    #[test]
    fn test_float_truncates_not_rounds() {
        assert_eq!(float(3.14159, 2).as_str(), "3.14");
        assert_eq!(float(2.999, 2).as_str(), "2.99");
    }

    #[test]
    fn test_float_negative_below_one_keeps_sign() {
        assert_eq!(float(-0.5, 2).as_str(), "-0.50");
        assert_eq!(float(-0.001, 2).as_str(), "-0.00");
    }

    #[test]
    fn test_float_pads_fraction() {
        // 233.007 must keep the leading zeros of the fraction
        assert_eq!(float(233.007, 3).as_str(), "233.007");
        assert_eq!(float(1.05, 1).as_str(), "1.0");
        assert_eq!(float(-12.0, 2).as_str(), "-12.00");
    }

    #[test]
    fn test_float_without_fraction() {
        assert_eq!(float(7.9, 0).as_str(), "7");
        assert_eq!(float(-7.9, 0).as_str(), "-7");
    }

    #[test]
    fn test_float_negative_zero_is_unsigned() {
        assert_eq!(float(-0.0, 2).as_str(), "0.00");
    }

    #[test]
    fn test_float_non_finite_sentinels() {
        assert_eq!(float(f32::NAN, 2).as_str(), "NaN");
        assert_eq!(float(f32::INFINITY, 2).as_str(), "Inf");
        assert_eq!(float(f32::NEG_INFINITY, 2).as_str(), "-Inf");
    }

    #[test]
    fn test_float_saturates_integer_part() {
        assert_eq!(float(1.0e12, 1).as_str(), "4294967295.0");
        assert_eq!(float(-1.0e12, 0).as_str(), "-4294967295");
    }

    #[test]
    fn test_float_extra_fraction_digits_are_zero() {
        let text = float(0.5, 12);
        assert_eq!(text.as_str(), "0.500000000000");
    }

    #[test]
    fn test_float_overflow_truncates() {
        let mut text: String<4> = String::new();
        let result = float_to_text(1013.25, 2, &mut text);
        assert_eq!(result, Err(FormatError::Overflow { written: 4 }));
        assert_eq!(text.as_str(), "1013");
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_int(-7, 3).as_str(), "-007");
        assert_eq!(format_float(328.08399, 2).as_str(), "328.08");
    }

    #[test]
    fn test_format_int_truncates_huge_padding() {
        let text = format_int(1, 40);
        assert_eq!(text.len(), NUMBER_TEXT_CAPACITY);
    }

    #[test]
    fn test_number_text_holds_worst_case() {
        let mut text = NumberText::new();
        assert_eq!(float_to_text(-f32::MAX, 12, &mut text), Ok(NUMBER_TEXT_CAPACITY));
        assert_eq!(text.as_str(), "-4294967295.000000000000");
        assert_eq!(format_float(-f32::MAX, 12), text);

        let mut text = NumberText::new();
        assert_eq!(int_to_text(i32::MIN, 23, &mut text), Ok(NUMBER_TEXT_CAPACITY));
        assert_eq!(format_int(i32::MIN, 23), text);
    }

    #[test]
    fn test_wrappers_truncate_past_capacity() {
        let text = format_float(1.5, 20);
        assert_eq!(text.len(), NUMBER_TEXT_CAPACITY);
        assert!(text.starts_with("1.5000"));

        let text = format_int(-7, 30);
        assert_eq!(text.len(), NUMBER_TEXT_CAPACITY);
        assert!(text.starts_with("-000"));
    }
}
