//! Strict scanners for the C numeric grammars.
//!
//! Both scanners follow the token grammar of `strtol`/`strtod` but report
//! their outcome directly instead of through `errno` and an end pointer:
//! a scan either matched the *whole* text or fails with the reason.

use crate::{Error, Radix, Result};
use std::fmt::LowerExp;
use std::str::FromStr;

/// The part of `text` a C caller would see: everything before the first NUL.
pub(crate) fn c_text(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}

// isspace() in the C locale
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).copied().is_some_and(is_c_space) {
        pos += 1;
    }
    pos
}

/// Consumes an optional sign, returning whether it was `-`.
fn scan_sign(bytes: &[u8], pos: &mut usize) -> bool {
    match bytes.get(*pos) {
        Some(b'-') => {
            *pos += 1;
            true
        }
        Some(b'+') => {
            *pos += 1;
            false
        }
        _ => false,
    }
}

fn digit(b: Option<&u8>, base: u32) -> Option<u32> {
    b.and_then(|&b| char::from(b).to_digit(base))
}

/// True if `bytes[pos..]` starts with `0x`/`0X` followed by a hex digit.
fn has_hex_prefix(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x' | b'X'))
        && digit(bytes.get(pos + 2), 16).is_some()
}

fn finish(bytes: &[u8], pos: usize) -> Result<()> {
    if pos == bytes.len() {
        Ok(())
    } else {
        Err(Error::TrailingCharacters { position: pos })
    }
}

/// Scans a whole integer and returns it at `i128` precision.
///
/// The magnitude is accumulated in a `u64`, so anything beyond
/// `±u64::MAX` is an [`Error::Overflow`]; narrowing to the caller's
/// type happens afterwards.
pub(crate) fn integer(text: &str, radix: Radix) -> Result<i128> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(Error::Empty);
    }

    let mut pos = skip_space(bytes, 0);
    let negative = scan_sign(bytes, &mut pos);

    let base = match radix.get() {
        0 if has_hex_prefix(bytes, pos) => {
            pos += 2;
            16
        }
        0 if bytes.get(pos) == Some(&b'0') => 8,
        0 => 10,
        16 => {
            if has_hex_prefix(bytes, pos) {
                pos += 2;
            }
            16
        }
        base => base,
    };

    let digits_start = pos;
    let mut magnitude: u64 = 0;
    let mut overflow = false;
    while let Some(d) = digit(bytes.get(pos), base) {
        match magnitude
            .checked_mul(u64::from(base))
            .and_then(|m| m.checked_add(u64::from(d)))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        pos += 1;
    }

    if pos == digits_start {
        return Err(Error::NoDigits);
    }
    finish(bytes, pos)?;
    if overflow {
        return Err(Error::Overflow);
    }

    let magnitude = i128::from(magnitude);
    Ok(if negative { -magnitude } else { magnitude })
}

/// Floating point targets the float scanner can produce.
///
/// Lives in a private module, so it cannot be implemented outside the crate.
pub trait Float: Copy + FromStr + LowerExp {
    const INFINITY: Self;
    const NAN: Self;
    /// Significand precision in bits, including the implicit one.
    const MANTISSA_DIGITS: u32;
    /// One more than the exponent of the smallest normal power of two.
    const MIN_EXP: i32;

    fn from_f64(value: f64) -> Self;
    fn negate(self) -> Self;
    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
    fn is_subnormal(self) -> bool;
}

macro_rules! impl_float {
    ($($ty:ty),*) => {$(
        impl Float for $ty {
            const INFINITY: Self = <$ty>::INFINITY;
            const NAN: Self = <$ty>::NAN;
            const MANTISSA_DIGITS: u32 = <$ty>::MANTISSA_DIGITS;
            const MIN_EXP: i32 = <$ty>::MIN_EXP;

            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn negate(self) -> Self {
                -self
            }

            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }

            fn is_zero(self) -> bool {
                self == 0.0
            }

            fn is_subnormal(self) -> bool {
                <$ty>::is_subnormal(self)
            }
        }
    )*};
}

impl_float!(f32, f64);

fn starts_with_ignore_case(bytes: &[u8], pos: usize, word: &str) -> bool {
    bytes
        .get(pos..pos + word.len())
        .is_some_and(|s| s.eq_ignore_ascii_case(word.as_bytes()))
}

/// Length of a `(n-char-sequence)` suffix after `nan`, or 0 if there is none.
fn nan_payload_len(bytes: &[u8], pos: usize) -> usize {
    if bytes.get(pos) != Some(&b'(') {
        return 0;
    }
    let mut end = pos + 1;
    while bytes
        .get(end)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    {
        end += 1;
    }
    if bytes.get(end) == Some(&b')') {
        end + 1 - pos
    } else {
        0
    }
}

/// Consumes `[eE|pP][+-]digits` if a digit follows the marker.
fn scan_exponent(bytes: &[u8], pos: &mut usize, markers: [u8; 2]) -> Option<i64> {
    if !bytes.get(*pos).is_some_and(|b| markers.contains(b)) {
        return None;
    }
    let mut end = *pos + 1;
    let negative = scan_sign(bytes, &mut end);
    digit(bytes.get(end), 10)?;

    // Clamped well past any finite f64 exponent, so saturation is harmless.
    let mut exponent: i64 = 0;
    while let Some(d) = digit(bytes.get(end), 10) {
        exponent = (exponent * 10 + i64::from(d)).min(100_000);
        end += 1;
    }
    *pos = end;
    Some(if negative { -exponent } else { exponent })
}

/// `x * 2^exp` without intermediate overflow or underflow.
fn ldexp(mut x: f64, mut exp: i64) -> f64 {
    // 2^1023, the largest power of two that is finite
    let max_step = f64::from_bits(0x7FE0_0000_0000_0000);
    while exp > 1023 {
        x *= max_step;
        exp -= 1023;
        if x.is_infinite() {
            return x;
        }
    }
    while exp < -1022 {
        x *= f64::MIN_POSITIVE;
        exp += 1022;
        if x == 0.0 {
            return x;
        }
    }
    #[allow(clippy::cast_possible_truncation)]
    let exp = exp as i32;
    x * 2f64.powi(exp)
}

/// A hex float mantissa: `mantissa * 2^exponent`, plus a nonzero tail
/// below the mantissa's last bit when `sticky` is set.
struct HexParts {
    mantissa: u64,
    exponent: i64,
    sticky: bool,
}

/// Scans the mantissa and exponent of a hex float starting after `0x`.
///
/// Keeps the first 64 significant bits; any nonzero digit past them only
/// sets the sticky flag.
fn scan_hex_float(bytes: &[u8], pos: &mut usize) -> HexParts {
    let mut parts = HexParts {
        mantissa: 0,
        exponent: 0,
        sticky: false,
    };
    let mut seen_point = false;

    loop {
        match bytes.get(*pos) {
            Some(b'.') if !seen_point => seen_point = true,
            b => match digit(b, 16) {
                Some(d) => {
                    if parts.mantissa >> 60 == 0 {
                        parts.mantissa = (parts.mantissa << 4) | u64::from(d);
                        if seen_point {
                            parts.exponent -= 4;
                        }
                    } else {
                        parts.sticky |= d != 0;
                        if !seen_point {
                            parts.exponent += 4;
                        }
                    }
                }
                None => break,
            },
        }
        *pos += 1;
    }

    if let Some(e) = scan_exponent(bytes, pos, [b'p', b'P']) {
        parts.exponent += e;
    }
    parts
}

/// Rounds a hex mantissa to the precision of `T`, ties to even, honouring
/// the subnormal range.
///
/// Returns the magnitude and whether rounding lost any bits.
fn round_hex<T: Float>(parts: &HexParts) -> (T, bool) {
    let HexParts {
        mantissa,
        exponent,
        sticky,
    } = *parts;
    if mantissa == 0 {
        return (T::from_f64(0.0), false);
    }

    let precision = i64::from(T::MANTISSA_DIGITS);
    let top = i64::from(63 - mantissa.leading_zeros()) + exponent;
    // Weight of the result's last bit: `precision` bits below the top, but
    // never below the smallest subnormal.
    let lsb = (top - (precision - 1)).max(i64::from(T::MIN_EXP) - precision);
    let shift = lsb - exponent;

    // Fits as is; the sticky tail only exists once all 64 bits are in use.
    if shift <= 0 {
        #[allow(clippy::cast_precision_loss)]
        let value = ldexp(mantissa as f64, exponent);
        return (T::from_f64(value), sticky);
    }

    let (rounded, inexact) = if shift >= 128 {
        (0, true)
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shift = shift as u32;
        let wide = u128::from(mantissa);
        let quotient = wide >> shift;
        let remainder = wide & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        let round_up =
            remainder > half || (remainder == half && (sticky || quotient & 1 == 1));
        (quotient + u128::from(round_up), remainder != 0 || sticky)
    };

    // At most `precision + 1` bits, so the conversion and scaling are exact.
    #[allow(clippy::cast_precision_loss)]
    let value = ldexp(rounded as f64, lsb);
    (T::from_f64(value), inexact)
}

/// Significant digits of a decimal token and the power of ten in front of
/// them: the token is `0.d1d2d3... * 10^scale`.
fn decimal_significand(token: &str) -> Option<(Vec<u8>, i64)> {
    let token = token.trim_start_matches(|c: char| c == '+' || c == '-');
    let (mantissa, exponent) = match token.find(|c: char| c == 'e' || c == 'E') {
        Some(e) => (&token[..e], token[e + 1..].parse::<i64>().ok()?),
        None => (token, 0),
    };

    let int_len = mantissa.find('.').unwrap_or(mantissa.len());
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let leading = digits.iter().take_while(|&&d| d == b'0').count();
    let end = digits
        .iter()
        .rposition(|&d| d != b'0')
        .map_or(leading, |last| last + 1);

    let significant = digits[leading..end].to_vec();
    if significant.is_empty() {
        return Some((significant, 0));
    }
    let scale = i64::try_from(int_len).ok()? + exponent - i64::try_from(leading).ok()?;
    Some((significant, scale))
}

/// True if the decimal `token` is exactly `value`, digit for digit.
fn is_exact_decimal<T: Float>(token: &str, value: T) -> bool {
    // Enough digits for the exact expansion of any f64 subnormal
    let rendered = format!("{value:.800e}");
    match (decimal_significand(token), decimal_significand(&rendered)) {
        (Some(written), Some(stored)) => written == stored,
        _ => false,
    }
}

/// Scans a whole floating point number.
///
/// Finite input that rounds to infinity is an [`Error::Overflow`]. A result
/// that is zero or subnormal and not exactly the written value is an
/// [`Error::Underflow`].
pub(crate) fn float<T: Float>(text: &str) -> Result<T> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(Error::Empty);
    }

    let token_start = skip_space(bytes, 0);
    let mut pos = token_start;
    let negative = scan_sign(bytes, &mut pos);

    if starts_with_ignore_case(bytes, pos, "inf") {
        pos += if starts_with_ignore_case(bytes, pos, "infinity") { 8 } else { 3 };
        finish(bytes, pos)?;
        return Ok(if negative { T::INFINITY.negate() } else { T::INFINITY });
    }

    if starts_with_ignore_case(bytes, pos, "nan") {
        pos += 3;
        pos += nan_payload_len(bytes, pos);
        finish(bytes, pos)?;
        return Ok(if negative { T::NAN.negate() } else { T::NAN });
    }

    let hex = bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x' | b'X'))
        && (digit(bytes.get(pos + 2), 16).is_some()
            || (bytes.get(pos + 2) == Some(&b'.') && digit(bytes.get(pos + 3), 16).is_some()));

    let (value, inexact) = if hex {
        pos += 2;
        let parts = scan_hex_float(bytes, &mut pos);
        finish(bytes, pos)?;
        let (value, inexact) = round_hex::<T>(&parts);
        (if negative { value.negate() } else { value }, inexact)
    } else {
        let mut digits = 0usize;
        let mut nonzero = false;
        let mut seen_point = false;
        loop {
            match bytes.get(pos) {
                Some(b'.') if !seen_point => seen_point = true,
                Some(b @ b'0'..=b'9') => {
                    digits += 1;
                    nonzero |= *b != b'0';
                }
                _ => break,
            }
            pos += 1;
        }
        if digits == 0 {
            return Err(Error::NoDigits);
        }
        scan_exponent(bytes, &mut pos, [b'e', b'E']);
        finish(bytes, pos)?;

        let token = &text[token_start..pos];
        let value = token.parse::<T>().map_err(|_| Error::NoDigits)?;
        // Only tiny results need the exactness check
        let tiny = value.is_zero() || value.is_subnormal();
        (value, tiny && nonzero && !is_exact_decimal(token, value))
    };

    if value.is_infinite() {
        return Err(Error::Overflow);
    }
    if inexact && (value.is_zero() || value.is_subnormal()) {
        return Err(Error::Underflow);
    }
    Ok(value)
}
