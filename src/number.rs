//! Strict numeric conversions.
//!
//! A conversion succeeds only when the *entire* text is one number: `"123abc"`
//! and `"3.14 "` are rejected instead of yielding a prefix. Integers are
//! scanned at wide precision and then narrowed; a value that does not fit the
//! target is rejected, never clamped or wrapped.
//!
//! Two layers are provided:
//!
//! - [`try_parse_int`] and [`try_parse_float`] return a [`Result`] carrying the
//!   reason for a failure.
//! - The `parse_*` functions take an output slot and return `bool`. On failure
//!   the slot is left exactly as it was, so a default written beforehand
//!   survives a bad value.
//!
//! ```rust
//! use strictconv::{parse_int32, parse_uint32};
//!
//! let mut port = 8080u32;
//! assert!(!parse_uint32(Some("80 80"), &mut port, 10));
//! assert_eq!(port, 8080);
//!
//! let mut offset = 0i32;
//! assert!(parse_int32(Some("-0x20"), &mut offset, 0));
//! assert_eq!(offset, -32);
//! ```

use crate::scan::{self, c_text};
use crate::{Error, Radix, Result};

/// Integer types the strict scanner can narrow into.
///
/// The scanner produces an `i128`; `TryFrom<i128>` is the narrowing check.
pub trait StrictInt: TryFrom<i128> + Copy {
    /// Name used in [`Error::OutOfRange`].
    const KIND: &'static str;
}

macro_rules! impl_strict_int {
    ($($ty:ty => $kind:literal),* $(,)?) => {$(
        impl StrictInt for $ty {
            const KIND: &'static str = $kind;
        }
    )*};
}

impl_strict_int! {
    i8 => "int8",
    u8 => "uint8",
    i16 => "int16",
    u16 => "uint16",
    i32 => "int32",
    u32 => "uint32",
    i64 => "int64",
    u64 => "uint64",
}

/// Floating point types accepted by [`try_parse_float`]: `f32` and `f64`.
///
/// This trait is sealed.
pub trait StrictFloat: scan::Float {
    const KIND: &'static str;
}

impl StrictFloat for f32 {
    const KIND: &'static str = "float";
}

impl StrictFloat for f64 {
    const KIND: &'static str = "double";
}

/// Parses all of `text` as an integer in `radix` and narrows it to `T`.
///
/// Text after a NUL byte is ignored. Leading C whitespace and a sign are
/// accepted, trailing characters of any kind are not.
///
/// # Examples
///
/// ```rust
/// use strictconv::{try_parse_int, Error, Radix};
///
/// assert_eq!(try_parse_int::<u32>("4294967295", Radix::DECIMAL), Ok(u32::MAX));
/// assert_eq!(
///     try_parse_int::<u32>("4294967296", Radix::DECIMAL),
///     Err(Error::OutOfRange { kind: "uint32" })
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Empty`], [`Error::NoDigits`] or
/// [`Error::TrailingCharacters`] for malformed text, [`Error::Overflow`] when
/// the magnitude exceeds 64 bits, and [`Error::OutOfRange`] when the value
/// does not fit `T`.
pub fn try_parse_int<T: StrictInt>(text: &str, radix: Radix) -> Result<T> {
    let wide = scan::integer(c_text(text), radix)?;
    T::try_from(wide).map_err(|_| Error::OutOfRange { kind: T::KIND })
}

/// Parses all of `text` as a floating point number.
///
/// Accepts decimal and hexadecimal (`0x1.8p3`) notation as well as
/// `inf`, `infinity` and `nan`, case-insensitively.
///
/// # Examples
///
/// ```rust
/// use strictconv::{try_parse_float, Error};
///
/// assert_eq!(try_parse_float::<f64>("2.5e3"), Ok(2500.0));
/// assert_eq!(try_parse_float::<f32>("1e39"), Err(Error::Overflow));
/// ```
///
/// # Errors
///
/// Returns [`Error::Empty`], [`Error::NoDigits`] or
/// [`Error::TrailingCharacters`] for malformed text, [`Error::Overflow`] when
/// it rounds to infinity, and [`Error::Underflow`] when it rounds to zero or
/// to a subnormal that is not exactly the written value.
pub fn try_parse_float<T: StrictFloat>(text: &str) -> Result<T> {
    scan::float(c_text(text))
}

/// Runs `parse` on present input and stores the value only on success.
fn store<T>(text: Option<&str>, out: &mut T, parse: impl FnOnce(&str) -> Result<T>) -> bool {
    let Some(text) = text else {
        return false;
    };
    match parse(text) {
        Ok(value) => {
            *out = value;
            true
        }
        Err(error) => {
            tracing::trace!(input = text, %error, "rejected strict conversion");
            false
        }
    }
}

fn store_int<T: StrictInt>(text: Option<&str>, out: &mut T, base: u32) -> bool {
    store(text, out, |s| try_parse_int(s, Radix::new(base)?))
}

/// Converts `text` to an `i32` in the given base (0 auto-detects).
///
/// Returns `false` and leaves `out` unmodified if `text` is absent, empty,
/// not entirely a number, or outside the `i32` range.
pub fn parse_int32(text: Option<&str>, out: &mut i32, base: u32) -> bool {
    store_int(text, out, base)
}

/// Converts `text` to a `u32` in the given base (0 auto-detects).
///
/// Negative values are rejected, as is anything above `u32::MAX`. `"-0"` is
/// zero.
pub fn parse_uint32(text: Option<&str>, out: &mut u32, base: u32) -> bool {
    store_int(text, out, base)
}

/// Converts `text` to an `i64` in the given base (0 auto-detects).
pub fn parse_int64(text: Option<&str>, out: &mut i64, base: u32) -> bool {
    store_int(text, out, base)
}

/// Converts `text` to a `u64` in the given base (0 auto-detects).
///
/// Negative values are rejected. This differs from `strtoull`, which
/// accepts `"-1"` and wraps it to `u64::MAX`; here it fails and `out` keeps
/// its value. `"-0"` is zero.
pub fn parse_uint64(text: Option<&str>, out: &mut u64, base: u32) -> bool {
    store_int(text, out, base)
}

/// Converts `text` to an `f32`. Leaves `out` unmodified on failure.
pub fn parse_float(text: Option<&str>, out: &mut f32) -> bool {
    store(text, out, try_parse_float)
}

/// Converts `text` to an `f64`. Leaves `out` unmodified on failure.
pub fn parse_double(text: Option<&str>, out: &mut f64) -> bool {
    store(text, out, try_parse_float)
}
