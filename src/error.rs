//! Error types for strict conversions and bounded formatting.
//!
//! The `parse_*` entry points only report success or failure as a `bool`.
//! The reason behind a failure is still available through the `try_*`
//! functions and [`Value::try_parse`](crate::Value::try_parse), which return this
//! module's [`Error`].
//!
//! ## Error Categories
//!
//! - **Input errors**: absent or empty text, no digits, trailing characters
//! - **Range errors**: the value overflowed while scanning, underflowed to
//!   zero or an inexact subnormal, or does not fit the requested target type
//! - **Configuration errors**: an unsupported numeric base, or an unknown
//!   [`Kind`](crate::Kind) name ([`UnknownKind`])
//! - **Formatting errors**: a `Display` implementation failed mid-write
//!
//! A zero-capacity format buffer is *not* an error: it is a caller bug and
//! aborts the process (see [`format`](crate::format)).
//!
//! ## Examples
//!
//! ```rust
//! use strictconv::{try_parse_int, Error, Radix};
//!
//! let err = try_parse_int::<u32>("42xyz", Radix::DECIMAL).unwrap_err();
//! assert_eq!(err, Error::TrailingCharacters { position: 2 });
//! ```

use thiserror::Error;

/// Everything that can make a strict conversion fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was absent or empty
    #[error("input is empty")]
    Empty,

    /// The base is neither 0 (auto-detect) nor in `2..=36`
    #[error("invalid radix {0}: expected 0 or 2..=36")]
    InvalidRadix(u32),

    /// No digits matched the numeric grammar
    #[error("no digits found")]
    NoDigits,

    /// A valid number was followed by more text
    #[error("unexpected trailing characters at byte {position}")]
    TrailingCharacters { position: usize },

    /// The magnitude exceeded the wide intermediate type, or a float rounded
    /// to infinity
    #[error("value overflows the representable range")]
    Overflow,

    /// A float with a nonzero mantissa rounded to zero, or to a subnormal
    /// that is not exactly the written value
    #[error("value underflows the representable range")]
    Underflow,

    /// The value parsed, but does not fit the target type
    #[error("value out of range for {kind}")]
    OutOfRange { kind: &'static str },

    /// A formatting trait implementation returned an error
    #[error("formatting failed")]
    Format,
}

impl Error {
    /// Whether this error comes from the value's magnitude rather than its
    /// syntax.
    ///
    /// ```rust
    /// use strictconv::Error;
    ///
    /// assert!(Error::Overflow.is_range());
    /// assert!(!Error::NoDigits.is_range());
    /// ```
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(
            self,
            Error::Overflow | Error::Underflow | Error::OutOfRange { .. }
        )
    }
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Error::Format
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A [`Kind`](crate::Kind) name that is not one of the known kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value kind: {0}")]
pub struct UnknownKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::TrailingCharacters { position: 3 }.to_string(),
            "unexpected trailing characters at byte 3"
        );
        assert_eq!(
            Error::OutOfRange { kind: "uint32" }.to_string(),
            "value out of range for uint32"
        );
        assert_eq!(
            UnknownKind("int".to_string()).to_string(),
            "unknown value kind: int"
        );
    }

    #[test]
    fn test_fmt_error_converts() {
        assert_eq!(Error::from(std::fmt::Error), Error::Format);
        assert!(!Error::Format.is_range());
    }
}
