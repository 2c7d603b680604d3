//! Numeric base configuration for integer parsing.
//!
//! [`Radix`] follows the C `strtol` convention: base `0` detects the base
//! from the input's prefix, `2..=36` fixes it.
//!
//! ## Examples
//!
//! ```rust
//! use strictconv::{try_parse_int, Radix};
//!
//! assert_eq!(try_parse_int::<i32>("0x1f", Radix::AUTO), Ok(31));
//! assert_eq!(try_parse_int::<i32>("017", Radix::AUTO), Ok(15));
//! assert_eq!(try_parse_int::<i32>("1f", Radix::HEX), Ok(31));
//! assert!(Radix::new(37).is_err());
//! ```

use crate::{Error, Result};
use std::fmt;

/// The numeric base used to scan an integer.
///
/// # Examples
///
/// ```rust
/// use strictconv::Radix;
///
/// assert_eq!(Radix::DECIMAL.get(), 10);
/// assert!(Radix::AUTO.is_auto());
/// assert_eq!(Radix::new(16).unwrap(), Radix::HEX);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Detect the base from the prefix: `0x` is hex, a leading `0` octal,
    /// anything else decimal.
    pub const AUTO: Radix = Radix(0);
    /// Base 2.
    pub const BINARY: Radix = Radix(2);
    /// Base 8, no prefix required.
    pub const OCTAL: Radix = Radix(8);
    /// Base 10, the default.
    pub const DECIMAL: Radix = Radix(10);
    /// Base 16; an optional `0x`/`0X` prefix is skipped.
    pub const HEX: Radix = Radix(16);

    /// Validates a raw base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadix`] unless `base` is 0 or in `2..=36`.
    pub const fn new(base: u32) -> Result<Self> {
        match base {
            0 | 2..=36 => Ok(Radix(base)),
            _ => Err(Error::InvalidRadix(base)),
        }
    }

    /// The raw base, `0` for auto-detection.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether the base is detected from the text's prefix.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        self.0 == 0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(base: u32) -> Result<Self> {
        Radix::new(base)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            f.write_str("auto")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bases() {
        assert_eq!(Radix::new(0), Ok(Radix::AUTO));
        assert_eq!(Radix::new(2), Ok(Radix::BINARY));
        assert_eq!(Radix::new(36).map(Radix::get), Ok(36));
    }

    #[test]
    fn test_invalid_bases() {
        assert_eq!(Radix::new(1), Err(Error::InvalidRadix(1)));
        assert_eq!(Radix::new(37), Err(Error::InvalidRadix(37)));
        assert_eq!(Radix::try_from(u32::MAX), Err(Error::InvalidRadix(u32::MAX)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Radix::AUTO.to_string(), "auto");
        assert_eq!(Radix::HEX.to_string(), "16");
        assert_eq!(Radix::default(), Radix::DECIMAL);
    }
}
