//! # strictconv
//!
//! Strict string-to-primitive conversion and bounded formatting for plugin
//! hosts that read their configuration as text.
//!
//! ## What is strict?
//!
//! A conversion succeeds only when the *whole* input is one value. The C
//! `strtol` family happily returns `123` for `"123abc"`; the functions here
//! reject it. Integers that do not fit their target type are rejected, never
//! clamped or wrapped, and a failed conversion never touches the caller's
//! output.
//!
//! ## Key Features
//!
//! - **Whole-string parsing**: `parse_int32`, `parse_uint32`, `parse_int64`,
//!   `parse_uint64`, `parse_float`, `parse_double`
//! - **C-compatible grammar**: bases 2 to 36, `0x`/`0` prefix detection,
//!   hex floats, `inf`/`nan`
//! - **Absent-aware equality**: [`equal`] and [`equal_n`] treat `None` like a
//!   null pointer
//! - **Literal booleans**: [`parse_bool`] accepts `"true"` and `"1"` only
//! - **Bounded formatting**: [`format_bounded!`] always nul-terminates and
//!   reports how many bytes it actually wrote
//! - **No hidden state**: no `errno`, every result is returned directly
//!
//! ## Quick Start
//!
//! ```rust
//! use strictconv::{parse_bool, parse_uint32, parse_double};
//!
//! let mut rate = 44100u32;
//! assert!(parse_uint32(Some("48000"), &mut rate, 10));
//! assert_eq!(rate, 48000);
//!
//! // Partial numbers are rejected and the old value survives
//! assert!(!parse_uint32(Some("48k"), &mut rate, 10));
//! assert_eq!(rate, 48000);
//!
//! let mut gain = 1.0f64;
//! assert!(parse_double(Some("0.5"), &mut gain));
//!
//! assert!(parse_bool(Some("true")));
//! assert!(!parse_bool(Some("yes")));
//! ```
//!
//! ### Knowing why a conversion failed
//!
//! ```rust
//! use strictconv::{try_parse_int, Error, Radix};
//!
//! assert_eq!(try_parse_int::<i32>("0x7fffffff", Radix::AUTO), Ok(i32::MAX));
//! assert_eq!(
//!     try_parse_int::<i32>("0x80000000", Radix::AUTO),
//!     Err(Error::OutOfRange { kind: "int32" })
//! );
//! ```
//!
//! ### Formatting into a fixed buffer
//!
//! ```rust
//! use strictconv::{bounded_str, format_bounded};
//!
//! let mut buf = [0u8; 6];
//! let len = format_bounded!(&mut buf, "{}:{}", "card", 12).unwrap();
//! assert_eq!(len, 5);
//! assert_eq!(bounded_str(&buf), b"card:");
//! ```
//!
//! ## Error Handling
//!
//! Three policies, never mixed:
//!
//! - Bad data is recoverable: `parse_*` return `false`, `try_*` return an
//!   [`Error`].
//! - Misuse is fatal: formatting into a zero-sized buffer aborts the process.
//! - [`equal`], [`equal_n`] and [`parse_bool`] cannot fail.
//!
//! ## Logging
//!
//! Rejected conversions and truncated formats are reported as `trace` level
//! [`tracing`] events. The crate never installs a subscriber.

pub mod boolean;
pub mod equality;
pub mod error;
pub mod format;
pub mod number;
pub mod options;
mod scan;
pub mod value;

pub use boolean::parse_bool;
pub use equality::{equal, equal_n};
pub use error::{Error, Result, UnknownKind};
pub use format::{assert_capacity, bounded_str, format_bounded_v};
pub use number::{
    parse_double, parse_float, parse_int32, parse_int64, parse_uint32, parse_uint64,
    try_parse_float, try_parse_int, StrictFloat, StrictInt,
};
pub use options::Radix;
pub use value::{Kind, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_style_usage() {
        let props = [("rate", "48000"), ("channels", "2x"), ("mute", "1")];

        let mut rate = 44100u32;
        let mut channels = 2u32;
        let mut mute = false;
        for (key, value) in props {
            match key {
                "rate" => assert!(parse_uint32(Some(value), &mut rate, 0)),
                "channels" => assert!(!parse_uint32(Some(value), &mut channels, 0)),
                "mute" => mute = parse_bool(Some(value)),
                _ => unreachable!(),
            }
        }

        assert_eq!(rate, 48000);
        assert_eq!(channels, 2);
        assert!(mute);
    }

    #[test]
    fn test_key_prefix_matching() {
        let key = Some("node.latency");
        assert!(equal_n(key, Some("node."), 5));
        assert!(!equal(key, Some("node.")));
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
        assert_send_sync::<Value>();
        assert_send_sync::<Radix>();
    }
}
