//! Bounded, nul-terminated formatting into fixed buffers.
//!
//! This is `snprintf` with two changes: the returned length is clamped to
//! what was actually written, and a zero-sized buffer is a caller bug that
//! aborts the process instead of returning a sentinel.
//!
//! ## Return value
//!
//! | Situation | Buffer | Returns |
//! |-----------|--------|---------|
//! | output fits (`len < capacity`) | output + NUL | `Ok(len)` |
//! | output too long | first `capacity - 1` bytes + NUL | `Ok(capacity - 1)` |
//! | a `Display` impl fails | `buffer[0] == 0` | `Err(Error::Format)` |
//! | `capacity == 0` | untouched | aborts the process |
//!
//! ## Examples
//!
//! ```rust
//! use strictconv::{bounded_str, format_bounded};
//!
//! let mut buf = [0u8; 4];
//! assert_eq!(format_bounded!(&mut buf, "hello"), Ok(3));
//! assert_eq!(bounded_str(&buf), b"hel");
//!
//! let mut buf = [0u8; 10];
//! assert_eq!(format_bounded!(&mut buf, "{}-{}", 4, 2), Ok(3));
//! assert_eq!(bounded_str(&buf), b"4-2");
//! ```

use crate::{Error, Result};
use std::fmt;

/// Writes into a byte buffer, keeping the last byte for the terminator and
/// counting the bytes that did not fit.
struct BoundedWriter<'a> {
    buffer: &'a mut [u8],
    written: usize,
    required: usize,
}

impl<'a> BoundedWriter<'a> {
    fn new(buffer: &'a mut [u8]) -> Self {
        BoundedWriter {
            buffer,
            written: 0,
            required: 0,
        }
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buffer.len() - 1 - self.written;
        let take = s.len().min(room);
        self.buffer[self.written..self.written + take].copy_from_slice(&s.as_bytes()[..take]);
        self.written += take;
        self.required = self.required.saturating_add(s.len());
        Ok(())
    }
}

/// Aborts the process unless `capacity` is positive.
///
/// A zero capacity is a programming error, not bad data, so it never becomes
/// an [`Error`]. It does not unwind either, whatever the panic strategy: the
/// caller's location is logged at error level, then the process aborts.
#[track_caller]
pub fn assert_capacity(capacity: usize) {
    if capacity == 0 {
        let caller = std::panic::Location::caller();
        tracing::error!(%caller, "bounded format buffer must have a positive capacity");
        std::process::abort();
    }
}

/// Formats `args` into `buffer`, truncating and nul-terminating.
///
/// The capacity is `buffer.len()`. Returns the number of content bytes in the
/// buffer: the full length when it fits, `capacity - 1` when truncated.
///
/// # Errors
///
/// Returns [`Error::Format`] if a formatting trait implementation fails; the
/// buffer then holds the empty string.
///
/// # Aborts
///
/// Aborts the process if `buffer` is empty; see [`assert_capacity`].
pub fn format_bounded_v(buffer: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize> {
    assert_capacity(buffer.len());

    let mut writer = BoundedWriter::new(buffer);
    let outcome = fmt::write(&mut writer, args);
    let (written, required) = (writer.written, writer.required);

    if outcome.is_err() {
        buffer[0] = 0;
        return Err(Error::Format);
    }

    buffer[written] = 0;
    if required < buffer.len() {
        Ok(required)
    } else {
        tracing::trace!(required, capacity = buffer.len(), "truncated bounded format");
        Ok(buffer.len() - 1)
    }
}

/// Formats into a byte buffer with [`format_bounded_v`].
///
/// ```rust
/// use strictconv::format_bounded;
///
/// let mut name = [0u8; 8];
/// let len = format_bounded!(&mut name, "node-{:04}", 12345).unwrap();
/// assert_eq!(len, 7);
/// assert_eq!(&name, b"node-12\0");
/// ```
#[macro_export]
macro_rules! format_bounded {
    ($buffer:expr, $($arg:tt)*) => {
        $crate::format::format_bounded_v($buffer, ::std::format_args!($($arg)*))
    };
}

/// The content of a nul-terminated buffer: every byte before the first NUL,
/// or the whole buffer if it has none.
#[must_use]
pub fn bounded_str(buffer: &[u8]) -> &[u8] {
    match buffer.iter().position(|&b| b == 0) {
        Some(end) => &buffer[..end],
        None => buffer,
    }
}
