//! Byte-wise string equality where absent strings are comparable.
//!
//! Both functions treat `None` like a C null pointer: two absent strings are
//! equal, an absent and a present string never are (even if the present one
//! is empty). Comparison stops at the first NUL byte, as `strcmp` would.

use crate::scan::c_text;

/// True if both strings are absent, or both present with identical bytes.
///
/// # Examples
///
/// ```rust
/// use strictconv::equal;
///
/// assert!(equal(None, None));
/// assert!(equal(Some("abc"), Some("abc")));
/// assert!(!equal(Some(""), None));
/// assert!(!equal(Some("abc"), Some("ABC")));
/// ```
#[must_use]
pub fn equal(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => c_text(a) == c_text(b),
        (None, None) => true,
        _ => false,
    }
}

/// Like [`equal`], but only the first `n` bytes of present strings count.
///
/// This has `strncmp` semantics: the end of the shorter string compares as a
/// NUL byte, so a shared prefix is equal only when it is at least `n` bytes
/// long. Reads never go past either string's end.
///
/// # Examples
///
/// ```rust
/// use strictconv::equal_n;
///
/// assert!(equal_n(Some("audio.rate"), Some("audio.channels"), 6));
/// assert!(equal_n(Some("ab"), Some("abc"), 2));
/// assert!(!equal_n(Some("ab"), Some("abc"), 3));
/// assert!(equal_n(None, None, 4));
/// ```
#[must_use]
pub fn equal_n(a: Option<&str>, b: Option<&str>, n: usize) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            let (a, b) = (c_text(a).as_bytes(), c_text(b).as_bytes());
            a[..n.min(a.len())] == b[..n.min(b.len())]
        }
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_handling() {
        assert!(equal(None, None));
        assert!(!equal(None, Some("")));
        assert!(!equal(Some("x"), None));
        assert!(!equal_n(None, Some("x"), 0));
        assert!(!equal_n(Some(""), None, 5));
    }

    #[test]
    fn test_equal_full_length() {
        assert!(equal(Some(""), Some("")));
        assert!(!equal(Some("abc"), Some("abcd")));
        assert!(equal(Some("a\0b"), Some("a\0c")));
    }

    #[test]
    fn test_equal_n_prefix() {
        assert!(equal_n(Some("abcdef"), Some("abcxyz"), 3));
        assert!(!equal_n(Some("abcdef"), Some("abcxyz"), 4));
        assert!(equal_n(Some("x"), Some("y"), 0));
    }

    #[test]
    fn test_equal_n_past_end() {
        assert!(equal_n(Some("abc"), Some("abc"), 100));
        assert!(!equal_n(Some("abc"), Some("abcd"), 100));
        assert!(!equal_n(Some(""), Some("a"), 1));
    }
}
