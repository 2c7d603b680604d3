//! Boolean literal recognition.

use crate::equal;

/// True iff `text` is exactly `"true"` or `"1"`.
///
/// This never fails: absent, empty and unrecognized input (`"TRUE"`, `"yes"`,
/// `"0"`) are all `false`. Callers that need to tell an explicit `false` from
/// garbage must validate the text themselves.
///
/// # Examples
///
/// ```rust
/// use strictconv::parse_bool;
///
/// assert!(parse_bool(Some("true")));
/// assert!(parse_bool(Some("1")));
/// assert!(!parse_bool(Some("yes")));
/// assert!(!parse_bool(None));
/// ```
#[must_use]
pub fn parse_bool(text: Option<&str>) -> bool {
    equal(text, Some("true")) || equal(text, Some("1"))
}
