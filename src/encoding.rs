//! Percent-encoding for whole-URI and component contexts.
//!
//! Two policies are used:
//!
//! - [`encode_whole`] keeps every RFC 3986 reserved and unreserved character,
//!   plus `#`, `[` and `]`. It is applied to the username, password,
//!   hostname, resource path, extension, and selector string.
//! - [`encode_component`] keeps only `ALPHA / DIGIT / "-" / "_" / "." / "~"`.
//!   It is applied to query keys and values. The sub-delimiters
//!   `! ' ( ) *` are escaped as well.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left bare by [`encode_whole`].
const WHOLE: &AsciiSet = &NON_ALPHANUMERIC
    // reserved
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    // unreserved marks
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    // number sign and IP-literal brackets
    .remove(b'#')
    .remove(b'[')
    .remove(b']');

/// Characters left bare by [`encode_component`].
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a string for a whole-URI-safe position.
///
/// Well-formed escapes (`%` followed by two hex digits) are kept as they are,
/// so encoding an already encoded value is a no-op. A `%` that does not start
/// an escape is encoded as `%25`.
///
/// # Examples
///
/// ```
/// use composite_url::encoding::encode_whole;
///
/// assert_eq!(encode_whole("/us/en/my page"), "/us/en/my%20page");
/// assert_eq!(encode_whole("[::1]"), "[::1]");
/// assert_eq!(encode_whole("a%20b"), "a%20b");
/// assert_eq!(encode_whole("100%"), "100%25");
/// ```
#[must_use]
pub fn encode_whole(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(idx) = find_escape(rest) {
        encoded.extend(utf8_percent_encode(&rest[..idx], WHOLE));
        encoded.push_str(&rest[idx..idx + 3]);
        rest = &rest[idx + 3..];
    }

    encoded.extend(utf8_percent_encode(rest, WHOLE));
    encoded
}

/// Percent-encodes a string for use as a query key or value.
///
/// # Examples
///
/// ```
/// use composite_url::encoding::encode_component;
///
/// assert_eq!(encode_component("a b&c"), "a%20b%26c");
/// assert_eq!(encode_component("(x)*"), "%28x%29%2A");
/// ```
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Decodes percent escapes, leaving malformed ones in place.
///
/// Returns `None` if the decoded bytes are not UTF-8.
pub(crate) fn decode(input: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(input).decode_utf8().ok()
}

/// Byte offset of the first well-formed `%XX` escape.
fn find_escape(input: &str) -> Option<usize> {
    input.as_bytes().windows(3).position(|w| {
        w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit()
    })
}
