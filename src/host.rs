//! Hostname and port handling.

use std::net::Ipv4Addr;

/// A value offered to [`CompositeUrl::set_port`](crate::CompositeUrl::set_port).
///
/// Ports arrive as text (`"8080"`, `"12.5"`, `""`) or as numbers. Every
/// variant is normalized to a string of decimal digits, or rejected.
///
/// | Input | Result |
/// |-------|--------|
/// | `""` | port cleared |
/// | `"0080"`, `"12.5"` | `"80"`, `"12"` |
/// | `8080`, `12.5` | `"8080"`, `"12"` |
/// | `"abc"`, `-1`, `f64::NAN`, `None` | rejected, port unchanged |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortInput<'a> {
    /// A textual port; empty text clears the port
    Text(&'a str),
    /// An integer port
    Integer(i64),
    /// A numeric port with a possible fractional part
    Float(f64),
    /// No value at all; always rejected
    Unset,
}

impl PortInput<'_> {
    /// Normalizes the input to the stored port string.
    ///
    /// Returns `None` when the input must be ignored.
    #[must_use]
    pub fn normalize(self) -> Option<String> {
        match self {
            Self::Text("") => Some(String::new()),
            Self::Text(text) => normalize_port_text(text),
            Self::Integer(n) if n >= 0 => Some(n.to_string()),
            Self::Float(n) if n.is_finite() && n >= 0.0 => Some(format!("{:.0}", n.trunc().abs())),
            Self::Integer(_) | Self::Float(_) | Self::Unset => None,
        }
    }
}

impl<'a> From<&'a str> for PortInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for PortInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<u16> for PortInput<'_> {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for PortInput<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i32> for PortInput<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for PortInput<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PortInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a, T> From<Option<T>> for PortInput<'a>
where
    T: Into<PortInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

/// Accepts `digits` or `digits.digits` and keeps the integer part.
fn normalize_port_text(text: &str) -> Option<String> {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, "0"));

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let trimmed = integer.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

/// Returns true if a hostname should be read as a 32-bit integer address.
pub(crate) fn is_numeric_host(host: &str) -> bool {
    !host.is_empty() && host.bytes().all(|b| b.is_ascii_digit())
}

/// Converts a decimal integer to a dotted-quad IPv4 address.
///
/// Only the low 32 bits are kept, so `4294967296` becomes `0.0.0.0`.
pub(crate) fn integer_to_ipv4(digits: &str) -> String {
    let value = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
        });
    Ipv4Addr::from(value).to_string()
}

/// Splits `host[:port]`, keeping a bracketed IP literal intact.
///
/// The port is the text between the first `:` after the host and the next
/// `:`, or `None` when there is no `:` after the host.
pub(crate) fn split_host_port(input: &str) -> (&str, Option<&str>) {
    let (host, rest) = match bracketed_len(input) {
        Some(len) => {
            let (host, rest) = input.split_at(len);
            (host, rest.strip_prefix(':'))
        }
        None => match input.split_once(':') {
            Some((host, rest)) => (host, Some(rest)),
            None => (input, None),
        },
    };

    let port = rest.map(|rest| rest.split(':').next().unwrap_or_default());
    (host, port)
}

/// Byte length of a leading `[...]` literal, including both brackets.
fn bracketed_len(input: &str) -> Option<usize> {
    if !input.starts_with('[') {
        return None;
    }
    input.find(']').map(|idx| idx + 1)
}
