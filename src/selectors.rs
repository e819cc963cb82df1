//! Selector list for content URLs.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::constants::SELECTOR_SEPARATOR;
use crate::encoding::encode_whole;

/// The ordered selectors between the resource path and the extension.
///
/// In `/us/en/page.foo.bar.html` the selectors are `foo` and `bar`. Tokens are
/// stored exactly as they appear in the URL, escapes included;
/// [`Display`](fmt::Display) joins them with `.` and percent-encodes whatever
/// is still unsafe. An appended token containing `.` is therefore split into
/// two selectors when the URL is parsed again.
///
/// # Examples
///
/// ```
/// use composite_url::SelectorList;
///
/// let mut selectors = SelectorList::parse("foo.bar");
/// assert!(selectors.has("foo"));
///
/// selectors.append("qux");
/// selectors.delete("foo");
/// assert_eq!(selectors.values(), ["bar", "qux"]);
/// assert_eq!(selectors.to_string(), "bar.qux");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorList {
    values: Vec<String>,
}

impl SelectorList {
    /// Creates an empty selector list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dot-joined selector string.
    ///
    /// An empty string yields an empty list. Tokens are kept as written, so
    /// an escaped `%2E` or `%23` stays part of its selector.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::new();
        }

        let values = input
            .split(SELECTOR_SEPARATOR)
            .map(str::to_string)
            .collect();

        Self { values }
    }

    /// Returns true if `selector` is one of the selectors.
    #[must_use]
    pub fn has(&self, selector: &str) -> bool {
        self.values.iter().any(|v| v == selector)
    }

    /// Adds a selector to the end. Duplicates are allowed.
    pub fn append(&mut self, selector: impl Into<String>) {
        self.values.push(selector.into());
    }

    /// Removes the first occurrence of `selector`, if any.
    pub fn delete(&mut self, selector: &str) {
        if let Some(idx) = self.values.iter().position(|v| v == selector) {
            self.values.remove(idx);
        }
    }

    /// Returns the selectors in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the number of selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no selectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the selectors.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode_whole(&self.values.join(".")))
    }
}

impl FromStr for SelectorList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a SelectorList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SelectorList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SelectorList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty() {
        let selectors = SelectorList::parse("");
        assert!(selectors.is_empty());
        assert_eq!(selectors.to_string(), "");
    }

    #[test]
    fn parse_keeps_order() {
        let selectors = SelectorList::parse("foo.bar.baz");
        assert_eq!(selectors.values(), ["foo", "bar", "baz"]);
        assert_eq!(selectors.len(), 3);
    }

    #[test]
    fn parse_keeps_escapes() {
        let selectors = SelectorList::parse("a%20b.c");
        assert!(selectors.has("a%20b"));
        assert!(!selectors.has("a b"));
        assert_eq!(selectors.to_string(), "a%20b.c");
    }

    #[test]
    fn escaped_reserved_characters_stay_escaped() {
        let selectors = SelectorList::parse("a%23b.c%3Fd.e%2Ef");
        assert_eq!(selectors.values(), ["a%23b", "c%3Fd", "e%2Ef"]);
        assert_eq!(selectors.to_string(), "a%23b.c%3Fd.e%2Ef");
        assert_eq!(SelectorList::parse(&selectors.to_string()), selectors);
    }

    #[test]
    fn has_is_exact() {
        let selectors = SelectorList::parse("foo.bar");
        assert!(selectors.has("foo"));
        assert!(!selectors.has("fo"));
        assert!(!selectors.has("alpha"));
    }

    #[test]
    fn append_allows_duplicates() {
        let mut selectors = SelectorList::parse("foo");
        selectors.append("foo");
        assert_eq!(selectors.values(), ["foo", "foo"]);
        assert_eq!(selectors.to_string(), "foo.foo");
    }

    #[test]
    fn delete_removes_first_match_only() {
        let mut selectors = SelectorList::parse("foo.bar.foo");
        selectors.delete("foo");
        assert_eq!(selectors.values(), ["bar", "foo"]);
    }

    #[test]
    fn delete_absent_is_noop() {
        let mut selectors = SelectorList::parse("foo.bar");
        selectors.delete("biz");
        assert_eq!(selectors.values(), ["foo", "bar"]);
    }

    #[test]
    fn display_encodes_joined_string() {
        let mut selectors = SelectorList::new();
        selectors.append("foo");
        selectors.append(" %^{}");
        assert!(selectors.has(" %^{}"));
        assert_eq!(selectors.to_string(), "foo.%20%25%5E%7B%7D");
    }

    #[test]
    fn iter_matches_values() {
        let selectors = SelectorList::parse("a.b");
        let items: Vec<_> = selectors.iter().collect();
        assert_eq!(items, vec!["a", "b"]);

        let borrowed: Vec<&String> = (&selectors).into_iter().collect();
        assert_eq!(borrowed.len(), 2);
    }

    #[test]
    fn from_str_never_fails() {
        let selectors: SelectorList = "x.y".parse().unwrap();
        assert_eq!(selectors.values(), ["x", "y"]);
    }
}
