//! Query parameters for content URLs.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::constants::{KEY_VALUE_SEPARATOR, PARAM_SEPARATOR, SEARCH_PREFIX};
use crate::encoding::{decode, encode_component};

/// Query parameters from a URL.
///
/// Stores key/value pairs in insertion order. Keys may repeat: `get` returns
/// the first value, `get_all` every value, `set` collapses duplicates to one,
/// and `append` adds another pair unconditionally.
///
/// Keys and values are stored decoded and percent-encoded only when the
/// parameters are displayed. A parsed pair whose escapes do not decode to
/// UTF-8 is kept as written and displayed unchanged.
///
/// # Examples
///
/// ```
/// use composite_url::SearchParams;
///
/// let mut params = SearchParams::parse("?a=1&b=2&a=3");
/// assert_eq!(params.get("a"), Some("1"));
/// assert_eq!(params.get_all("a"), ["1", "3"]);
///
/// params.set("a", "9");
/// assert_eq!(params.get_all("a"), ["9"]);
/// assert_eq!(params.to_string(), "a=9&b=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchParams {
    pairs: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Param {
    key: String,
    value: String,
    /// Held as parsed, escapes included; never re-encoded
    verbatim: bool,
}

impl Param {
    fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            verbatim: false,
        }
    }

    fn parse(pair: &str) -> Self {
        let (key, value) = pair.split_once(KEY_VALUE_SEPARATOR).unwrap_or((pair, ""));

        match (decode(key), decode(value)) {
            (Some(key), Some(value)) => Self::new(key.into_owned(), value.into_owned()),
            _ => {
                trace!(pair, "keeping query pair that does not decode to UTF-8");
                Self {
                    key: key.to_string(),
                    value: value.to_string(),
                    verbatim: true,
                }
            }
        }
    }

    fn as_pair(&self) -> (&str, &str) {
        (&self.key, &self.value)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbatim {
            write!(f, "{}{KEY_VALUE_SEPARATOR}{}", self.key, self.value)
        } else {
            write!(
                f,
                "{}{KEY_VALUE_SEPARATOR}{}",
                encode_component(&self.key),
                encode_component(&self.value)
            )
        }
    }
}

impl SearchParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without the leading `?`.
    ///
    /// Pieces are split on the first `=`; a piece without `=` gets an empty
    /// value. Empty pieces are skipped.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix(SEARCH_PREFIX).unwrap_or(input);

        let pairs = input
            .split(PARAM_SEPARATOR)
            .filter(|pair| !pair.is_empty())
            .map(Param::parse)
            .collect();

        Self { pairs }
    }

    /// Returns true if any pair has the given key.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|p| p.key == key)
    }

    /// Returns the value of the first pair with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Returns the values of every pair with the given key, in order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|p| p.key == key)
            .map(|p| p.value.as_str())
            .collect()
    }

    /// Removes every pair with the given key.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|p| p.key != key);
    }

    /// Adds a pair to the end, even if the key already exists.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push(Param::new(key.into(), value.into()));
    }

    /// Sets the value for a key.
    ///
    /// The first pair with the key takes the new value and every later pair
    /// with the same key is removed. If the key is absent, behaves like
    /// [`append`](Self::append).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        let Some(first) = self.pairs.iter().position(|p| p.key == key) else {
            self.pairs.push(Param::new(key, value));
            return;
        };

        let mut idx = 0;
        self.pairs.retain(|p| {
            let keep = idx <= first || p.key != key;
            idx += 1;
            keep
        });

        self.pairs[first] = Param::new(key, value);
    }

    /// Returns every key in insertion order, including duplicates.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.key.as_str()).collect()
    }

    /// Returns every value in insertion order, including duplicates.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.value.as_str()).collect()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the pairs.
    pub fn iter(&self) -> Pairs<'_> {
        Pairs {
            inner: self.pairs.iter(),
        }
    }
}

/// Iterator over the `(key, value)` pairs of [`SearchParams`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    inner: std::slice::Iter<'a, Param>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Param::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.pairs.iter().map(Param::to_string).collect();
        write!(f, "{}", pairs.join("&"))
    }
}

impl FromStr for SearchParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a SearchParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Pairs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SearchParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SearchParams {
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
        let params = SearchParams::parse("");
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }

    #[test]
    fn parse_bare_question_mark() {
        let params = SearchParams::parse("?");
        assert!(params.is_empty());
    }

    #[test]
    fn parse_strips_leading_question_mark() {
        let params = SearchParams::parse("?alpha=bravo&charlie=delta");
        assert_eq!(params.get("alpha"), Some("bravo"));
        assert_eq!(params.get("charlie"), Some("delta"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_param_without_value() {
        let params = SearchParams::parse("echo");
        assert!(params.has("echo"));
        assert_eq!(params.get("echo"), Some(""));
        assert_eq!(params.to_string(), "echo=");
    }

    #[test]
    fn parse_splits_on_first_equals() {
        let params = SearchParams::parse("expr=a=b");
        assert_eq!(params.get("expr"), Some("a=b"));
    }

    #[test]
    fn parse_skips_empty_pieces() {
        let params = SearchParams::parse("a=1&&b=2&");
        assert_eq!(params.keys(), ["a", "b"]);
    }

    #[test]
    fn parse_decodes_keys_and_values() {
        let params = SearchParams::parse("na%20me=%41%42%43");
        assert_eq!(params.get("na me"), Some("ABC"));
    }

    #[test]
    fn undecodable_pair_is_kept_as_written() {
        let params = SearchParams::parse("a=%FF&b=%E9t%E9&c=1");
        assert_eq!(params.get("a"), Some("%FF"));
        assert_eq!(params.get("b"), Some("%E9t%E9"));
        assert_eq!(params.get("c"), Some("1"));
        assert_eq!(params.to_string(), "a=%FF&b=%E9t%E9&c=1");
    }

    #[test]
    fn set_replaces_undecodable_pair() {
        let mut params = SearchParams::parse("a=%FF");
        params.set("a", "x y");
        assert_eq!(params.to_string(), "a=x%20y");
    }

    #[test]
    fn get_missing_returns_none() {
        let params = SearchParams::parse("a=1");
        assert_eq!(params.get("b"), None);
        assert!(params.get_all("b").is_empty());
    }

    #[test]
    fn repeated_keys() {
        let params = SearchParams::parse("a=1&b=2&a=3");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get_all("a"), ["1", "3"]);
        assert_eq!(params.keys(), ["a", "b", "a"]);
        assert_eq!(params.values(), ["1", "2", "3"]);
    }

    #[test]
    fn append_adds_at_end() {
        let mut params = SearchParams::parse("a=1");
        params.append("a", "2");
        params.append("b", "3");
        assert_eq!(params.get_all("a"), ["1", "2"]);
        assert_eq!(params.to_string(), "a=1&a=2&b=3");
    }

    #[test]
    fn set_collapses_duplicates_in_place() {
        let mut params = SearchParams::parse("x=0&a=1&b=2&a=3&a=4");
        params.set("a", "9");
        assert_eq!(params.get_all("a"), ["9"]);
        assert_eq!(params.to_string(), "x=0&a=9&b=2");
    }

    #[test]
    fn set_absent_key_appends() {
        let mut params = SearchParams::parse("a=1");
        params.set("b", "2");
        assert_eq!(params.to_string(), "a=1&b=2");
    }

    #[test]
    fn delete_removes_all_matches() {
        let mut params = SearchParams::parse("a=1&a=2&b=3&a=4");
        params.delete("a");
        assert!(!params.has("a"));
        assert_eq!(params.to_string(), "b=3");
    }

    #[test]
    fn delete_absent_is_noop() {
        let mut params = SearchParams::parse("a=1");
        params.delete("z");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn display_encodes_components() {
        let mut params = SearchParams::new();
        params.append("q", "a b&c=d");
        params.append("(k)", "*");
        assert_eq!(params.to_string(), "q=a%20b%26c%3Dd&%28k%29=%2A");
    }

    #[test]
    fn display_keeps_insertion_order() {
        let params = SearchParams::parse("z=1&a=2");
        assert_eq!(params.to_string(), "z=1&a=2");
    }

    #[test]
    fn iter_returns_all_pairs() {
        let params = SearchParams::parse("a=1&b=2");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "1"), ("b", "2")]);

        let borrowed: Vec<_> = (&params).into_iter().collect();
        assert_eq!(borrowed, items);
    }
}
