//! Inputs accepted when constructing a URL.

use std::borrow::Cow;

use crate::parts::UrlParts;

/// Anything that can report an absolute URL.
///
/// Implement this for a URL type from another library, a request object, or
/// any value that knows its location, to use it as the source or base of a
/// [`CompositeUrl`](crate::CompositeUrl).
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use composite_url::{CompositeUrl, UrlLike};
///
/// struct Location(&'static str);
///
/// impl UrlLike for Location {
///     fn href(&self) -> Cow<'_, str> {
///         Cow::Borrowed(self.0)
///     }
/// }
///
/// let here = Location("http://localhost:4502/content/site.html");
/// assert_eq!(here.origin().as_deref(), Some("http://localhost:4502"));
///
/// let url = CompositeUrl::parse_with_base("/content/other.html", &here).unwrap();
/// assert_eq!(url.href(), "http://localhost:4502/content/other.html");
/// ```
pub trait UrlLike {
    /// Returns the absolute URL string.
    fn href(&self) -> Cow<'_, str>;

    /// Returns `protocol//host`, or `None` if there is no host.
    ///
    /// The default implementation decomposes [`href`](Self::href).
    fn origin(&self) -> Option<Cow<'_, str>> {
        UrlParts::decompose(&self.href())
            .ok()?
            .usable_origin()
            .map(Cow::Owned)
    }
}

/// A URL source or base: a string, or a URL-like object.
#[derive(Clone, Copy)]
pub enum UrlSource<'a> {
    /// An absolute URL, or a path starting with `/`
    Str(&'a str),
    /// An object exposing an absolute URL
    Url(&'a dyn UrlLike),
}

impl<'a> UrlSource<'a> {
    /// Wraps a URL-like object.
    #[must_use]
    pub fn url(url: &'a dyn UrlLike) -> Self {
        Self::Url(url)
    }

    /// Returns the href this source stands for.
    #[must_use]
    pub fn href(&self) -> Cow<'a, str> {
        match *self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Url(url) => url.href(),
        }
    }

    /// Returns an origin that a relative path can be appended to.
    ///
    /// A string must decompose to a URL with a host. A URL-like object
    /// reports its own origin, which must be non-empty.
    #[must_use]
    pub fn usable_origin(&self) -> Option<String> {
        match *self {
            Self::Str(s) => UrlParts::decompose(s).ok()?.usable_origin(),
            Self::Url(url) => url
                .origin()
                .filter(|origin| !origin.is_empty())
                .map(Cow::into_owned),
        }
    }
}

impl std::fmt::Debug for UrlSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Url(url) => f.debug_tuple("Url").field(&url.href()).finish(),
        }
    }
}

impl<'a> From<&'a str> for UrlSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for UrlSource<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a dyn UrlLike> for UrlSource<'a> {
    fn from(value: &'a dyn UrlLike) -> Self {
        Self::Url(value)
    }
}

impl<'a, T: UrlLike> From<&'a T> for UrlSource<'a> {
    fn from(value: &'a T) -> Self {
        Self::Url(value)
    }
}
