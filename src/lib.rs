//! Parser and editor for content-repository URLs.
//!
//! Content-serving platforms encode more than a file path in the pathname of
//! a URL. A request for
//!
//! ```text
//! http://www.example.com/us/en/page.foo.bar.html/biz/baz?a=1#frag
//! ```
//!
//! addresses the resource `/us/en/page`, asks for the `foo` and `bar`
//! selectors, renders it as `html`, and passes `/biz/baz` as a suffix. This
//! crate splits such URLs into those parts, lets each part be edited, and
//! rebuilds the URL on demand.
//!
//! # Quick Start
//!
//! ```rust
//! use composite_url::CompositeUrl;
//!
//! let mut url = CompositeUrl::parse(
//!     "http://www.example.com/us/en/page.foo.bar.html/biz/baz?a=1#frag"
//! ).unwrap();
//!
//! // Access components
//! assert_eq!(url.resource_path(), "/us/en/page");
//! assert_eq!(url.selector_string(), "foo.bar");
//! assert_eq!(url.extension(), "html");
//! assert_eq!(url.suffix(), "/biz/baz");
//! assert_eq!(url.search_params().get("a"), Some("1"));
//!
//! // Edit components
//! url.selectors_mut().delete("foo");
//! url.search_params_mut().append("a", "2");
//! url.set_hash("");
//! assert_eq!(url.href(), "http://www.example.com/us/en/page.bar.html/biz/baz?a=1&a=2");
//! ```
//!
//! # Relative Paths
//!
//! A path starting with `/` needs a base URL to take its origin from:
//!
//! ```rust
//! use composite_url::CompositeUrl;
//!
//! let url = CompositeUrl::parse_with_base("/us/en/page.html", "http://www.example.com").unwrap();
//! assert_eq!(url.href(), "http://www.example.com/us/en/page.html");
//! ```
//!
//! # Encoding
//!
//! | Component | Encoding |
//! |-----------|----------|
//! | username, password, hostname | [`encoding::encode_whole`] |
//! | resource path, extension, selectors | [`encoding::encode_whole`] |
//! | query keys and values | [`encoding::encode_component`] |
//! | suffix, hash | none |
//!
//! Selectors are stored as written, escapes included. Query parameters are
//! stored decoded and encoded when they are turned back into strings; a pair
//! that does not decode to UTF-8 is kept as written.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
pub mod encoding;
mod error;
mod host;
#[cfg(kani)]
mod kani_impls;
mod parts;
mod path;
pub mod prelude;
mod search_params;
mod selectors;
mod source;
mod url;

pub use constants::{
    HASH_PREFIX, KEY_VALUE_SEPARATOR, PARAM_SEPARATOR, PATH_SEPARATOR, ROOT_PATH,
    SCHEME_SEPARATOR, SEARCH_PREFIX, SELECTOR_SEPARATOR,
};
pub use error::{ParseError, ParseErrorKind};
pub use host::PortInput;
pub use parts::UrlParts;
pub use path::PathParts;
pub use search_params::{Pairs, SearchParams};
pub use selectors::SelectorList;
pub use source::{UrlLike, UrlSource};
pub use url::CompositeUrl;
