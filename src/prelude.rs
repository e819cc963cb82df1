//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types, making it easy
//! to get started with the crate:
//!
//! ```rust
//! use composite_url::prelude::*;
//!
//! let url = CompositeUrl::parse("http://www.example.com/us/en/page.html").unwrap();
//! assert_eq!(url.extension(), "html");
//! ```
//!
//! The separator constants are left out; import them from the crate root.

pub use crate::{
    // Core types
    CompositeUrl, PathParts, PortInput, SearchParams, SelectorList, UrlLike, UrlParts, UrlSource,
    // Errors
    ParseError, ParseErrorKind,
};
