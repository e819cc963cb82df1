//! Separators and defaults shared by the URL components.

/// Pathname used when a URL has no resource path.
pub const ROOT_PATH: &str = "/";

/// Separates the resource path, each selector, and the extension.
pub const SELECTOR_SEPARATOR: char = '.';

/// Separates path segments; also introduces the suffix.
pub const PATH_SEPARATOR: char = '/';

/// Separates key/value pairs in a query string.
pub const PARAM_SEPARATOR: char = '&';

/// Separates a query key from its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Prefix of a non-empty search string.
pub const SEARCH_PREFIX: char = '?';

/// Prefix of a non-empty hash.
pub const HASH_PREFIX: char = '#';

/// Separates the protocol from the authority.
pub const SCHEME_SEPARATOR: &str = "//";
