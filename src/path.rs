//! Decomposition of content pathnames.

use crate::constants::{PATH_SEPARATOR, ROOT_PATH, SELECTOR_SEPARATOR};

/// The pieces of a content pathname.
///
/// A pathname such as `/us/en/page.foo.bar.html/biz/baz` is split on `.` into
/// a resource path (`/us/en/page`), a selector string (`foo.bar`), an
/// extension (`html`) and a suffix (`/biz/baz`).
///
/// Values are returned raw, exactly as they appear in the input. Encoding is
/// the caller's concern.
///
/// # Examples
///
/// ```
/// use composite_url::PathParts;
///
/// let parts = PathParts::decompose("/us/en/page.foo.bar.html/biz/baz");
/// assert_eq!(parts.resource_path, "/us/en/page");
/// assert_eq!(parts.selector_string, "foo.bar");
/// assert_eq!(parts.extension, "html");
/// assert_eq!(parts.suffix, "/biz/baz");
/// assert_eq!(parts.pathname, "/us/en/page.foo.bar.html");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathParts {
    /// Resource path, selectors and extension joined back together
    pub pathname: String,
    /// Everything before the first `.`
    pub resource_path: String,
    /// Dot-joined tokens between the resource path and the extension
    pub selector_string: String,
    /// Last dot-token, up to its first `/`
    pub extension: String,
    /// Remainder after the extension, starting with `/`, or empty
    pub suffix: String,
}

impl Default for PathParts {
    fn default() -> Self {
        Self {
            pathname: ROOT_PATH.to_string(),
            resource_path: ROOT_PATH.to_string(),
            selector_string: String::new(),
            extension: String::new(),
            suffix: String::new(),
        }
    }
}

impl PathParts {
    /// Splits a raw pathname into its content parts.
    ///
    /// An empty input yields the root defaults. A missing leading `/` is
    /// added. When the path has no `.` at all, the whole path is the
    /// resource path and the other parts are empty.
    #[must_use]
    pub fn decompose(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }

        let path = if input.starts_with(PATH_SEPARATOR) {
            input.to_string()
        } else {
            format!("{PATH_SEPARATOR}{input}")
        };

        let parts: Vec<&str> = path.split(SELECTOR_SEPARATOR).collect();

        // Fewer than two dot-parts: nothing but a resource path.
        let [resource_path, selectors @ .., last] = parts.as_slice() else {
            return Self::resource_only(path);
        };

        let (extension, suffix) = match last.split_once(PATH_SEPARATOR) {
            Some((extension, rest)) if !rest.is_empty() => {
                (extension.to_string(), format!("{PATH_SEPARATOR}{rest}"))
            }
            Some((extension, _)) => (extension.to_string(), String::new()),
            None => ((*last).to_string(), String::new()),
        };

        let selector_string = selectors.join(".");

        let mut pathname = format!("{resource_path}{SELECTOR_SEPARATOR}");
        if !selector_string.is_empty() {
            pathname.push_str(&selector_string);
            pathname.push(SELECTOR_SEPARATOR);
        }
        pathname.push_str(&extension);

        Self {
            pathname,
            resource_path: (*resource_path).to_string(),
            selector_string,
            extension,
            suffix,
        }
    }

    fn resource_only(path: String) -> Self {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let pathname = if segments.len() > 2 {
            // more than one segment: only the first one survives
            segments[1].to_string()
        } else {
            path.clone()
        };

        Self {
            pathname,
            resource_path: path,
            selector_string: String::new(),
            extension: String::new(),
            suffix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yields_root_defaults() {
        let parts = PathParts::decompose("");
        assert_eq!(parts, PathParts::default());
        assert_eq!(parts.pathname, "/");
        assert_eq!(parts.resource_path, "/");
    }

    #[test]
    fn root_has_no_extension() {
        let parts = PathParts::decompose("/");
        assert_eq!(parts.pathname, "/");
        assert_eq!(parts.resource_path, "/");
        assert_eq!(parts.extension, "");
        assert!(parts.extension.is_empty());
    }

    #[test]
    fn full_content_path() {
        let parts = PathParts::decompose("/us/en/page.foo.bar.html/biz/baz");
        assert_eq!(parts.pathname, "/us/en/page.foo.bar.html");
        assert_eq!(parts.resource_path, "/us/en/page");
        assert_eq!(parts.selector_string, "foo.bar");
        assert_eq!(parts.extension, "html");
        assert_eq!(parts.suffix, "/biz/baz");
    }

    #[test]
    fn extension_only() {
        let parts = PathParts::decompose("/content/page.html");
        assert_eq!(parts.pathname, "/content/page.html");
        assert_eq!(parts.selector_string, "");
        assert_eq!(parts.extension, "html");
        assert_eq!(parts.suffix, "");
    }

    #[test]
    fn prepends_missing_slash() {
        let parts = PathParts::decompose("page.json");
        assert_eq!(parts.resource_path, "/page");
        assert_eq!(parts.pathname, "/page.json");
    }

    #[test]
    fn numeric_input() {
        let parts = PathParts::decompose("12345");
        assert_eq!(parts.resource_path, "/12345");
        assert_eq!(parts.pathname, "/12345");
    }

    #[test]
    fn trailing_slash_after_extension_drops_empty_suffix() {
        let parts = PathParts::decompose("/a/b.html/");
        assert_eq!(parts.extension, "html");
        assert_eq!(parts.suffix, "");
    }

    #[test]
    fn suffix_may_contain_dots_only_after_extension() {
        // the last dot-token holds the extension and the suffix
        let parts = PathParts::decompose("/a/page.sel.json/x/y");
        assert_eq!(parts.selector_string, "sel");
        assert_eq!(parts.extension, "json");
        assert_eq!(parts.suffix, "/x/y");
    }

    #[test]
    fn resource_only_single_segment() {
        let parts = PathParts::decompose("/content");
        assert_eq!(parts.pathname, "/content");
        assert_eq!(parts.resource_path, "/content");
        assert_eq!(parts.extension, "");
        assert_eq!(parts.suffix, "");
    }

    #[test]
    fn resource_only_many_segments_keeps_first() {
        let parts = PathParts::decompose("/us/en/page");
        assert_eq!(parts.pathname, "us");
        assert_eq!(parts.resource_path, "/us/en/page");
        assert_eq!(parts.selector_string, "");
    }

    #[test]
    fn redecomposing_pathname_is_stable() {
        let first = PathParts::decompose("/us/en/page.a.b.html/suffix");
        let second = PathParts::decompose(&first.pathname);
        assert_eq!(second.resource_path, first.resource_path);
        assert_eq!(second.selector_string, first.selector_string);
        assert_eq!(second.extension, first.extension);
        assert_eq!(second.pathname, first.pathname);
    }
}
