//! Request path resolution
//!
//! Collapses a request URL to its final segment and joins it onto the
//! public directory root.

use std::path::{Path, PathBuf};

/// Extract the file name from a request URL.
///
/// Takes the last `/`-delimited segment, discarding any directory
/// structure in the URL: `/public/sub/x.css` and `/public/x.css` both
/// yield `x.css`. No percent-decoding is applied.
pub fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Resolve a request URL to a filesystem path under the public root.
///
/// This is an unguarded join: the only collapsing comes from taking the
/// last segment of the URL.
pub fn resolve(public_dir: &str, url: &str) -> PathBuf {
    Path::new(public_dir).join(file_name(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_takes_last_segment() {
        assert_eq!(file_name("/public/style.css"), "style.css");
        assert_eq!(file_name("/public/sub/style.css"), "style.css");
        assert_eq!(file_name("style.css"), "style.css");
    }

    #[test]
    fn test_file_name_empty_for_trailing_slash() {
        assert_eq!(file_name("/public/"), "");
        assert_eq!(file_name("/"), "");
    }

    #[test]
    fn test_query_string_stays_in_the_name() {
        // No decoding or query stripping anywhere in the pipeline
        assert_eq!(file_name("/public/style.css?v=1"), "style.css?v=1");
    }

    #[test]
    fn test_resolve_collapses_directories() {
        assert_eq!(
            resolve("public", "/public/sub/x.css"),
            resolve("public", "/public/x.css")
        );
        assert_eq!(resolve("public", "/public/x.css"), PathBuf::from("public/x.css"));
    }
}
