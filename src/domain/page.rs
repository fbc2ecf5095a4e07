/// Derive the page identifier from a location path.
///
/// Takes the last non-empty `/`-separated segment; falls back to `default`
/// when the path has none (site root, empty path).
/// Example: "/docs/about.html" -> "about.html", "/" -> default
pub fn page_identifier(path: &str, default: &str) -> String {
    path.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Literal comparison between a link target and the page identifier.
///
/// No normalization: `./index.html` does not match `index.html`.
pub fn is_current_target(target: &str, page: &str) -> bool {
    target == page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::DEFAULT_PAGE;

    fn current_page(path: &str) -> String {
        page_identifier(path, DEFAULT_PAGE)
    }

    #[test]
    fn test_root_defaults_to_index() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("///"), "index.html");
    }

    #[test]
    fn test_last_segment_taken() {
        assert_eq!(current_page("/about.html"), "about.html");
        assert_eq!(current_page("/docs/guide/install.html"), "install.html");
    }

    #[test]
    fn test_trailing_slash_uses_last_non_empty_segment() {
        assert_eq!(current_page("/docs/"), "docs");
    }

    #[test]
    fn test_custom_default() {
        assert_eq!(page_identifier("/", "home.html"), "home.html");
        assert_eq!(page_identifier("/x.html", "home.html"), "x.html");
    }

    #[test]
    fn test_matching_is_literal() {
        assert!(is_current_target("index.html", "index.html"));
        assert!(!is_current_target("./index.html", "index.html"));
        assert!(!is_current_target("Index.html", "index.html"));
        assert!(!is_current_target("index.html#top", "index.html"));
        assert!(!is_current_target("/index.html", "index.html"));
    }
}
