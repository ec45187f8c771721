//! Percent-encoding for `data:` URIs.

/// Media type prefix of every download link.
pub const DATA_URI_PREFIX: &str = "data:text/plain;charset=utf-8,";

/// Percent-encode text for use inside a URI.
pub fn percent_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// A `data:` URI carrying `text`.
pub fn data_uri(text: &str) -> String {
    format!("{DATA_URI_PREFIX}{}", percent_encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_css() {
        assert_eq!(
            percent_encode(".m-sm {\n  margin: var(--space-sm);\n}"),
            ".m-sm%20%7B%0A%20%20margin%3A%20var%28--space-sm%29%3B%0A%7D"
        );
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(percent_encode("→"), "%E2%86%92");
    }

    #[test]
    fn test_round_trip() {
        let css = "@import 'config.css';\n@import 'main.css';";
        let encoded = percent_encode(css);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert_eq!(urlencoding::decode(&encoded).unwrap(), css);
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri("a b"), "data:text/plain;charset=utf-8,a%20b");
    }
}
