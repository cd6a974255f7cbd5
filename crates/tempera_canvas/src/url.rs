//! URL sanitizer.

use std::fmt;

/// Replacement for a URL whose scheme is not allowed.
pub const FAILED_SANITIZATION_URL: &str = "about:invalid#TemplFailedSanitizationURL";

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// URL that is safe to place in an `href`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeUrl(String);

impl SafeUrl {
    /// Wrap a URL without checking its scheme.
    pub fn trusted(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Sanitize `s`.
///
/// The scheme is the text before the first `:` when no `/` precedes it.
/// URLs without a scheme pass through; a scheme other than `http`, `https` or
/// `mailto` (case-insensitive) yields [`FAILED_SANITIZATION_URL`].
pub fn url(s: &str) -> SafeUrl {
    if let Some(colon) = s.find(':') {
        let scheme = &s[..colon];
        if !scheme.contains('/')
            && !ALLOWED_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        {
            tracing::debug!(scheme, "replacing URL with disallowed scheme");
            return SafeUrl(FAILED_SANITIZATION_URL.to_string());
        }
    }
    SafeUrl(s.to_string())
}

impl From<&str> for SafeUrl {
    fn from(s: &str) -> Self {
        url(s)
    }
}

impl From<String> for SafeUrl {
    fn from(s: String) -> Self {
        url(&s)
    }
}

impl From<&String> for SafeUrl {
    fn from(s: &String) -> Self {
        url(s)
    }
}

impl From<&SafeUrl> for SafeUrl {
    fn from(u: &SafeUrl) -> Self {
        u.clone()
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed() {
        for ok in [
            "https://x/y",
            "http://example.com",
            "/relative/path",
            "mailto:a@b.com",
            "HTTPS://EXAMPLE.COM",
            "relative",
            "/path/with:colon",
            "",
        ] {
            assert_eq!(url(ok).as_str(), ok, "{:?} should pass through", ok);
        }
    }

    #[test]
    fn test_rejected() {
        for bad in [
            "javascript:alert(1)",
            "JavaScript:alert(1)",
            "data:text/html,x",
            "vbscript:x",
        ] {
            assert_eq!(url(bad).as_str(), FAILED_SANITIZATION_URL, "{:?}", bad);
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(SafeUrl::from("javascript:x").as_str(), FAILED_SANITIZATION_URL);
        assert_eq!(SafeUrl::from(String::from("/a")).to_string(), "/a");
        assert_eq!(SafeUrl::trusted("javascript:x").as_str(), "javascript:x");
        let trusted = SafeUrl::trusted("javascript:x");
        assert_eq!(SafeUrl::from(&trusted), trusted);
    }
}
