//! HTML tag tables.

use phf::phf_set;

/// Elements that never have content or a closing tag.
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
};

/// Check whether `tag` is an HTML void element.
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("input"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("BR"));
    }
}
