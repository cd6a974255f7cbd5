//! Content digests for stable identifiers.
//!
//! CSS class ids and script function names are derived from a SHA-256 digest
//! of the content they name, so the same template always produces the same
//! identifier and distinct content is unlikely to collide.

use sha2::{Digest, Sha256};

/// Number of hex digits kept from the digest.
pub const DIGEST_PREFIX_LEN: usize = 4;

/// Compute the lowercase hex SHA-256 digest of `data`.
#[inline]
pub fn digest_hex(data: &str) -> String {
    format!("{:x}", Sha256::digest(data.as_bytes()))
}

/// Leading `len` hex digits of the SHA-256 digest of `data`.
#[inline]
pub fn digest_prefix(data: &str, len: usize) -> String {
    let mut hex = digest_hex(data);
    hex.truncate(len);
    hex
}

/// Identifier of a component CSS class: `<name>_<digest prefix of css>`.
pub fn css_id(name: &str, css: &str) -> String {
    format!("{}_{}", name, digest_prefix(css, DIGEST_PREFIX_LEN))
}

/// Name of the JavaScript function emitted for a script template.
pub fn script_function_name(name: &str, body: &str) -> String {
    format!("__templ_{}_{}", name, digest_prefix(body, DIGEST_PREFIX_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            digest_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_prefix() {
        assert_eq!(digest_prefix("abc", 4), "ba78");
        assert_eq!(digest_prefix("abc", 0), "");
    }

    #[test]
    fn test_css_id() {
        assert_eq!(css_id("red", "abc"), "red_ba78");
        assert_eq!(css_id("red", "abc"), css_id("red", "abc"));
        assert_ne!(css_id("red", "abc"), css_id("red", "abd"));
    }

    #[test]
    fn test_script_function_name() {
        assert_eq!(script_function_name("alert", "abc"), "__templ_alert_ba78");
    }
}
