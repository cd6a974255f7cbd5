//! CSS property sanitizer.
//!
//! Validates a single `name: value` declaration against a conservative
//! allow-list. A disallowed name or value is never reported as an error: it is
//! replaced by an innocuous placeholder so the declaration stays inert.

use once_cell::sync::Lazy;
use regex::Regex;

/// Replacement for a property name that fails validation.
pub const INNOCUOUS_PROPERTY_NAME: &str = "zTemperaUnsafeCssPropertyName";

/// Replacement for a property value that fails validation.
pub const INNOCUOUS_PROPERTY_VALUE: &str = "zTemperaUnsafeCssPropertyValue";

static PROPERTY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[a-zA-Z][a-zA-Z0-9-]*$").expect("property name pattern"));

static PROPERTY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9\s#%,.()'+\-_!/*]*$").expect("property value pattern")
});

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[_a-zA-Z]+[_\-a-zA-Z0-9]*$").expect("class name pattern"));

/// Check a class name against the allow-list.
pub fn is_safe_class_name(name: &str) -> bool {
    CLASS_NAME.is_match(name)
}

/// Substrings that are rejected even when every character is allowed.
const DENIED_VALUE_FRAGMENTS: &[&str] = &["expression(", "url(", "/*", "*/", "-moz-binding"];

/// Check a property name against the allow-list.
pub fn is_safe_property_name(name: &str) -> bool {
    PROPERTY_NAME.is_match(name)
}

/// Check a property value against the allow-list.
pub fn is_safe_property_value(value: &str) -> bool {
    if !PROPERTY_VALUE.is_match(value) {
        return false;
    }
    let lower = value.to_ascii_lowercase();
    !DENIED_VALUE_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

/// Sanitize one declaration, returning `name:value;`.
pub fn sanitize_css_property(name: &str, value: &str) -> String {
    let name = name.trim();
    let value = value.trim();
    let name = if is_safe_property_name(name) {
        name
    } else {
        tracing::debug!(property = name, "replacing unsafe CSS property name");
        INNOCUOUS_PROPERTY_NAME
    };
    let value = if is_safe_property_value(value) {
        value
    } else {
        tracing::debug!(property = name, "replacing unsafe CSS property value");
        INNOCUOUS_PROPERTY_VALUE
    };
    format!("{}:{};", name, value)
}
