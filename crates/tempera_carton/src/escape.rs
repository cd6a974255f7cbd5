//! HTML escaping.

/// Escape HTML-significant characters (`&`, `<`, `>`, `"`, `'`) so the result
/// is safe inside both text content and quoted attribute values.
#[inline]
pub fn escape_html(s: &str) -> String {
    htmlize::escape_all_quotes(s).to_string()
}
