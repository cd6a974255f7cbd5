//! Render-time escaping of dynamic values.

use std::fmt::Display;

use tempera_carton::escape_html;

/// Escape any displayable value for HTML text or a quoted attribute.
///
/// Uses the same escaper the generator applies to constant attribute values.
#[inline]
pub fn escape_string(value: impl Display) -> String {
    escape_html(&value.to_string())
}
