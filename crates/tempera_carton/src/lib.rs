//! Carton - The artist's toolbox for Tempera.
//!
//! This crate provides the small set of utilities that both halves of Tempera
//! depend on, much like a carton (artist's portfolio case) holds the tools an
//! artist carries from the studio to the wall.
//!
//! The generator (`tempera_atelier`) sanitizes and escapes constant values at
//! generation time, and the runtime (`tempera_canvas`) sanitizes and escapes
//! dynamic values at render time. Both go through this crate, so a constant
//! that is escaped while compiling renders exactly like the same value
//! escaped while serving a request.
//!
//! # Modules
//!
//! - **css**: CSS property sanitizer
//! - **dom**: HTML tag tables
//! - **escape**: HTML escaping
//! - **hash**: Content digests used to derive stable identifiers
//!
//! # Example
//!
//! ```
//! use tempera_carton::{escape_html, sanitize_css_property};
//!
//! assert_eq!(escape_html("<b>"), "&lt;b&gt;");
//! assert_eq!(sanitize_css_property("color", "red"), "color:red;");
//! ```

pub mod css;
pub mod dom;
pub mod escape;
pub mod hash;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export shared utilities
pub use css::{
    is_safe_class_name, sanitize_css_property, INNOCUOUS_PROPERTY_NAME, INNOCUOUS_PROPERTY_VALUE,
};
pub use dom::is_void_tag;
pub use escape::escape_html;
pub use hash::{css_id, digest_prefix, script_function_name};
