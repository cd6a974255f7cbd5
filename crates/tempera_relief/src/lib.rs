//! Relief - The sculptured AST surface for Tempera templates.
//!
//! This crate defines the data a template parser hands to the generator, and
//! the source map the generator hands back to editor tooling.
//!
//! ## Name Origin
//!
//! **Relief** is a sculptural technique where shapes stand out from a flat
//! background. The AST is the relief of a template: its structure raised out
//! of the flat source text.

pub mod ast;
pub mod source_map;

pub use ast::*;
pub use source_map::{SourceMap, SourceMapping};
