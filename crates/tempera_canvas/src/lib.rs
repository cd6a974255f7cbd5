//! Canvas - The surface Tempera templates are rendered onto.
//!
//! ## Name Origin
//!
//! A **canvas** is the ground a painting is finally laid down on. Templates
//! are prepared in the atelier; this crate is where they are actually painted
//! into bytes at request time.
//!
//! Generated code links against this crate and only this crate. It provides:
//!
//! - **component**: the [`Component`] trait every compiled template returns
//! - **scope**: [`RenderScope`], the per-render-tree dedup registries and children
//! - **writer**: [`StringWriter`], the buffering adapter generated code writes through
//! - **css**: CSS class values, the render-time CSS sanitizer and style dedup
//! - **script**: script values, argument encoding and script dedup
//! - **url**: the URL sanitizer
//! - **escape**: the generic HTML escaper
//! - **handler**: adapter exposing a component as an HTTP request handler
//! - **stylesheet**: endpoint and middleware serving component CSS as one sheet
//!
//! # Example
//!
//! ```
//! use std::io;
//! use tempera_canvas::{component, render_to_string, RenderScope, StringWriter};
//!
//! let hello = component(|_scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {
//!     w.write_str("<p>hello</p>")
//! });
//! assert_eq!(render_to_string(&hello).unwrap(), "<p>hello</p>");
//! ```

pub mod component;
pub mod css;
pub mod escape;
pub mod handler;
pub mod scope;
pub mod script;
pub mod stylesheet;
pub mod url;
pub mod writer;

pub use component::{component, render, render_to_string, Component, ComponentFn, NopComponent};
pub use css::{
    class, classes, render_css, safe_class, sanitize_css, ComponentCssClass, CssBuilder, CssClass,
    CssClasses, SafeCss,
};
pub use escape::escape_string;
pub use handler::{Body, ComponentHandler, Handler};
pub use scope::{Children, RenderScope, StringSet};
pub use script::{render_scripts, safe_script, script_arg, ComponentScript};
pub use stylesheet::{CssHandler, CssMiddleware};
pub use url::{url, SafeUrl};
pub use writer::StringWriter;
