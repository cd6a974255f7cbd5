//! Atelier - The Tempera template code generator.
//!
//! Takes a parsed template file and writes the Rust module that renders it,
//! together with a source map from every template expression to the place it
//! was copied to in the generated code.
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop or studio. Templates are
//! prepared here and carried out to the [canvas](https://docs.rs/tempera_canvas),
//! the runtime crate every generated module renders through.
//!
//! # Example
//!
//! ```
//! use tempera_atelier::{generate_to_string, GeneratorOptions};
//! use tempera_relief::{Declaration, Expression, HtmlTemplate, Node, Range, TemplateFile, Text};
//!
//! let mut file = TemplateFile::new(Expression::new("views", Range::default()));
//! file.declarations.push(Declaration::Html(HtmlTemplate {
//!     name: Expression::new("hello", Range::default()),
//!     parameters: Expression::new("", Range::default()),
//!     children: vec![Node::Text(Text { value: "Hello".into() })],
//! }));
//!
//! let result = generate_to_string(&file, &GeneratorOptions::default()).unwrap();
//! assert!(result.code.contains("pub fn hello() -> impl tempera::Component {"));
//! assert_eq!(result.source_map.len(), 3);
//! ```

pub mod codegen;
pub mod errors;
pub mod options;
pub mod writer;

pub use codegen::{string_literal, strip_parameter_types, CodegenContext, CodegenResult};
pub use errors::{ConfigError, GenerateError};
pub use options::{load_options, GeneratorOptions, CONFIG_FILE_NAME, DEFAULT_RUNTIME_PATH};
pub use tempera_relief::{SourceMap, SourceMapping, TemplateFile};

use std::io;

/// Version of this crate, for embedders that stamp it into the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate the module for `file` into `w`.
pub fn generate<W: io::Write + ?Sized>(
    file: &TemplateFile,
    w: &mut W,
    options: &GeneratorOptions,
) -> Result<SourceMap, GenerateError> {
    CodegenContext::new(w, options).generate(file)
}

/// Generate the module for `file` into a string.
pub fn generate_to_string(
    file: &TemplateFile,
    options: &GeneratorOptions,
) -> Result<CodegenResult, GenerateError> {
    let mut buf = Vec::with_capacity(4096);
    let source_map = generate(file, &mut buf, options)?;
    let code =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(CodegenResult { code, source_map })
}
