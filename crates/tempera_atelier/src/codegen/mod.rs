//! Code generation.
//!
//! A single forward pass over the template file. Every node writes its
//! statements straight into the output through a [`RangeWriter`], and every
//! template expression is copied verbatim and recorded in the source map with
//! the range it landed on.
//!
//! The output is one Rust module:
//!
//! ```text
//! // Code generated by tempera@<version> DO NOT EDIT.
//!
//! pub mod <package> {
//!     #![allow(...)]
//!
//!     use <runtime> as tempera;
//!     ...
//!
//!     pub fn <template>(<params>) -> impl tempera::Component {
//!         ...
//!     }
//! }
//! ```

mod css;
mod element;
mod html;
pub mod literal;
mod script;

pub use literal::string_literal;
pub use script::strip_parameter_types;

use std::io;

use tempera_relief::{Declaration, Expression, Range, SourceMap, TemplateFile};

use crate::errors::GenerateError;
use crate::options::GeneratorOptions;
use crate::writer::RangeWriter;

/// Lints the generated module opts out of.
pub const LINT_DIRECTIVE: &str =
    "#![allow(non_snake_case, unused_imports, unused_mut, unused_variables, clippy::all)]";

/// Generated code with its source map.
#[derive(Debug, Clone, Default)]
pub struct CodegenResult {
    pub code: String,
    pub source_map: SourceMap,
}

/// Codegen context for one template file.
pub struct CodegenContext<'a, W: io::Write> {
    options: &'a GeneratorOptions,
    writer: RangeWriter<W>,
    source_map: SourceMap,
    /// Indent level
    indent_level: usize,
    /// Last synthesized variable id, shared by every declaration in the file
    variable_id: usize,
}

impl<'a, W: io::Write> CodegenContext<'a, W> {
    pub fn new(writer: W, options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            writer: RangeWriter::new(writer),
            source_map: SourceMap::new(),
            indent_level: 0,
            variable_id: 0,
        }
    }

    /// Generate the module for `file`.
    pub fn generate(mut self, file: &TemplateFile) -> Result<SourceMap, GenerateError> {
        let _span = tracing::debug_span!(
            "generate",
            package = file.package.as_str(),
            declarations = file.declarations.len()
        )
        .entered();

        self.generate_header(file)?;

        for declaration in &file.declarations {
            tracing::trace!("declaration {}", declaration.name().as_str());
            self.push("\n")?;
            match declaration {
                Declaration::Html(template) => self.generate_html_template(template)?,
                Declaration::Css(template) => self.generate_css_template(template)?,
                Declaration::Script(template) => self.generate_script_template(template)?,
            }
        }

        self.indent_level -= 1;
        self.push_line("}")?;

        tracing::debug!("generated {} source mappings", self.source_map.len());
        Ok(self.source_map)
    }

    /// Banner, module opening and imports.
    fn generate_header(&mut self, file: &TemplateFile) -> io::Result<()> {
        let options = self.options;

        self.push("// Code generated by tempera@")?;
        self.push(options.version_or_unknown())?;
        self.push(" DO NOT EDIT.\n\n")?;

        self.push("pub mod ")?;
        self.push_expression(&file.package)?;
        self.push(" {\n")?;
        self.indent_level += 1;

        self.push_line(LINT_DIRECTIVE)?;
        self.push("\n")?;

        let runtime = options.runtime_path.as_str();
        self.push_line(&format!("use {} as tempera;", runtime))?;
        if file.has_html_templates() {
            self.push_line(&format!("use {}::RenderScope;", runtime))?;
            self.push_line("use ::std::io;")?;
            self.push_line(&format!("use {}::StringWriter;", runtime))?;
        }
        if file.has_css_templates() {
            self.push_line(&format!("use {}::CssBuilder;", runtime))?;
        }
        for import in &file.imports {
            self.push_indent()?;
            self.push("use ")?;
            self.push_expression(import)?;
            self.push(";\n")?;
        }
        Ok(())
    }

    /// `pub fn <name>(<params>) -> <ret> {` at the current indent.
    fn push_fn_signature(
        &mut self,
        name: &Expression,
        parameters: &Expression,
        return_type: &str,
    ) -> io::Result<()> {
        self.push_indent()?;
        self.push("pub fn ")?;
        self.push_expression(name)?;
        self.push("(")?;
        self.push_expression(parameters)?;
        self.push(") -> ")?;
        self.push(return_type)?;
        self.push(" {\n")?;
        Ok(())
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    #[inline]
    fn push(&mut self, text: &str) -> io::Result<Range> {
        self.writer.write(text)
    }

    fn push_indent(&mut self) -> io::Result<()> {
        self.writer.write_indent(self.indent_level, "")?;
        Ok(())
    }

    /// One full line at the current indent.
    fn push_line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_indent(self.indent_level, text)?;
        self.push("\n")?;
        Ok(())
    }

    /// Copy an expression verbatim and map it.
    fn push_expression(&mut self, expression: &Expression) -> io::Result<()> {
        let range = self.writer.write(expression.as_str())?;
        self.source_map.add(expression, range);
        Ok(())
    }

    /// `w.write_str(<literal>)?;`
    fn push_write_literal(&mut self, text: &str) -> io::Result<()> {
        self.push_line(&format!("w.write_str({})?;", string_literal(text)))
    }

    /// Name of a fresh local variable.
    fn next_variable(&mut self) -> String {
        self.variable_id += 1;
        format!("var_{}", self.variable_id)
    }
}
