//! Element and attribute emission.
//!
//! `class` and event handler attributes need statements before the opening
//! tag (style and script blocks). Their expressions are bound to variables
//! there, and the attribute itself is written from the variable, so each
//! expression appears in the output exactly once.
//!
//! The `class`, `href` and event handler conversions take ownership, so they
//! are handed a clone and the render closure stays callable.

use std::io;

use tempera_carton::escape_html;
use tempera_relief::{Attribute, Element};

use super::CodegenContext;
use crate::errors::GenerateError;

/// An attribute as it will be written after the prelude.
#[derive(Debug)]
enum EmitAttr<'n> {
    /// Written from the template attribute.
    Source(&'n Attribute),
    /// `class`, read from a bound `CssClasses`.
    ClassList { name: &'n str, var: String },
    /// Event handler, read from a bound `ComponentScript`.
    Script { name: &'n str, var: String },
}

impl<W: io::Write> CodegenContext<'_, W> {
    pub(super) fn generate_element(&mut self, el: &Element) -> Result<(), GenerateError> {
        if el.void && !el.children.is_empty() {
            return Err(GenerateError::VoidElementChildren {
                tag: el.name.to_string(),
            });
        }

        if el.attributes.is_empty() {
            self.push_write_literal(&format!("<{}>", el.name))?;
        } else {
            let attrs = self.generate_attribute_prelude(el)?;
            self.push_write_literal(&format!("<{}", el.name))?;
            for attr in &attrs {
                self.generate_attribute(el, attr)?;
            }
            self.push_write_literal(">")?;
        }

        if el.void {
            return Ok(());
        }
        self.generate_nodes(&el.children)?;
        self.push_write_literal(&format!("</{}>", el.name))?;
        Ok(())
    }

    /// Bind class lists and scripts, write their blocks, and return the
    /// attributes to emit.
    fn generate_attribute_prelude<'n>(
        &mut self,
        el: &'n Element,
    ) -> io::Result<Vec<EmitAttr<'n>>> {
        let mut attrs = Vec::with_capacity(el.attributes.len());
        let mut scripts = Vec::new();

        for attr in &el.attributes {
            match attr {
                Attribute::Expression(a) if a.name.as_str() == "class" => {
                    let var = self.next_variable();
                    self.push_indent()?;
                    self.push(&format!("let {} = tempera::CssClasses::from((", var))?;
                    self.push_expression(&a.expression)?;
                    self.push(").clone());\n")?;
                    self.push_line(&format!("tempera::render_css(scope, w, &{})?;", var))?;
                    attrs.push(EmitAttr::ClassList {
                        name: attr.name(),
                        var,
                    });
                }
                Attribute::Expression(a) if a.is_event_handler() => {
                    let var = self.next_variable();
                    self.push_indent()?;
                    self.push(&format!("let {}: tempera::ComponentScript = (", var))?;
                    self.push_expression(&a.expression)?;
                    self.push(").clone();\n")?;
                    scripts.push(format!("&{}", var));
                    attrs.push(EmitAttr::Script {
                        name: attr.name(),
                        var,
                    });
                }
                _ => attrs.push(EmitAttr::Source(attr)),
            }
        }

        if !scripts.is_empty() {
            self.push_line(&format!(
                "tempera::render_scripts(scope, w, &[{}])?;",
                scripts.join(", ")
            ))?;
        }
        Ok(attrs)
    }

    fn generate_attribute(&mut self, el: &Element, attr: &EmitAttr<'_>) -> io::Result<()> {
        match attr {
            EmitAttr::Source(Attribute::BoolConstant(a)) => {
                self.push_write_literal(&format!(" {}", a.name))?;
            }
            EmitAttr::Source(Attribute::Constant(a)) => {
                // Escaped now with the same escaper the runtime uses.
                self.push_write_literal(&format!(" {}=\"{}\"", a.name, escape_html(&a.value)))?;
            }
            EmitAttr::Source(Attribute::BoolExpression(a)) => {
                self.push_indent()?;
                self.push("if ")?;
                self.push_expression(&a.expression)?;
                self.push(" {\n")?;
                self.indent_level += 1;
                self.push_write_literal(&format!(" {}", a.name))?;
                self.indent_level -= 1;
                self.push_line("}")?;
            }
            EmitAttr::Source(Attribute::Expression(a)) => {
                self.push_write_literal(&format!(" {}=\"", a.name))?;
                if el.name.as_str() == "a" && a.name.as_str() == "href" {
                    let var = self.next_variable();
                    self.push_indent()?;
                    self.push(&format!("let {} = tempera::SafeUrl::from((", var))?;
                    self.push_expression(&a.expression)?;
                    self.push(").clone());\n")?;
                    self.push_line(&format!("w.write_str(&tempera::escape_string(&{}))?;", var))?;
                } else {
                    self.push_indent()?;
                    self.push("w.write_str(&tempera::escape_string(&(")?;
                    self.push_expression(&a.expression)?;
                    self.push(")))?;\n")?;
                }
                self.push_write_literal("\"")?;
            }
            EmitAttr::ClassList { name, var } => {
                self.push_write_literal(&format!(" {}=\"", name))?;
                self.push_line(&format!("w.write_str(&tempera::escape_string(&{}))?;", var))?;
                self.push_write_literal("\"")?;
            }
            EmitAttr::Script { name, var } => {
                self.push_write_literal(&format!(" {}=\"", name))?;
                self.push_line(&format!("w.write_str(&{}.call)?;", var))?;
                self.push_write_literal("\"")?;
            }
        }
        Ok(())
    }
}
