//! HTML template and node emission.

use std::io;

use tempera_relief::{HtmlTemplate, Node, SwitchExpression};

use super::{string_literal, CodegenContext};
use crate::errors::GenerateError;

impl<W: io::Write> CodegenContext<'_, W> {
    /// Emit a function returning the renderable unit for `template`.
    pub(super) fn generate_html_template(
        &mut self,
        template: &HtmlTemplate,
    ) -> Result<(), GenerateError> {
        self.push_fn_signature(
            &template.name,
            &template.parameters,
            "impl tempera::Component",
        )?;
        self.indent_level += 1;
        self.push_line(
            "tempera::component(move |scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {",
        )?;
        self.indent_level += 1;

        self.push_line("scope.rendered_css_classes();")?;
        self.push_line("scope.rendered_scripts();")?;
        self.generate_nodes(&template.children)?;
        self.push_line("Ok(())")?;

        self.indent_level -= 1;
        self.push_line("})")?;
        self.indent_level -= 1;
        self.push_line("}")?;
        Ok(())
    }

    pub(super) fn generate_nodes(&mut self, nodes: &[Node]) -> Result<(), GenerateError> {
        for node in nodes {
            self.generate_node(node)?;
        }
        Ok(())
    }

    /// Children one level deeper.
    fn generate_block(&mut self, nodes: &[Node]) -> Result<(), GenerateError> {
        self.indent_level += 1;
        self.generate_nodes(nodes)?;
        self.indent_level -= 1;
        Ok(())
    }

    fn generate_node(&mut self, node: &Node) -> Result<(), GenerateError> {
        match node {
            Node::DocType(doctype) => {
                self.push_write_literal(&format!("<!doctype {}>", doctype.value))?;
            }
            Node::Element(el) => self.generate_element(el)?,
            Node::Text(text) => {
                let var = self.next_variable();
                self.push_line(&format!("let {} = {};", var, string_literal(&text.value)))?;
                self.push_line(&format!("w.write_str({})?;", var))?;
            }
            Node::Whitespace(_) => {}
            Node::StringExpression(node) => {
                self.push_indent()?;
                self.push("w.write_str(&tempera::escape_string(&(")?;
                self.push_expression(&node.expression)?;
                self.push(")))?;\n")?;
            }
            Node::For(node) => {
                self.push_indent()?;
                self.push("for ")?;
                self.push_expression(&node.expression)?;
                self.push(" {\n")?;
                self.generate_block(&node.children)?;
                self.push_line("}")?;
            }
            Node::If(node) => {
                self.push_indent()?;
                self.push("if ")?;
                self.push_expression(&node.expression)?;
                self.push(" {\n")?;
                self.generate_block(&node.then)?;
                if let Some(else_branch) = &node.else_branch {
                    self.push_line("} else {")?;
                    self.generate_block(else_branch)?;
                }
                self.push_line("}")?;
            }
            Node::Switch(node) => self.generate_switch(node)?,
            Node::CallTemplate(node) => {
                self.push_indent()?;
                self.push("tempera::Component::render_buffered(&(")?;
                self.push_expression(&node.expression)?;
                self.push("), scope, w)?;\n")?;
            }
        }
        Ok(())
    }

    /// `match` with one arm per case and a catch-all arm, so exactly one
    /// branch runs and no case falls through into the next.
    fn generate_switch(&mut self, node: &SwitchExpression) -> Result<(), GenerateError> {
        self.push_indent()?;
        self.push("match ")?;
        self.push_expression(&node.expression)?;
        self.push(" {\n")?;
        self.indent_level += 1;

        for case in &node.cases {
            self.push_indent()?;
            self.push_expression(&case.expression)?;
            self.push(" => {\n")?;
            self.generate_block(&case.children)?;
            self.push_line("}")?;
        }
        match &node.default {
            Some(children) => {
                self.push_line("_ => {")?;
                self.generate_block(children)?;
                self.push_line("}")?;
            }
            None => self.push_line("_ => {}")?,
        }

        self.indent_level -= 1;
        self.push_line("}")?;
        Ok(())
    }
}
