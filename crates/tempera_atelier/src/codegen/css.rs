//! CSS template emission.

use std::io;

use tempera_carton::sanitize_css_property;
use tempera_relief::{CssProperty, CssTemplate};

use super::{string_literal, CodegenContext};
use crate::errors::GenerateError;

impl<W: io::Write> CodegenContext<'_, W> {
    /// Emit a function building the component class for `template`.
    ///
    /// Constant declarations are sanitized here and embedded as literals;
    /// expression declarations are sanitized when the function runs.
    pub(super) fn generate_css_template(
        &mut self,
        template: &CssTemplate,
    ) -> Result<(), GenerateError> {
        self.push_fn_signature(
            &template.name,
            &template.parameters,
            "tempera::ComponentCssClass",
        )?;
        self.indent_level += 1;
        self.push_line("let mut css = CssBuilder::new();")?;

        for property in &template.properties {
            match property {
                CssProperty::Constant(p) => {
                    let css = sanitize_css_property(&p.name, &p.value);
                    self.push_line(&format!("css.push_str({});", string_literal(&css)))?;
                }
                CssProperty::Expression(p) => {
                    self.push_indent()?;
                    self.push(&format!(
                        "css.push_css(tempera::sanitize_css({}, ",
                        string_literal(p.name.trim())
                    ))?;
                    self.push_expression(&p.value)?;
                    self.push("));\n")?;
                }
            }
        }

        self.push_line(&format!(
            "css.finish({})",
            string_literal(template.name.as_str())
        ))?;
        self.indent_level -= 1;
        self.push_line("}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::expr;
    use super::*;
    use crate::options::GeneratorOptions;
    use tempera_relief::{ConstantCssProperty, ExpressionCssProperty};

    #[test]
    fn test_css_template() {
        let template = CssTemplate {
            name: expr("card"),
            parameters: expr("width: u32"),
            properties: vec![
                CssProperty::Constant(ConstantCssProperty {
                    name: "color".into(),
                    value: " red ".into(),
                }),
                CssProperty::Constant(ConstantCssProperty {
                    name: "background".into(),
                    value: "url(javascript:alert(1))".into(),
                }),
                CssProperty::Expression(ExpressionCssProperty {
                    name: "width".into(),
                    value: expr("format!(\"{}px\", width)"),
                }),
            ],
        };
        let options = GeneratorOptions::default();
        let mut out = Vec::new();
        let mut ctx = CodegenContext::new(&mut out, &options);
        ctx.generate_css_template(&template).unwrap();
        drop(ctx);

        insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r###"
        pub fn card(width: u32) -> tempera::ComponentCssClass {
            let mut css = CssBuilder::new();
            css.push_str("color:red;");
            css.push_str("background:zTemperaUnsafeCssPropertyValue;");
            css.push_css(tempera::sanitize_css("width", format!("{}px", width)));
            css.finish("card")
        }
        "###);
    }
}
