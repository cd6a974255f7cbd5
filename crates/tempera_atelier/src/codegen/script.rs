//! Script template emission.

use std::io;

use tempera_carton::script_function_name;
use tempera_relief::ScriptTemplate;

use super::{string_literal, CodegenContext};
use crate::errors::GenerateError;

impl<W: io::Write> CodegenContext<'_, W> {
    /// Emit a function returning the script value for `template`.
    pub(super) fn generate_script_template(
        &mut self,
        template: &ScriptTemplate,
    ) -> Result<(), GenerateError> {
        // The name digests the body as written; the emitted function is trimmed.
        let function_name = script_function_name(template.name.as_str(), &template.body);
        let body = template.body.trim();
        let arguments = strip_parameter_types(template.parameters.as_str());
        let function = format!(
            "function {}({}){{{}}}",
            function_name,
            arguments.join(", "),
            body
        );
        let call_args = arguments
            .iter()
            .map(|arg| format!("tempera::script_arg(&{})", arg))
            .collect::<Vec<_>>()
            .join(", ");

        self.push_fn_signature(
            &template.name,
            &template.parameters,
            "tempera::ComponentScript",
        )?;
        self.indent_level += 1;
        self.push_line("tempera::ComponentScript {")?;
        self.indent_level += 1;
        self.push_line(&format!("name: {}.into(),", string_literal(&function_name)))?;
        self.push_line(&format!("function: {}.into(),", string_literal(&function)))?;
        self.push_line(&format!(
            "call: tempera::safe_script({}, &[{}]),",
            string_literal(&function_name),
            call_args
        ))?;
        self.indent_level -= 1;
        self.push_line("}")?;
        self.indent_level -= 1;
        self.push_line("}")?;
        Ok(())
    }
}

/// Binding names of a parameter list, without their types.
///
/// `name: String, mut count: u32, pair: (i32, i32)` gives
/// `["name", "count", "pair"]`.
pub fn strip_parameter_types(parameters: &str) -> Vec<String> {
    split_top_level(parameters, ',')
        .into_iter()
        .filter_map(|param| {
            let binding = split_top_level(param, ':')
                .into_iter()
                .next()
                .unwrap_or(param)
                .trim();
            let binding = binding
                .strip_prefix("mut ")
                .map(str::trim_start)
                .unwrap_or(binding);
            (!binding.is_empty()).then(|| binding.to_string())
        })
        .collect()
}

/// Split on `separator` outside of brackets.
fn split_top_level(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = '\0';
    for (i, c) in s.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            // `->` in `impl Fn(i32) -> i32`
            '>' if prev == '-' => {}
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
        prev = c;
    }
    parts.push(&s[start..]);
    parts
}
