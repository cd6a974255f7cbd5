//! Script values, argument encoding and script dedup.

use std::io;

use serde::Serialize;
use tempera_carton::escape_html;

use crate::scope::RenderScope;

/// Value produced by a script template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentScript {
    /// Generated function name, used as the dedup key.
    pub name: String,
    /// Complete function source.
    pub function: String,
    /// Call expression with the arguments already encoded.
    pub call: String,
}

/// Encode one call argument: JSON, then HTML-escaped so it can sit inside a
/// quoted attribute.
pub fn script_arg<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => escape_html(&json),
        Err(err) => {
            tracing::debug!(error = %err, "script argument is not serializable");
            "null".to_string()
        }
    }
}

/// Build `name(arg1,arg2)` from already encoded arguments.
pub fn safe_script(function_name: &str, args: &[String]) -> String {
    format!("{}({})", function_name, args.join(","))
}

/// Write one `<script>` block holding every function in `scripts` that this
/// render tree has not written yet.
pub fn render_scripts(
    scope: &mut RenderScope,
    w: &mut dyn io::Write,
    scripts: &[&ComponentScript],
) -> io::Result<()> {
    let rendered = scope.rendered_scripts();
    let mut source = String::new();
    for script in scripts {
        if rendered.add(script.name.as_str()) {
            source.push_str(&script.function);
        }
    }
    if source.is_empty() {
        return Ok(());
    }
    w.write_all(b"<script type=\"text/javascript\">")?;
    w.write_all(source.as_bytes())?;
    w.write_all(b"</script>")
}
