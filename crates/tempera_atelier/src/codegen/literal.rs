//! Rust string literals for text copied into generated code.

/// Render `text` as a Rust string literal that evaluates to exactly `text`.
///
/// Plain text becomes a normal literal. Text containing `"` or `\` becomes a
/// raw literal with one more `#` than the longest `"#...` run inside it, so
/// the text can never close the literal early. Raw literals cannot hold a
/// bare carriage return or more than [`MAX_RAW_HASHES`] `#`, so such text is
/// fully escaped instead.
pub fn string_literal(text: &str) -> String {
    if text.contains('\r') {
        return format!("{:?}", text);
    }
    if !text.contains(['"', '\\']) {
        return format!("\"{}\"", text);
    }
    let run = longest_hash_run_after_quote(text);
    if run >= MAX_RAW_HASHES {
        return format!("{:?}", text);
    }
    let hashes = "#".repeat(run + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

/// Most `#` a raw string literal may be delimited with.
pub const MAX_RAW_HASHES: usize = 255;

fn longest_hash_run_after_quote(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut longest = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'"' {
            let run = bytes[i + 1..].iter().take_while(|&&c| c == b'#').count();
            longest = longest.max(run);
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(literal: &str) -> String {
        syn::parse_str::<syn::LitStr>(literal)
            .unwrap_or_else(|e| panic!("{} is not a string literal: {}", literal, e))
            .value()
    }

    #[test]
    fn test_plain() {
        assert_eq!(string_literal("hello"), "\"hello\"");
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_raw() {
        assert_eq!(string_literal("say \"hi\""), "r#\"say \"hi\"\"#");
        assert_eq!(string_literal("a\"#b"), "r##\"a\"#b\"##");
        assert_eq!(string_literal("c:\\path"), "r#\"c:\\path\"#");
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "plain",
            "multi\nline\n",
            "quote \" inside",
            "closing \"# marker",
            "longer \"### run and \"# short",
            "trailing quote\"",
            "back\\slash",
            "carriage\r\nreturn",
            "tab\tand \u{1F600}",
            "{ braces } and <tags>",
        ] {
            assert_eq!(parse(&string_literal(text)), text, "{:?}", text);
        }
    }

    #[test]
    fn test_hash_run_at_delimiter_limit() {
        let widest_raw = format!("x\"{}", "#".repeat(MAX_RAW_HASHES - 1));
        let literal = string_literal(&widest_raw);
        assert!(literal.starts_with(&format!("r{}\"", "#".repeat(MAX_RAW_HASHES))));
        assert_eq!(parse(&literal), widest_raw);

        let too_wide = format!("x\"{}\\", "#".repeat(MAX_RAW_HASHES));
        let literal = string_literal(&too_wide);
        assert!(literal.starts_with("\"x\\\""));
        assert_eq!(parse(&literal), too_wide);
    }
}
