/// Tidies converter output before it goes back to the clipboard.
///
/// The converter escapes literal parentheses and brackets on the way out of
/// LaTeX even though they carry no meaning in Typst; those escapes are always
/// reversed. When `wrapped` is set the surrounding dollar delimiters were
/// synthetic, added by [`crate::ensure_math_delimiters`], and one pair is
/// stripped so the clipboard ends up with the bare expression again.
pub fn clean_typst_output(output: &str, wrapped: bool) -> String {
    if output.is_empty() {
        return String::new();
    }

    let cleaned = output
        .replace("\\(", "(")
        .replace("\\)", ")")
        .replace("\\[", "[")
        .replace("\\]", "]");

    if !wrapped {
        return cleaned;
    }

    let trimmed = cleaned.trim();
    let stripped = if trimmed.len() >= 4 && trimmed.starts_with("$$") && trimmed.ends_with("$$") {
        &trimmed[2..trimmed.len() - 2]
    } else if trimmed.len() >= 2 && trimmed.starts_with('$') && trimmed.ends_with('$') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    stripped.trim().to_string()
}
