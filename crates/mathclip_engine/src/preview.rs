/// Preview lengths for operator log lines. Inputs get a short snippet,
/// converted output a longer one.
pub(crate) const INPUT_PREVIEW_CHARS: usize = 70;
pub(crate) const OUTPUT_PREVIEW_CHARS: usize = 150;

/// Single-line log preview: newlines become spaces, long text is cut at a
/// char boundary and marked with `...`.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let flat = flat.trim();
    if flat.chars().count() <= max_chars {
        return flat.to_string();
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(preview("x + y", 70), "x + y");
    }

    #[test]
    fn newlines_flatten_to_spaces() {
        assert_eq!(preview("a\nb\r\nc", 70), "a b  c");
    }

    #[test]
    fn long_text_is_cut_with_marker() {
        let long = "x".repeat(80);
        let shown = preview(&long, 70);
        assert_eq!(shown.len(), 73);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn cut_lands_on_char_boundaries() {
        let greek = "α".repeat(80);
        let shown = preview(&greek, 70);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 73);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(preview("  spaced out \n", 70), "spaced out");
    }
}
