use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns that make a snippet look like LaTeX: a backslash command word,
/// display-math delimiters, an environment opening, or super/subscript
/// markers (braced or single-character).
static LATEX_HINTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\\[a-zA-Z]+",
        r"\\\[",
        r"\$\$",
        r"\\begin\{[a-zA-Z*]+\}",
        r"\^\{",
        r"_\{",
        r"\^\S",
        r"_\S",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid latex hint pattern"))
    .collect()
});

/// Heuristic check for LaTeX-looking text, not a validator. False positives
/// (snake_case identifiers, carets in URLs) and false negatives (plain
/// `a + b = c`) are accepted behavior.
pub fn is_likely_latex(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    LATEX_HINTS.iter().any(|pattern| pattern.is_match(text))
}
