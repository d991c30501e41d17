use once_cell::sync::Lazy;
use regex::Regex;

/// Input prepared for conversion, with a record of whether delimiters were
/// added here. Synthetic delimiters must be stripped from the converter's
/// output again; pre-existing ones must be left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMath {
    pub text: String,
    pub wrapped: bool,
}

/// Delimiter pairs that mark text as already-delimited math. Pairs may span
/// lines, so `.` is put in dot-matches-newline mode.
static EXISTING_DELIMITERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?s)\$\$.+?\$\$",
        r"(?s)\$.+?\$",
        r"(?s)\\\[.+?\\\]",
        r"(?s)\\\(.+?\\\)",
        r"\\begin\{(?:equation|align|gather|eqnarray|displaymath|math)\*?\}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid delimiter pattern"))
    .collect()
});

/// Commands that justify wrapping bare text as display math. Deliberately
/// narrower than the detection heuristics: an unknown `\macro` passes
/// detection but is converted unwrapped.
const MATH_COMMANDS: &[&str] = &[
    "frac", "sqrt", "sum", "prod", "int", "oint", "lim", "binom", "vec", "hat", "bar", "dot",
    "overline", "underline", "alpha", "beta", "gamma", "delta", "epsilon", "varepsilon", "zeta",
    "eta", "theta", "iota", "kappa", "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau",
    "upsilon", "phi", "varphi", "chi", "psi", "omega", "Gamma", "Delta", "Theta", "Lambda", "Xi",
    "Pi", "Sigma", "Upsilon", "Phi", "Psi", "Omega", "sin", "cos", "tan", "cot", "sec", "csc",
    "sinh", "cosh", "tanh", "log", "ln", "exp", "min", "max", "sup", "inf", "cdot", "times", "div",
    "pm", "mp", "leq", "geq", "neq", "approx", "equiv", "sim", "propto", "infty", "partial",
    "nabla", "to", "mapsto", "rightarrow", "leftarrow", "Rightarrow", "Leftarrow", "in", "notin",
    "subset", "subseteq", "cup", "cap", "forall", "exists", "mathbb", "mathbf", "mathcal",
    "mathrm", "left", "right",
];

static COMMAND_REGEX: Lazy<Regex> = Lazy::new(|| {
    // A command ends where the letters end; `[^a-zA-Z]` instead of `\b`
    // because `_` and digits count as word characters there.
    let alternates = MATH_COMMANDS.join("|");
    Regex::new(&format!(r"\\(?:{alternates})(?:[^a-zA-Z]|$)"))
        .expect("valid math command pattern")
});

/// Braced or single-character super/subscript, e.g. `x^{2}`, `a_1`.
static SCRIPT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_^]\S").expect("valid script marker pattern"));

/// Wraps bare math fragments in `$$...$$` so the converter parses them as
/// display math. Text that already carries delimiters, or that shows no
/// recognized math command or script, passes through unchanged.
pub fn ensure_math_delimiters(text: &str) -> NormalizedMath {
    if EXISTING_DELIMITERS
        .iter()
        .any(|pattern| pattern.is_match(text))
    {
        return NormalizedMath {
            text: text.to_string(),
            wrapped: false,
        };
    }

    if COMMAND_REGEX.is_match(text) || SCRIPT_MARKER.is_match(text) {
        return NormalizedMath {
            text: format!("$${text}$$"),
            wrapped: true,
        };
    }

    NormalizedMath {
        text: text.to_string(),
        wrapped: false,
    }
}
