#![doc = include_str!("../README.md")]

pub use thompson_regular_expressions::*;

/// Parse a pattern at compile time, and construct its [`Regex`] at runtime.
///
/// An invalid pattern is a compile error.
///
/// ```rust
/// use thompson::*;
///
/// assert_eq!(regex!("ab"), parse_regex("ab").unwrap());
/// ```
///
/// ```compile_fail
/// let _ = thompson::regex!("(a");
/// ```
///
/// # Supported Attributes
/// * `#[graph="$path"]` location to put a graphviz dot file representing the automaton
///   for the pattern. (only with the `dot` feature)
pub use thompson_macros::regex;

/// Parse `pattern` and build its automaton.
pub fn compile(pattern: impl AsRef<str>) -> Result<Automaton, SyntaxError> {
    Ok(parse_regex(pattern)?.compile())
}

/// Returns true if `automaton` accepts the whole of `input`.
pub fn matches(automaton: &Automaton, input: impl AsRef<str>) -> bool {
    automaton.matches(input)
}

/// Returns whether `pattern` matches the whole of `input`.
///
/// When `pattern` is invalid, its error is returned and nothing is matched.
pub fn is_match(pattern: impl AsRef<str>, input: impl AsRef<str>) -> Result<bool, SyntaxError> {
    let pattern = pattern.as_ref();
    match compile(pattern) {
        Ok(automaton) => Ok(automaton.matches(input)),
        Err(e) => {
            log::debug!("not matching with invalid pattern {pattern:?}: {e}");
            Err(e)
        }
    }
}
