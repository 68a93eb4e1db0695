use thiserror::Error;

mod compile;
mod matcher;
mod parse;
mod regex;

#[cfg(feature = "emit")]
mod emit;

#[cfg(feature = "dot")]
mod dot;

pub use compile::{Automaton, Guard, State, StateID, Transition};
pub use matcher::Matcher;
pub use regex::Regex;

pub trait RegexMatcher {
    /// accepts the specified character.
    ///
    /// If accepting failed, the new state is empty.
    fn accept(&mut self, inp: char);
    fn accept_many(&mut self, inp: impl IntoIterator<Item = char>) {
        for i in inp {
            self.accept(i);
        }
    }

    /// Returns true if the regular expression accepts the whole input iterator
    fn accepts(&mut self, iter: impl IntoIterator<Item = char>) -> bool {
        for i in iter {
            self.accept(i);
            if self.is_empty() {
                return false;
            }
        }

        self.is_accepting()
    }

    fn is_accepting(&self) -> bool;

    /// No continuation of the input consumed so far can be accepted anymore.
    fn is_empty(&self) -> bool;
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("nothing to repeat")]
    NothingToRepeat,
    #[error("unexpected ')'")]
    UnexpectedCloseParen,
}

/// A pattern that does not conform to the grammar.
///
/// `position` counts characters (not bytes) from the start of the pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{kind} at position {position}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub position: usize,
}

/// parse a string to a regular expression
pub fn parse_regex(input: impl AsRef<str>) -> Result<Regex, SyntaxError> {
    parse::RegexParser::parse_regex(input.as_ref())
}
