//! Parser for patterns.
//!
//! ```grammar
//! alternation   = concatenation , { "|" , concatenation } ;
//! concatenation = { atom } ;
//! atom          = element , [ "*" ] ;
//! element       = literal_char | "." | "(" , alternation , ")" ;
//! ```
//!
//! The productions are the ones of a recursive descent parser, but groups that are
//! still open are kept on an explicit stack instead of the call stack. Nesting depth
//! is therefore only limited by memory.

use crate::{ErrorKind, Regex, SyntaxError};

/// The alternation being parsed inside one pair of parentheses, or at the top level.
struct Group {
    /// position of the `(`
    open: usize,
    alternation: Option<Regex>,
    concatenation: Option<Regex>,
}

impl Group {
    fn new(open: usize) -> Self {
        Self {
            open,
            alternation: None,
            concatenation: None,
        }
    }

    // abc...
    fn push_atom(&mut self, atom: Regex) {
        self.concatenation = Some(match self.concatenation.take() {
            None => atom,
            Some(prev) => Regex::concat(prev, atom),
        });
    }

    // a|b|c...
    fn alternate(&mut self) {
        // no atoms at all: the empty string
        let branch = self.concatenation.take().unwrap_or(Regex::Empty);
        self.alternation = Some(match self.alternation.take() {
            None => branch,
            Some(prev) => Regex::alternation(prev, branch),
        });
    }

    fn finish(mut self) -> Regex {
        self.alternate();
        self.alternation.take().unwrap_or(Regex::Empty)
    }
}

pub(crate) struct RegexParser {
    input: Vec<char>,
}

impl RegexParser {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
        }
    }

    fn peek(&self, pos: usize) -> Option<char> {
        self.input.get(pos).copied()
    }

    fn error<T>(&self, kind: ErrorKind, position: usize) -> Result<T, SyntaxError> {
        Err(SyntaxError { kind, position })
    }

    // a single element other than a group, with an optional postfix operator
    fn parse_atom(&self, pos: usize, c: char) -> Result<(usize, Regex), SyntaxError> {
        let node = match c {
            '.' => Regex::Any,
            '*' => return self.error(ErrorKind::NothingToRepeat, pos),
            c => Regex::Literal(c),
        };

        Ok(self.parse_postfix(pos + 1, node))
    }

    // a*
    fn parse_postfix(&self, pos: usize, node: Regex) -> (usize, Regex) {
        match self.peek(pos) {
            Some('*') => (pos + 1, Regex::repeat(node)),
            _ => (pos, node),
        }
    }

    fn parse(&self) -> Result<Regex, SyntaxError> {
        let mut top = Group::new(0);
        // innermost last
        let mut open: Vec<Group> = Vec::new();
        let mut pos = 0;

        while let Some(c) = self.peek(pos) {
            match c {
                '(' => {
                    open.push(Group::new(pos));
                    pos += 1;
                }
                ')' => {
                    let Some(group) = open.pop() else {
                        return self.error(ErrorKind::UnexpectedCloseParen, pos);
                    };
                    let (next, node) = self.parse_postfix(pos + 1, group.finish());
                    open.last_mut().unwrap_or(&mut top).push_atom(node);
                    pos = next;
                }
                '|' => {
                    open.last_mut().unwrap_or(&mut top).alternate();
                    pos += 1;
                }
                c => {
                    let (next, node) = self.parse_atom(pos, c)?;
                    open.last_mut().unwrap_or(&mut top).push_atom(node);
                    pos = next;
                }
            }
        }

        if let Some(unclosed) = open.last() {
            return self.error(ErrorKind::UnbalancedParenthesis, unclosed.open);
        }

        Ok(top.finish())
    }

    pub fn parse_regex(input: &str) -> Result<Regex, SyntaxError> {
        RegexParser::new(input).parse()
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_regex, ErrorKind, Regex, Regex::*, SyntaxError};
    use pretty_assertions::assert_eq;

    fn lit(c: char) -> Regex {
        Literal(c)
    }

    fn error(kind: ErrorKind, position: usize) -> Result<Regex, SyntaxError> {
        Err(SyntaxError { kind, position })
    }

    #[test]
    fn test_atoms() {
        assert_eq!(parse_regex("").unwrap(), Empty);
        assert_eq!(parse_regex("a").unwrap(), lit('a'));
        assert_eq!(parse_regex(".").unwrap(), Any);
        assert_eq!(parse_regex("()").unwrap(), Empty);
        assert_eq!(parse_regex("(a)").unwrap(), lit('a'));
        assert_eq!(parse_regex("é").unwrap(), lit('é'));
    }

    #[test]
    fn test_operators() {
        assert_eq!(parse_regex("ab").unwrap(), Regex::concat(lit('a'), lit('b')));
        assert_eq!(
            parse_regex("a|b").unwrap(),
            Regex::alternation(lit('a'), lit('b'))
        );
        assert_eq!(parse_regex("a*").unwrap(), Regex::repeat(lit('a')));
        assert_eq!(parse_regex(".*").unwrap(), Regex::repeat(Any));
        assert_eq!(parse_regex("a|").unwrap(), Regex::alternation(lit('a'), Empty));
        assert_eq!(parse_regex("|a").unwrap(), Regex::alternation(Empty, lit('a')));
        assert_eq!(parse_regex("()*").unwrap(), Regex::repeat(Empty));
    }

    #[test]
    fn test_disambiguation() {
        assert_eq!(
            parse_regex("a|bc").unwrap(),
            Regex::alternation(lit('a'), Regex::concat(lit('b'), lit('c')))
        );

        // concat and alternation are left-associative
        assert_eq!(
            parse_regex("abc").unwrap(),
            Regex::concat(Regex::concat(lit('a'), lit('b')), lit('c'))
        );
        assert_eq!(
            parse_regex("a|b|c").unwrap(),
            Regex::alternation(Regex::alternation(lit('a'), lit('b')), lit('c'))
        );

        // closure < concat < alternation
        assert_eq!(
            parse_regex("ab*|c").unwrap(),
            Regex::alternation(
                Regex::concat(lit('a'), Regex::repeat(lit('b'))),
                lit('c')
            )
        );
        assert_eq!(
            parse_regex("(ab)*").unwrap(),
            Regex::repeat(Regex::concat(lit('a'), lit('b')))
        );
        assert_eq!(
            parse_regex("(a|b)c").unwrap(),
            Regex::concat(Regex::alternation(lit('a'), lit('b')), lit('c'))
        );
    }

    #[test]
    fn test_nesting() {
        assert_eq!(parse_regex("((((a))))").unwrap(), lit('a'));
        assert_eq!(
            parse_regex("(a(b(c)*)*)*").unwrap(),
            Regex::repeat(Regex::concat(
                lit('a'),
                Regex::repeat(Regex::concat(lit('b'), Regex::repeat(lit('c'))))
            ))
        );

        let deep = format!("{}x{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(parse_regex(deep).unwrap(), lit('x'));

        let n = 100_000;
        let deep = format!("{}x{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(parse_regex(deep).unwrap(), lit('x'));

        // the innermost group is reported
        let unclosed = format!("{}x", "(".repeat(n));
        assert_eq!(
            parse_regex(unclosed),
            error(ErrorKind::UnbalancedParenthesis, n - 1)
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_regex("(a"), error(ErrorKind::UnbalancedParenthesis, 0));
        assert_eq!(parse_regex("a(b(c)"), error(ErrorKind::UnbalancedParenthesis, 1));
        assert_eq!(parse_regex("("), error(ErrorKind::UnbalancedParenthesis, 0));

        assert_eq!(parse_regex("a)"), error(ErrorKind::UnexpectedCloseParen, 1));
        assert_eq!(parse_regex(")"), error(ErrorKind::UnexpectedCloseParen, 0));
        assert_eq!(parse_regex("(a))b"), error(ErrorKind::UnexpectedCloseParen, 3));

        assert_eq!(parse_regex("*a"), error(ErrorKind::NothingToRepeat, 0));
        assert_eq!(parse_regex("a|*"), error(ErrorKind::NothingToRepeat, 2));
        assert_eq!(parse_regex("(*)"), error(ErrorKind::NothingToRepeat, 1));
        // only one postfix operator per atom
        assert_eq!(parse_regex("a**"), error(ErrorKind::NothingToRepeat, 2));
    }

    #[test]
    fn test_error_positions_count_characters() {
        assert_eq!(parse_regex("ééé)"), error(ErrorKind::UnexpectedCloseParen, 3));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            parse_regex("(a").unwrap_err().to_string(),
            "unbalanced parenthesis at position 0"
        );
        assert_eq!(
            parse_regex("*").unwrap_err().to_string(),
            "nothing to repeat at position 0"
        );
        assert_eq!(
            parse_regex("a)").unwrap_err().to_string(),
            "unexpected ')' at position 1"
        );
    }
}
