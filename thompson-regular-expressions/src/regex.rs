use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

/// A regular expression.
///
/// Concatenation and alternation fold to the left, so a long pattern is a very deep
/// tree. None of the operations on a `Regex` (including `Clone`, `PartialEq`, `Hash`
/// and `Drop`) recurse over it, and all of them work on arbitrarily deep trees.
#[derive(Debug)]
pub enum Regex {
    Empty,
    Literal(char),
    Any,
    Concat(Box<Regex>, Box<Regex>),
    Alternation(Box<Regex>, Box<Regex>),
    Repeat(Box<Regex>),
}

/// One node of a [`Regex`], with its children replaced by the results of folding them.
pub(crate) enum Folded<T> {
    Empty,
    Literal(char),
    Any,
    Concat(T, T),
    Alternation(T, T),
    Repeat(T),
}

impl Regex {
    pub fn concat(l: Regex, r: Regex) -> Self {
        Regex::Concat(Box::new(l), Box::new(r))
    }

    pub fn alternation(l: Regex, r: Regex) -> Self {
        Regex::Alternation(Box::new(l), Box::new(r))
    }

    pub fn repeat(inner: Regex) -> Self {
        Regex::Repeat(Box::new(inner))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Regex::Empty)
    }

    /// Bottom-up fold over the tree, visiting left children before right children.
    pub(crate) fn fold<T>(&self, mut f: impl FnMut(Folded<T>) -> T) -> T {
        enum Step<'a> {
            Enter(&'a Regex),
            Exit(&'a Regex),
        }

        let mut steps = vec![Step::Enter(self)];
        let mut values: Vec<T> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(regex) => {
                    steps.push(Step::Exit(regex));
                    match regex {
                        Regex::Concat(l, r) | Regex::Alternation(l, r) => {
                            steps.push(Step::Enter(r));
                            steps.push(Step::Enter(l));
                        }
                        Regex::Repeat(inner) => steps.push(Step::Enter(inner)),
                        Regex::Empty | Regex::Literal(_) | Regex::Any => {}
                    }
                }
                Step::Exit(regex) => {
                    let folded = match regex {
                        Regex::Empty => Folded::Empty,
                        Regex::Literal(c) => Folded::Literal(*c),
                        Regex::Any => Folded::Any,
                        Regex::Concat(_, _) | Regex::Alternation(_, _) => {
                            let (Some(r), Some(l)) = (values.pop(), values.pop()) else {
                                unreachable!("both operands are folded before their parent");
                            };
                            if let Regex::Concat(_, _) = regex {
                                Folded::Concat(l, r)
                            } else {
                                Folded::Alternation(l, r)
                            }
                        }
                        Regex::Repeat(_) => {
                            let Some(inner) = values.pop() else {
                                unreachable!("the operand is folded before its parent");
                            };
                            Folded::Repeat(inner)
                        }
                    };
                    values.push(f(folded));
                }
            }
        }

        match values.pop() {
            Some(value) => value,
            None => unreachable!("folding a regex results in exactly one value"),
        }
    }

    /// Whether this regular expression accepts the empty string.
    pub fn is_nullable(&self) -> bool {
        self.fold(|node| match node {
            Folded::Empty => true,
            Folded::Literal(_) => false,
            Folded::Any => false,
            Folded::Concat(l, r) => l && r,
            Folded::Alternation(l, r) => l || r,
            Folded::Repeat(_) => true,
        })
    }

    /// The literal characters that occur in this regular expression.
    /// The wildcard is not part of the alphabet.
    pub fn alphabet(&self) -> HashSet<char> {
        let mut alphabet = HashSet::new();
        let mut work_list = vec![self];

        while let Some(regex) = work_list.pop() {
            match regex {
                Regex::Empty | Regex::Any => {}
                Regex::Literal(c) => {
                    alphabet.insert(*c);
                }
                Regex::Repeat(i) => work_list.push(i),
                Regex::Concat(l, r) | Regex::Alternation(l, r) => {
                    work_list.push(r);
                    work_list.push(l);
                }
            }
        }

        alphabet
    }

    fn precedence(&self) -> u8 {
        match self {
            Regex::Alternation(_, _) => 0,
            Regex::Concat(_, _) => 1,
            Regex::Repeat(_) => 2,
            Regex::Empty | Regex::Literal(_) | Regex::Any => 3,
        }
    }

    /// Moves the children out of this node, leaving empty strings in their place.
    fn take_children(&mut self, into: &mut Vec<Regex>) {
        match self {
            Regex::Concat(l, r) | Regex::Alternation(l, r) => {
                into.push(mem::replace(&mut **l, Regex::Empty));
                into.push(mem::replace(&mut **r, Regex::Empty));
            }
            Regex::Repeat(inner) => into.push(mem::replace(&mut **inner, Regex::Empty)),
            Regex::Empty | Regex::Literal(_) | Regex::Any => {}
        }
    }
}

impl Drop for Regex {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.take_children(&mut detached);

        // every node is emptied before it is dropped, so no drop goes deeper than one level
        while let Some(mut regex) = detached.pop() {
            regex.take_children(&mut detached);
        }
    }
}

impl Clone for Regex {
    fn clone(&self) -> Self {
        self.fold(|node| match node {
            Folded::Empty => Regex::Empty,
            Folded::Literal(c) => Regex::Literal(c),
            Folded::Any => Regex::Any,
            Folded::Concat(l, r) => Regex::concat(l, r),
            Folded::Alternation(l, r) => Regex::alternation(l, r),
            Folded::Repeat(inner) => Regex::repeat(inner),
        })
    }
}

impl PartialEq for Regex {
    fn eq(&self, other: &Self) -> bool {
        let mut work_list = vec![(self, other)];

        while let Some(pair) = work_list.pop() {
            match pair {
                (Regex::Empty, Regex::Empty) | (Regex::Any, Regex::Any) => {}
                (Regex::Literal(a), Regex::Literal(b)) if a == b => {}
                (Regex::Concat(l1, r1), Regex::Concat(l2, r2))
                | (Regex::Alternation(l1, r1), Regex::Alternation(l2, r2)) => {
                    work_list.push((&**r1, &**r2));
                    work_list.push((&**l1, &**l2));
                }
                (Regex::Repeat(a), Regex::Repeat(b)) => work_list.push((&**a, &**b)),
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Regex {}

impl Hash for Regex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // the pre-order sequence of nodes determines the tree, since every kind
        // of node has a fixed number of children
        let mut work_list = vec![self];

        while let Some(regex) = work_list.pop() {
            mem::discriminant(regex).hash(state);
            match regex {
                Regex::Literal(c) => c.hash(state),
                Regex::Repeat(i) => work_list.push(i),
                Regex::Concat(l, r) | Regex::Alternation(l, r) => {
                    work_list.push(r);
                    work_list.push(l);
                }
                Regex::Empty | Regex::Any => {}
            }
        }
    }
}

/// Prints the regular expression in the pattern syntax accepted by
/// [`parse_regex`](crate::parse_regex).
impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Nested(&'a Regex, u8),
            Text(&'static str),
        }

        if self.is_empty() {
            return Ok(());
        }

        let mut pieces = vec![Piece::Nested(self, 0)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Nested(regex, min_precedence) if regex.precedence() < min_precedence => {
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Nested(regex, 0));
                    pieces.push(Piece::Text("("));
                }
                Piece::Nested(regex, _) => match regex {
                    // a nested empty string only has a textual form as an empty group
                    Regex::Empty => f.write_str("()")?,
                    Regex::Literal(c) => write!(f, "{c}")?,
                    Regex::Any => f.write_str(".")?,
                    // both operators fold to the left, so a right operand of the
                    // same kind has to be grouped explicitly
                    Regex::Concat(l, r) => {
                        pieces.push(Piece::Nested(r, 2));
                        pieces.push(Piece::Nested(l, 1));
                    }
                    Regex::Alternation(l, r) => {
                        pieces.push(Piece::Nested(r, 1));
                        pieces.push(Piece::Text("|"));
                        pieces.push(Piece::Nested(l, 0));
                    }
                    Regex::Repeat(inner) => {
                        pieces.push(Piece::Text("*"));
                        pieces.push(Piece::Nested(inner, 3));
                    }
                },
            }
        }

        Ok(())
    }
}
