use crate::Regex;
use std::fmt::{Display, Formatter};

/// Index of a [`State`] in the [`Automaton`] that created it.
pub type StateID = usize;

/// The condition under which a [`Transition`] may be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    /// Taken without consuming input.
    Epsilon,
    /// Consumes exactly this character.
    Char(char),
    /// Consumes any single character.
    Any,
}

impl Guard {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Guard::Epsilon)
    }

    /// Whether this guard consumes `c`. Epsilon guards never consume anything.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Guard::Epsilon => false,
            Guard::Char(expected) => *expected == c,
            Guard::Any => true,
        }
    }
}

impl Display for Guard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Guard::Epsilon => write!(f, "ε"),
            Guard::Char(c) => write!(f, "{c}"),
            Guard::Any => write!(f, "."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub guard: Guard,
    pub target: StateID,
}

#[derive(Debug, Clone)]
pub struct State {
    pub(crate) id: StateID,
    pub(crate) label: Option<&'static str>,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    pub fn id(&self) -> StateID {
        self.id
    }

    /// Debugging name of the state, describing the construction that introduced it.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn epsilon_transitions(&self) -> impl Iterator<Item = StateID> + '_ {
        self.transitions
            .iter()
            .filter(|t| t.guard.is_epsilon())
            .map(|t| t.target)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.label {
            Some(label) => write!(f, "{label} {}", self.id),
            None => write!(f, "Node {}", self.id),
        }
    }
}

/// A nondeterministic finite automaton, built from a [`Regex`] by Thompson's construction.
///
/// The automaton owns all of its states. Transitions refer to other states by their
/// [`StateID`], so loops introduced by repetition do not need shared ownership.
/// An automaton is never modified after it has been built, and can be used for any
/// number of matches.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub(crate) regex: Regex,
    pub(crate) states: Vec<State>,
    pub(crate) initial: StateID,
    pub(crate) accepting: StateID,
}

impl Automaton {
    /// The regular expression this automaton was built from.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateID) -> Option<&State> {
        self.states.get(id)
    }

    pub fn initial(&self) -> StateID {
        self.initial
    }

    pub fn accepting(&self) -> StateID {
        self.accepting
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

struct RegexCompiler {
    states: Vec<State>,
}

impl RegexCompiler {
    fn new() -> Self {
        Self { states: Vec::new() }
    }

    fn add_state(&mut self, label: &'static str) -> StateID {
        let id = self.states.len();
        self.states.push(State {
            id,
            label: Some(label),
            transitions: Vec::new(),
        });
        id
    }

    fn add_transition(&mut self, from: StateID, guard: Guard, target: StateID) {
        self.states[from]
            .transitions
            .push(Transition { guard, target });
    }

    /// Wires `regex` between `start` and `end`: the automaton can get from `start`
    /// to `end` exactly by consuming a string that matches `regex`.
    ///
    /// Subexpressions are built in the same order a recursive construction would
    /// visit them, so state ids and transition order do not depend on the work list.
    fn build_into(&mut self, regex: &Regex, start: StateID, end: StateID) {
        enum Task<'a> {
            Build(&'a Regex, StateID, StateID),
            Edge(StateID, StateID),
        }

        let mut tasks = vec![Task::Build(regex, start, end)];
        while let Some(task) = tasks.pop() {
            let (regex, start, end) = match task {
                Task::Build(regex, start, end) => (regex, start, end),
                Task::Edge(from, to) => {
                    self.add_transition(from, Guard::Epsilon, to);
                    continue;
                }
            };

            match regex {
                Regex::Empty => self.add_transition(start, Guard::Epsilon, end),
                Regex::Literal(c) => self.add_transition(start, Guard::Char(*c), end),
                Regex::Any => self.add_transition(start, Guard::Any, end),
                Regex::Concat(l, r) => {
                    let mid = self.add_state("mid");
                    tasks.push(Task::Build(r, mid, end));
                    tasks.push(Task::Build(l, start, mid));
                }
                // both branches share their endpoints: a nondeterministic choice
                Regex::Alternation(l, r) => {
                    tasks.push(Task::Build(r, start, end));
                    tasks.push(Task::Build(l, start, end));
                }
                Regex::Repeat(inner) => {
                    let body_in = self.add_state("in");
                    let body_out = self.add_state("out");
                    // enter the loop, or skip it entirely
                    self.add_transition(start, Guard::Epsilon, body_in);
                    self.add_transition(start, Guard::Epsilon, body_out);
                    // go around again, or leave, once the body is built
                    tasks.push(Task::Edge(body_out, end));
                    tasks.push(Task::Edge(body_out, body_in));
                    tasks.push(Task::Build(inner, body_in, body_out));
                }
            }
        }
    }

    fn compile(mut self, regex: &Regex) -> Automaton {
        let initial = self.add_state("start");
        let accepting = self.add_state("accept");
        self.build_into(regex, initial, accepting);

        log::debug!("compiled {regex} into {} states", self.states.len());

        Automaton {
            regex: regex.clone(),
            states: self.states,
            initial,
            accepting,
        }
    }
}

impl Regex {
    pub fn compile(&self) -> Automaton {
        RegexCompiler::new().compile(self)
    }
}
