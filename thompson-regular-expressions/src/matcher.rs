//! Contains the [`Matcher`], which simulates an [`Automaton`] on its input by tracking
//! every state it could be in at once.

use crate::{Automaton, RegexMatcher, StateID};
use std::collections::{HashSet, VecDeque};

pub struct Matcher<'a> {
    automaton: &'a Automaton,
    frontier: HashSet<StateID>,
}

impl Automaton {
    /// A matcher positioned before the first input character.
    pub fn matcher(&self) -> Matcher<'_> {
        let mut frontier = HashSet::new();
        frontier.insert(self.initial);

        let mut matcher = Matcher {
            automaton: self,
            frontier,
        };
        matcher.close();
        matcher
    }

    /// Returns true if the automaton accepts the whole of `input`.
    pub fn matches(&self, input: impl AsRef<str>) -> bool {
        self.matcher().accepts(input.as_ref().chars())
    }
}

impl Matcher<'_> {
    /// Extends the frontier with every state reachable through epsilon transitions only.
    fn close(&mut self) {
        let mut work_list: VecDeque<StateID> = self.frontier.iter().copied().collect();

        while let Some(id) = work_list.pop_front() {
            let Some(state) = self.automaton.state(id) else {
                continue;
            };
            for target in state.epsilon_transitions() {
                if self.frontier.insert(target) {
                    work_list.push_back(target);
                }
            }
        }
    }

    /// The states the automaton could currently be in, in ascending order.
    pub fn frontier(&self) -> Vec<StateID> {
        let mut frontier: Vec<_> = self.frontier.iter().copied().collect();
        frontier.sort_unstable();
        frontier
    }
}

impl RegexMatcher for Matcher<'_> {
    fn accept(&mut self, inp: char) {
        let mut next = HashSet::new();
        for id in &self.frontier {
            let Some(state) = self.automaton.state(*id) else {
                continue;
            };
            for transition in state.transitions() {
                if transition.guard.accepts(inp) {
                    next.insert(transition.target);
                }
            }
        }

        self.frontier = next;
        self.close();

        log::trace!("after {inp:?}: {} active states", self.frontier.len());
    }

    fn is_accepting(&self) -> bool {
        self.frontier.contains(&self.automaton.accepting)
    }

    fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }
}
