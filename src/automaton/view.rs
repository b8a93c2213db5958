//! Read-only traversal of the automaton.
//!
//! This is everything an exporter or a test needs to inspect the trie and its
//! failure links; none of these methods allocate states or follow ownership.
use std::iter;

use petgraph::{visit::EdgeRef, Direction};

use crate::{PatternID, Symbol};

use super::{State, StateID, TrieAutomaton};

impl<C: Symbol> TrieAutomaton<C> {
    /// Get the root state ID
    pub fn root(&self) -> StateID {
        self.root
    }

    /// All states, in the order they were created.
    pub fn states(&self) -> impl Iterator<Item = StateID> + '_ {
        self.graph.node_indices().map(StateID)
    }

    /// The trie transitions out of `state`, with their symbol.
    pub fn children(&self, state: StateID) -> impl Iterator<Item = (C, StateID)> + '_ {
        self.graph
            .edges(state.0)
            .map(|e| (*e.weight(), StateID(e.target())))
    }

    /// The trie transition out of `state` labelled `c`, if any.
    pub fn child(&self, state: StateID, c: C) -> Option<StateID> {
        self.graph
            .edges(state.0)
            .find(|e| *e.weight() == c)
            .map(|e| StateID(e.target()))
    }

    /// The parent of `state` in the trie, along with the symbol leading to
    /// `state`. None at the root.
    pub fn parent(&self, state: StateID) -> Option<(StateID, C)> {
        self.graph
            .edges_directed(state.0, Direction::Incoming)
            .next()
            .map(|e| (StateID(e.source()), *e.weight()))
    }

    /// The failure link of `state`.
    ///
    /// None at the root: there is no shorter prefix to fall back to.
    pub fn fail(&self, state: StateID) -> Option<StateID> {
        self.state(state).fail
    }

    /// The closest state along the failure chain of `state` that ends a word,
    /// not counting `state` itself nor the root.
    pub fn output(&self, state: StateID) -> Option<StateID> {
        self.state(state).output
    }

    /// The word ending at `state`, if any.
    pub fn pattern_at(&self, state: StateID) -> Option<PatternID> {
        self.state(state).pattern
    }

    /// The length of the prefix represented by `state`.
    pub fn depth(&self, state: StateID) -> usize {
        self.state(state).depth
    }

    /// The prefix represented by `state`, i.e. the symbols on the trie path
    /// from the root to `state`.
    pub fn prefix(&self, state: StateID) -> Vec<C> {
        let mut prefix = iter::successors(self.parent(state), |&(p, _)| self.parent(p))
            .map(|(_, c)| c)
            .collect::<Vec<_>>();
        prefix.reverse();
        prefix
    }

    /// The state representing `prefix`, if `prefix` is a prefix of some word.
    pub fn find_state(&self, prefix: impl IntoIterator<Item = C>) -> Option<StateID> {
        prefix
            .into_iter()
            .try_fold(self.root(), |state, c| self.child(state, c))
    }

    /// The state reached from `state` after reading `c`.
    ///
    /// Follows failure links until a `c` transition exists; falls back to the
    /// root if none does.
    pub fn next_state(&self, state: StateID, c: C) -> StateID {
        let mut state = state;
        loop {
            if let Some(next) = self.child(state, c) {
                return next;
            }
            match self.fail(state) {
                Some(fail) => state = fail,
                None => return self.root(),
            }
        }
    }

    /// All trie transitions as `(source, symbol, target)`, in the order they
    /// were created.
    pub(crate) fn transitions(&self) -> impl Iterator<Item = (StateID, C, StateID)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (StateID(e.source()), *e.weight(), StateID(e.target())))
    }

    fn state(&self, state: StateID) -> &State {
        &self.graph[state.0]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rstest::rstest;

    use super::*;
    use crate::automaton::tests::automaton;

    #[rstest]
    fn test_prefix_and_parent(automaton: TrieAutomaton<char>) {
        let hers = automaton.find_state("hers".chars()).unwrap();
        assert_eq!(automaton.prefix(hers), "hers".chars().collect_vec());
        let (her, c) = automaton.parent(hers).unwrap();
        assert_eq!(c, 's');
        assert_eq!(automaton.prefix(her), "her".chars().collect_vec());
        assert_eq!(automaton.parent(automaton.root()), None);
        assert!(automaton.prefix(automaton.root()).is_empty());
    }

    #[rstest]
    fn test_every_prefix_is_distinct(automaton: TrieAutomaton<char>) {
        let prefixes = automaton.states().map(|s| automaton.prefix(s)).collect_vec();
        assert_eq!(prefixes.iter().unique().count(), automaton.n_states());
        for (state, prefix) in automaton.states().zip(&prefixes) {
            assert_eq!(automaton.find_state(prefix.iter().copied()), Some(state));
        }
    }

    #[rstest]
    fn test_children(automaton: TrieAutomaton<char>) {
        let h = automaton.child(automaton.root(), 'h').unwrap();
        let labels = automaton.children(h).map(|(c, _)| c).sorted().collect_vec();
        assert_eq!(labels, vec!['e', 'i']);
        assert_eq!(
            automaton.children(automaton.root()).count(),
            2,
            "root has 'h' and 's'"
        );
    }

    #[rstest]
    fn test_next_state(automaton: TrieAutomaton<char>) {
        let state = |p: &str| automaton.find_state(p.chars()).unwrap();
        // Mismatch after "sh" falls back to "h", which has an 'i' transition
        assert_eq!(automaton.next_state(state("sh"), 'i'), state("hi"));
        assert_eq!(automaton.next_state(state("she"), 'r'), state("her"));
        assert_eq!(automaton.next_state(state("she"), 'x'), automaton.root());
        assert_eq!(automaton.next_state(automaton.root(), 'x'), automaton.root());
    }
}
