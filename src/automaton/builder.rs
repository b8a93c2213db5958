use std::collections::VecDeque;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{PatternID, Symbol};

use super::{State, StateID, TrieAutomaton};

/// Create trie automata from lists of words.
///
/// Words are inserted into the trie with [`AutomatonBuilder::add_pattern`];
/// the failure links are only computed once all words are known, in
/// [`AutomatonBuilder::finish`].
#[derive(Clone)]
pub struct AutomatonBuilder<C> {
    /// The automaton being built, without failure links
    automaton: TrieAutomaton<C>,
    /// Total number of symbols added, duplicates included
    total_len: usize,
}

impl<C: Symbol> AutomatonBuilder<C> {
    /// Construct an empty automaton builder.
    pub fn new() -> Self {
        Self {
            automaton: TrieAutomaton::new(),
            total_len: 0,
        }
    }

    /// Construct an automaton builder from a list of words.
    pub fn from_patterns<W>(patterns: impl IntoIterator<Item = W>) -> Self
    where
        W: IntoIterator<Item = C>,
    {
        patterns
            .into_iter()
            .fold(Self::new(), |mut builder, pattern| {
                builder.add_pattern(pattern);
                builder
            })
    }

    /// Add a word to the automaton builder.
    ///
    /// Returns the ID of the word. Adding a word twice returns the ID it was
    /// given the first time, and leaves the trie unchanged.
    pub fn add_pattern(&mut self, pattern: impl IntoIterator<Item = C>) -> PatternID {
        let word = pattern.into_iter().collect_vec();
        self.total_len += word.len();

        let mut state = self.automaton.root();
        for &c in &word {
            state = match self.automaton.child(state, c) {
                Some(child) => child,
                None => self.automaton.add_child(state, c),
            };
        }

        if let Some(id) = self.automaton.pattern_at(state) {
            trace!(%id, "pattern already in dictionary");
            return id;
        }
        let id = PatternID(self.automaton.patterns.len());
        self.automaton.graph[state.0].pattern = Some(id);
        self.automaton.patterns.push(word);
        id
    }

    /// The number of distinct words added so far.
    pub fn n_patterns(&self) -> usize {
        self.automaton.n_patterns()
    }

    /// Construct the automaton.
    ///
    /// Computes the failure and output links of every state, in breadth-first
    /// order from the root.
    pub fn finish(mut self) -> TrieAutomaton<C> {
        self.link_failures();
        debug!(
            n_states = self.automaton.n_states(),
            n_patterns = self.automaton.n_patterns(),
            total_len = self.total_len,
            "built trie automaton"
        );
        self.automaton
    }

    /// Set the `fail` and `output` links of all non-root states.
    ///
    /// The failure link of a state only depends on the failure links of
    /// strictly shallower states, which a breadth-first traversal has
    /// already computed. Every child is enqueued, whether or not it ends a
    /// word.
    fn link_failures(&mut self) {
        let root = self.automaton.root();
        let mut queue = VecDeque::from([root]);
        while let Some(parent) = queue.pop_front() {
            let children = self.automaton.children(parent).collect_vec();
            let parent_fail = self.automaton.fail(parent);
            for (c, child) in children {
                let fail = self.fallback(parent_fail, c);
                let output = if fail != root && self.automaton.pattern_at(fail).is_some() {
                    Some(fail)
                } else {
                    self.automaton.output(fail)
                };
                let state = &mut self.automaton.graph[child.0];
                state.fail = Some(fail);
                state.output = output;
                queue.push_back(child);
            }
        }
    }

    /// Follow failure links from `start` until a state with a `c` transition
    /// is found, and return the target of that transition.
    ///
    /// Returns the root if the failure chain is exhausted.
    fn fallback(&self, start: Option<StateID>, c: C) -> StateID {
        let mut state = start;
        while let Some(s) = state {
            if let Some(next) = self.automaton.child(s, c) {
                return next;
            }
            state = self.automaton.fail(s);
        }
        self.automaton.root()
    }
}

impl<C: Symbol> TrieAutomaton<C> {
    /// Add a new state below `parent`, reached by `c`.
    fn add_child(&mut self, parent: StateID, c: C) -> StateID {
        let depth = self.depth(parent) + 1;
        let child = self.graph.add_node(State {
            depth,
            ..State::default()
        });
        self.graph.add_edge(parent.0, child, c);
        child.into()
    }
}

impl<C: Symbol> Default for AutomatonBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbol, W: IntoIterator<Item = C>> FromIterator<W> for AutomatonBuilder<C> {
    fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
        Self::from_patterns(iter)
    }
}
