//! Core `TrieAutomaton` data structure and builder.
//!
//! Use [AutomatonBuilder] to construct an automaton from a list of words, then
//! [TrieAutomaton::run] to scan a text.

mod builder;
mod traversal;
mod view;

use petgraph::graph::{DiGraph, NodeIndex};

use std::fmt::{self, Debug};

use derive_more::{From, Into};

use crate::dot::{self, DisplaySymbol, DotConfig};
use crate::{PatternID, Symbol};
pub use builder::AutomatonBuilder;
pub use traversal::AutomatonTraverser;

/// The underlying petgraph type for the TrieAutomaton.
///
/// Edges are the trie transitions, labelled by one symbol each. Failure links
/// are stored on the states and are not edges of the graph.
type TrieGraph<C> = DiGraph<State, C>;

/// A multi-pattern matcher built from a trie with failure links.
///
/// Every state represents a prefix of some dictionary word, the root being the
/// empty prefix. The trie edges own the states (through the graph arena);
/// failure and output links are plain state IDs layered on top.
///
/// The automaton is immutable once built. Scanning only borrows it, so it can
/// be shared by any number of concurrent scans.
///
/// ## Type parameters
/// - C: Symbols of the words and texts
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrieAutomaton<C> {
    /// The trie
    graph: TrieGraph<C>,
    /// The root of the trie
    root: StateID,
    /// The distinct words, indexed by pattern ID
    patterns: Vec<Vec<C>>,
}

impl<C: Symbol> Default for TrieAutomaton<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbol> TrieAutomaton<C> {
    /// An empty automaton, matching nothing.
    ///
    /// Use the [AutomatonBuilder] to construct an automaton from a list of
    /// words.
    pub fn new() -> Self {
        let mut graph = TrieGraph::default();
        let root = graph.add_node(State::default());
        Self {
            graph,
            root: root.into(),
            patterns: Vec::new(),
        }
    }

    /// Build an automaton matching `patterns`.
    ///
    /// Duplicate words are merged; the `n`-th distinct word gets
    /// `PatternID(n)`.
    pub fn from_patterns<W>(patterns: impl IntoIterator<Item = W>) -> Self
    where
        W: IntoIterator<Item = C>,
    {
        AutomatonBuilder::from_patterns(patterns).finish()
    }

    /// Get its dot string representation, without failure edges.
    pub fn dot_string(&self) -> String
    where
        C: DisplaySymbol,
    {
        dot::to_dot(self, &DotConfig::default())
    }

    /// The word with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not assigned by this automaton.
    pub fn pattern(&self, id: PatternID) -> &[C] {
        &self.patterns[id.0]
    }

    /// All distinct words, in the order of their IDs.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = (PatternID, &[C])> + '_ {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (PatternID(i), p.as_slice()))
    }

    /// Get the number of distinct words in the automaton
    pub fn n_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Get the number of states in the automaton
    pub fn n_states(&self) -> usize {
        self.graph.node_count()
    }
}

impl TrieAutomaton<char> {
    /// Build an automaton from string words.
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        words
            .into_iter()
            .fold(AutomatonBuilder::new(), |mut builder, word| {
                builder.add_pattern(word.as_ref().chars());
                builder
            })
            .finish()
    }

    /// The word with the given ID, as a string.
    pub fn pattern_str(&self, id: PatternID) -> String {
        self.pattern(id).iter().collect()
    }
}

impl<C: Symbol + DisplaySymbol> Debug for TrieAutomaton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dot_string())
    }
}

/// A state ID in a trie automaton
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateID(NodeIndex);

impl StateID {
    /// The position of the state in the automaton, between `0` and
    /// [`TrieAutomaton::n_states`].
    pub fn index(self) -> usize {
        self.0.index()
    }
}

/// A node in the automaton
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct State {
    /// The word that ends at this state, if any.
    pattern: Option<PatternID>,
    /// The state of the longest proper suffix that is also a prefix in the
    /// trie.
    ///
    /// None at the root, and before failure links are computed.
    fail: Option<StateID>,
    /// The first state along the failure chain, excluding the root, at which
    /// a word ends.
    output: Option<StateID>,
    /// The length of the prefix.
    depth: usize,
}
