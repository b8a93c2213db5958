//! Pattern matchers and their match records.
//!
//! The [`Matcher`] trait is the main interface for finding dictionary words in
//! a text. The following implementations are provided:
//!  - [`TrieAutomaton`](crate::TrieAutomaton), which scans the text once using
//!    a trie with failure links. The main matcher implementation of this crate.
//!  - [`NaiveManyMatcher`], which checks every pattern at every position.
//!    Mostly useful as a benchmark and for testing.

mod naive;

use derive_more::{From, Into};
use std::fmt::{self, Debug};

pub use self::naive::NaiveManyMatcher;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identify patterns with IDs.
///
/// IDs are assigned to distinct words in order of first insertion.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, From, Into, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PatternID(pub usize);

impl Debug for PatternID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for PatternID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Find occurrences of dictionary words in a text of symbols `C`.
pub trait Matcher<C> {
    /// Find all occurrences of all patterns in `text`.
    ///
    /// Matches are ordered by the position at which they end, and for a
    /// single end position from the longest to the shortest pattern.
    fn find_matches<'a>(&'a self, text: &'a [C]) -> impl Iterator<Item = PatternMatch> + 'a;
}

/// An occurrence of a pattern in the text.
///
/// Matches are plain values: they borrow neither the text nor the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PatternMatch {
    /// The matching pattern ID.
    pub pattern: PatternID,

    /// Index in the text of the first symbol of the occurrence.
    pub start: usize,
}

impl PatternMatch {
    /// Create a new pattern match result.
    pub fn new(pattern: PatternID, start: usize) -> Self {
        Self { pattern, start }
    }
}
