//! A brute-force matcher checking every pattern at every position.
//!
//! This matcher is used as a baseline in benchmarking and as a reference in
//! tests.
use std::cmp::Reverse;

use itertools::Itertools;

use crate::{HashMap, Symbol};

use super::{Matcher, PatternID, PatternMatch};

/// A simple matcher that compares each pattern at every position of the text.
///
/// Pattern IDs are assigned exactly as by
/// [`AutomatonBuilder`](crate::AutomatonBuilder), so that results can be
/// compared directly.
#[derive(Debug, Clone)]
pub struct NaiveManyMatcher<C> {
    /// The distinct patterns, indexed by ID
    patterns: Vec<Vec<C>>,
    /// Pattern IDs sorted from the longest to the shortest pattern
    by_length: Vec<PatternID>,
}

impl<C: Symbol> NaiveManyMatcher<C> {
    /// Create a matcher from a list of words.
    pub fn from_patterns<W>(patterns: impl IntoIterator<Item = W>) -> Self
    where
        W: IntoIterator<Item = C>,
    {
        let mut ids: HashMap<Vec<C>, PatternID> = HashMap::default();
        let mut distinct = Vec::new();
        for word in patterns {
            let word = word.into_iter().collect_vec();
            if !ids.contains_key(&word) {
                ids.insert(word.clone(), PatternID(distinct.len()));
                distinct.push(word);
            }
        }
        let by_length = (0..distinct.len())
            .map(PatternID)
            .sorted_by_key(|id| Reverse(distinct[id.0].len()))
            .collect_vec();
        Self {
            patterns: distinct,
            by_length,
        }
    }

    /// The word with the given ID.
    pub fn pattern(&self, id: PatternID) -> &[C] {
        &self.patterns[id.0]
    }

    /// The number of distinct patterns.
    pub fn n_patterns(&self) -> usize {
        self.patterns.len()
    }

    fn matches_ending_at<'a>(
        &'a self,
        text: &'a [C],
        end: usize,
    ) -> impl Iterator<Item = PatternMatch> + 'a {
        self.by_length.iter().filter_map(move |&id| {
            let word = self.pattern(id);
            let start = end.checked_sub(word.len())?;
            (!word.is_empty() && text[start..end] == *word).then_some(PatternMatch::new(id, start))
        })
    }
}

impl<C: Symbol> Matcher<C> for NaiveManyMatcher<C> {
    fn find_matches<'a>(&'a self, text: &'a [C]) -> impl Iterator<Item = PatternMatch> + 'a {
        // The empty word is reported once, before any symbol is read
        let empty = self
            .by_length
            .iter()
            .filter(move |id| self.pattern(**id).is_empty())
            .map(|&id| PatternMatch::new(id, 0));
        let rest = (1..=text.len()).flat_map(move |end| self.matches_ending_at(text, end));
        empty.chain(rest)
    }
}
