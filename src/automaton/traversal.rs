use std::str::Chars;

use crate::{Matcher, PatternMatch, Symbol};

use super::{StateID, TrieAutomaton};

impl<C: Symbol> TrieAutomaton<C> {
    /// Run the automaton on `text`.
    ///
    /// The scan is lazy: symbols are only read from `text` when the matches
    /// ending at the previous positions have all been returned. Each call
    /// starts a fresh scan, the automaton itself is never modified.
    pub fn run<I>(&self, text: I) -> AutomatonTraverser<'_, C, I::IntoIter>
    where
        I: IntoIterator<Item = C>,
    {
        AutomatonTraverser::new(self, text.into_iter())
    }
}

impl TrieAutomaton<char> {
    /// Run the automaton on the characters of `text`.
    ///
    /// Start indices of the matches count characters, not bytes.
    pub fn find_in_str<'a>(&'a self, text: &'a str) -> AutomatonTraverser<'a, char, Chars<'a>> {
        self.run(text.chars())
    }
}

impl<C: Symbol> Matcher<C> for TrieAutomaton<C> {
    fn find_matches<'a>(&'a self, text: &'a [C]) -> impl Iterator<Item = PatternMatch> + 'a {
        self.run(text.iter().copied())
    }
}

/// An iterator over the matches of a trie automaton in a text.
///
/// Matches are returned in the order of the position where they end; for a
/// single end position, from the longest to the shortest word.
///
/// ## Type parameters
///  - C: symbols of the text
///  - I: iterator over the text
#[derive(Clone)]
pub struct AutomatonTraverser<'a, C, I> {
    automaton: &'a TrieAutomaton<C>,
    text: I,
    /// The state after reading the symbols consumed so far
    state: StateID,
    /// The number of symbols consumed so far
    position: usize,
    /// The next state whose word must be reported before reading on
    pending: Option<StateID>,
}

impl<'a, C: Symbol, I> AutomatonTraverser<'a, C, I> {
    fn new(automaton: &'a TrieAutomaton<C>, text: I) -> Self {
        let root = automaton.root();
        // The empty word is reported once, before any symbol is read
        let pending = automaton.pattern_at(root).map(|_| root);
        Self {
            automaton,
            text,
            state: root,
            position: 0,
            pending,
        }
    }

    /// The number of symbols read from the text so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The first state at which a word ends, among `state` and its output
    /// chain. The root only ends the empty word and is never reported here.
    fn first_output(&self, state: StateID) -> Option<StateID> {
        if state != self.automaton.root() && self.automaton.pattern_at(state).is_some() {
            Some(state)
        } else {
            self.automaton.output(state)
        }
    }
}

impl<'a, C: Symbol, I: Iterator<Item = C>> Iterator for AutomatonTraverser<'a, C, I> {
    type Item = PatternMatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(state) = self.pending {
                self.pending = self.automaton.output(state);
                let Some(id) = self.automaton.pattern_at(state) else {
                    continue;
                };
                let start = self.position - self.automaton.depth(state);
                return Some(PatternMatch::new(id, start));
            }
            let c = self.text.next()?;
            self.state = self.automaton.next_state(self.state, c);
            self.position += 1;
            self.pending = self.first_output(self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use itertools::Itertools;
    use rstest::rstest;

    use super::*;
    use crate::automaton::tests::automaton;
    use crate::PatternID;

    fn matches(automaton: &TrieAutomaton<char>, text: &str) -> Vec<(String, usize)> {
        automaton
            .find_in_str(text)
            .map(|m| (automaton.pattern_str(m.pattern), m.start))
            .collect()
    }

    #[rstest]
    fn test_classic_example(automaton: TrieAutomaton<char>) {
        assert_eq!(
            matches(&automaton, "ahishers"),
            vec![
                ("his".to_string(), 1),
                ("she".to_string(), 3),
                ("he".to_string(), 4),
                ("hers".to_string(), 4),
            ]
        );
    }

    #[rstest]
    #[case(&["ab", "bc"], "xabcy", &[("ab", 1), ("bc", 2)])]
    #[case(&["he", "she"], "she", &[("she", 0), ("he", 1)])]
    #[case(
        &["a", "aa", "aaa"],
        "aaa",
        &[("a", 0), ("aa", 0), ("a", 1), ("aaa", 0), ("aa", 1), ("a", 2)]
    )]
    #[case(&["abcd", "bc", "c"], "abcx", &[("bc", 1), ("c", 2)])]
    #[case(&["a"], "", &[])]
    #[case(&[], "abc", &[])]
    #[case(&["", "b"], "ab", &[("", 0), ("b", 1)])]
    #[case(&[""], "", &[("", 0)])]
    fn test_matches(
        #[case] words: &[&str],
        #[case] text: &str,
        #[case] expected: &[(&str, usize)],
    ) {
        let automaton = TrieAutomaton::from_words(words);
        let expected = expected
            .iter()
            .map(|&(w, i)| (w.to_string(), i))
            .collect_vec();
        assert_eq!(matches(&automaton, text), expected);
    }

    #[test]
    fn test_unicode_positions_count_chars() {
        let automaton = TrieAutomaton::from_words(["ße", "e"]);
        assert_eq!(
            matches(&automaton, "aßeé"),
            vec![("ße".to_string(), 1), ("e".to_string(), 2)]
        );
    }

    #[test]
    fn test_bytes() {
        let words = [&b"\x00\xff"[..], &b"\xff"[..]];
        let automaton = TrieAutomaton::from_patterns(words.map(|w| w.to_vec()));
        let found = automaton.find_matches(&b"\xff\x00\xff"[..]).collect_vec();
        assert_eq!(
            found,
            vec![
                PatternMatch::new(PatternID(1), 0),
                PatternMatch::new(PatternID(0), 1),
                PatternMatch::new(PatternID(1), 2),
            ]
        );
    }

    #[rstest]
    fn test_restartable(automaton: TrieAutomaton<char>) {
        let text = "ushers and his hershey";
        let before = automaton.n_states();
        let first = automaton.find_in_str(text).collect_vec();
        let second = automaton.find_in_str(text).collect_vec();
        assert_eq!(first, second);
        assert_eq!(automaton.n_states(), before);
    }

    #[rstest]
    fn test_lazy(automaton: TrieAutomaton<char>) {
        let mut traverser = automaton.find_in_str("she sells");
        let first = traverser.next().unwrap();
        assert_eq!(automaton.pattern_str(first.pattern), "she");
        // "he" ends at the same position: nothing more has been read
        assert_eq!(traverser.position(), 3);
        let second = traverser.next().unwrap();
        assert_eq!(automaton.pattern_str(second.pattern), "he");
        assert_eq!(traverser.next(), None);
        assert_eq!(traverser.position(), 9);
    }

    #[rstest]
    fn test_concurrent_scans(automaton: TrieAutomaton<char>) {
        let texts = ["ahishers", "she", "hishe", "nothing here"];
        let expected = texts
            .iter()
            .map(|t| automaton.find_in_str(t).collect_vec())
            .collect_vec();
        let found = thread::scope(|s| {
            let handles = texts
                .iter()
                .map(|t| {
                    let automaton = &automaton;
                    s.spawn(move || automaton.find_in_str(t).collect_vec())
                })
                .collect_vec();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect_vec()
        });
        assert_eq!(found, expected);
    }
}
