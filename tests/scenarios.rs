use dictmatch::TrieAutomaton;
use itertools::Itertools;
use rstest::rstest;

fn find(words: &[&str], text: &str) -> Vec<(String, usize)> {
    let automaton = TrieAutomaton::from_words(words);
    automaton
        .find_in_str(text)
        .map(|m| (automaton.pattern_str(m.pattern), m.start))
        .collect()
}

fn owned(matches: &[(&str, usize)]) -> Vec<(String, usize)> {
    matches.iter().map(|&(w, i)| (w.to_string(), i)).collect()
}

#[test]
fn suffix_inside_longer_word() {
    let found = find(&["he", "she", "his", "hers"], "ahishers");
    for expected in owned(&[("his", 1), ("he", 4), ("hers", 4)]) {
        assert!(found.contains(&expected), "missing {expected:?}");
    }
    // "she" also occurs, ending together with "he"
    assert_eq!(
        found,
        owned(&[("his", 1), ("she", 3), ("he", 4), ("hers", 4)])
    );
}

#[rstest]
#[case::overlapping(&["ab", "bc"], "xabcy", &[("ab", 1), ("bc", 2)])]
#[case::empty_dictionary(&[], "anything at all", &[])]
#[case::empty_text(&["a"], "", &[])]
#[case::duplicate_word(&["cat", "cat"], "cat", &[("cat", 0)])]
#[case::absent_symbols(&["abc"], "xyz", &[])]
#[case::repeated(&["aa"], "aaaa", &[("aa", 0), ("aa", 1), ("aa", 2)])]
fn scenarios(#[case] words: &[&str], #[case] text: &str, #[case] expected: &[(&str, usize)]) {
    assert_eq!(find(words, text), owned(expected));
}

#[test]
fn shared_between_threads() {
    let automaton = TrieAutomaton::from_words(["fox", "ox", "the"]);
    let texts = ["the fox", "oxen", "nothing"];
    let automaton = &automaton;
    let results = std::thread::scope(|s| {
        texts
            .iter()
            .map(|text| s.spawn(move || automaton.find_in_str(text).count()))
            .collect_vec()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect_vec()
    });
    assert_eq!(results, vec![3, 1, 0]);
}
