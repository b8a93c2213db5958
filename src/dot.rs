//! Graphviz export of trie automata.
//!
//! Every state becomes a vertex labelled with the word it ends (or `.`), and
//! every trie transition an edge labelled with its symbol. Failure links can
//! be added as dashed edges, see [`DotConfig`].
//!
//! Only the read-only traversal methods of [`TrieAutomaton`] are used.

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{Symbol, TrieAutomaton};

/// Label used for states that end no word.
const NO_PATTERN: &str = ".";

/// Symbols that can be printed in a DOT label.
pub trait DisplaySymbol {
    /// The symbol as it should appear in a label, before DOT escaping.
    fn fmt_symbol(&self) -> String;
}

impl DisplaySymbol for char {
    fn fmt_symbol(&self) -> String {
        if self.is_control() {
            format!("\\x{:02x}", u32::from(*self))
        } else {
            self.to_string()
        }
    }
}

impl DisplaySymbol for u8 {
    fn fmt_symbol(&self) -> String {
        if self.is_ascii_graphic() || *self == b' ' {
            char::from(*self).to_string()
        } else {
            format!("\\x{self:02x}")
        }
    }
}

/// Configuration of the DOT export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotConfig {
    /// Also draw the failure link of every non-root state, as a dashed edge.
    pub fail_edges: bool,
}

/// A [`Display`] wrapper writing an automaton in DOT format.
pub struct Dot<'a, C> {
    automaton: &'a TrieAutomaton<C>,
    config: DotConfig,
}

impl<'a, C> Dot<'a, C> {
    /// Wrap `automaton` for display with the given configuration.
    pub fn with_config(automaton: &'a TrieAutomaton<C>, config: DotConfig) -> Self {
        Self { automaton, config }
    }
}

/// The DOT representation of `automaton`.
pub fn to_dot<C: Symbol + DisplaySymbol>(automaton: &TrieAutomaton<C>, config: &DotConfig) -> String {
    Dot::with_config(automaton, *config).to_string()
}

impl<C: Symbol + DisplaySymbol> Display for Dot<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let automaton = self.automaton;
        writeln!(f, "digraph trie {{")?;
        writeln!(f, "  node [shape=circle];")?;
        for state in automaton.states() {
            let label = match automaton.pattern_at(state) {
                Some(id) => automaton.pattern(id).iter().map(|c| c.fmt_symbol()).join(""),
                None => NO_PATTERN.to_string(),
            };
            writeln!(f, "  node_{} [label=\"{}\"];", state.index(), escape(&label))?;
        }
        for (src, c, dst) in automaton.transitions() {
            writeln!(
                f,
                "  node_{} -> node_{} [label=\"{}\"];",
                src.index(),
                dst.index(),
                escape(&c.fmt_symbol())
            )?;
        }
        if self.config.fail_edges {
            for state in automaton.states() {
                if let Some(fail) = automaton.fail(state) {
                    writeln!(
                        f,
                        "  node_{} -> node_{} [style=dashed];",
                        state.index(),
                        fail.index()
                    )?;
                }
            }
        }
        writeln!(f, "}}")
    }
}

/// Escape a string for use inside a double-quoted DOT label.
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
