#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod automaton;
pub mod dictionary;
pub mod dot;
pub mod matcher;

use std::fmt::Debug;
use std::hash::Hash;

pub use automaton::{AutomatonBuilder, AutomatonTraverser, StateID, TrieAutomaton};
pub use dot::{DisplaySymbol, DotConfig};
pub use matcher::{Matcher, NaiveManyMatcher, PatternID, PatternMatch};

/// Symbols that words and texts are made of.
///
/// Automatically implemented for any type satisfying the bounds (`char`,
/// `u8`, `u16`, ...).
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
