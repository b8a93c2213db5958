//! Loading dictionaries from word lists.
//!
//! A word list holds one word per line. Line endings (`\n` or `\r\n`) are not
//! part of the words and blank lines are skipped; the empty word can only be
//! added through [`AutomatonBuilder::add_pattern`](crate::AutomatonBuilder::add_pattern).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading a word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list file could not be opened.
    #[error("Cannot open word list {path}: {source}")]
    Io {
        /// The path of the word list
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
    /// A line could not be read, e.g. because it is not valid UTF-8.
    #[error("Cannot read word list at line {line}: {source}")]
    Read {
        /// The 1-based line number
        line: usize,
        /// The underlying error
        source: io::Error,
    },
}

/// Read the words of a word list, in order.
///
/// Duplicates are kept; they are merged when the automaton is built.
pub fn read_words(reader: impl BufRead) -> Result<Vec<String>, DictionaryError> {
    let mut words = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Read { line: i + 1, source })?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Read the words of the word list at `path`.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_words(BufReader::new(file))
}
