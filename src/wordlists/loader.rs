//! Word list loading utilities
//!
//! Loads a dictionary from a line-delimited file or from the embedded list.

use super::Dictionary;
use crate::error::GameError;
use std::fs;
use std::path::Path;

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    Embedded,
    /// A text file with one word per line
    File(String),
}

impl WordListSource {
    /// Interpret a `--wordlist` argument
    ///
    /// `embedded` selects the built-in list; anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(path.to_string()),
        }
    }

    /// Load the dictionary from this source
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DictionaryUnavailable`] if a file source cannot be read.
    pub fn load(&self) -> Result<Dictionary, GameError> {
        match self {
            Self::Embedded => Ok(Dictionary::embedded()),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Load a dictionary from a file
///
/// Each line is trimmed and lowercased; lines that are not plain words are skipped.
///
/// # Errors
///
/// Returns [`GameError::DictionaryUnavailable`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::DictionaryUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Dictionary::from_lines(content.lines()))
}
