//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary and loading of
//! external line-delimited word lists.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
