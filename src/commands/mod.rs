//! Command implementations

pub mod check;
pub mod simple;

pub use check::{check_words, run_check};
pub use simple::{play_simple, run_simple};

use crate::game::{DEFAULT_MAX_TURNS, GameConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by the interactive game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    /// Word length to play; prompt for one when `None`
    pub word_length: Option<usize>,
    pub max_turns: usize,
    /// Seed for reproducible answers
    pub seed: Option<u64>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            word_length: None,
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
        }
    }
}

impl PlayOptions {
    /// Game configuration for a chosen word length
    #[must_use]
    pub const fn config(&self, word_length: usize) -> GameConfig {
        GameConfig::new(word_length).with_max_turns(self.max_turns)
    }

    /// Random source for picking answers
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
