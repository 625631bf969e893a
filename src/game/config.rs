//! Game configuration

/// Number of accepted guesses before a game is lost
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Configuration for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_turns: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Override the turn limit
    ///
    /// A limit of zero is raised to one so every game allows a guess.
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = if max_turns == 0 { 1 } else { max_turns };
        self
    }
}
