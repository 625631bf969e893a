//! Game session state machine
//!
//! Owns the secret answer and drives turns from `AwaitingGuess` to `Won` or `Lost`.

use super::GameConfig;
use crate::core::{GuessRecord, LetterKnowledge, Word};
use crate::error::GameError;
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Minimum number of candidate words for a playable game
pub const MIN_PLAYABLE_WORDS: usize = 2;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Lost,
}

impl GameState {
    /// Whether no further guesses are accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game: secret answer, guess history and letter knowledge
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    valid_words: FxHashSet<String>,
    answer: Word,
    answer_counts: FxHashMap<u8, usize>,
    guesses: Vec<GuessRecord>,
    knowledge: LetterKnowledge,
    remaining_turns: usize,
    state: GameState,
}

impl GameSession {
    /// Start a game with an answer drawn uniformly from the dictionary
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWordSize`] if the dictionary has fewer than
    /// two words of the configured length.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::game::{GameConfig, GameSession, GameState};
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["crane", "slate", "cat"]);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = GameSession::new(GameConfig::new(5), &dictionary, &mut rng).unwrap();
    ///
    /// assert_eq!(session.state(), GameState::AwaitingGuess);
    /// assert_eq!(session.remaining_turns(), 6);
    /// assert!(GameSession::new(GameConfig::new(3), &dictionary, &mut rng).is_err());
    /// ```
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let valid_words = dictionary.words_of_length(config.word_length);
        let invalid_size = || GameError::InvalidWordSize {
            length: config.word_length,
            available: valid_words.len(),
        };

        if valid_words.len() < MIN_PLAYABLE_WORDS {
            return Err(invalid_size());
        }

        // Sort so a seeded RNG picks the same answer regardless of set order
        let mut pool: Vec<&String> = valid_words.iter().collect();
        pool.sort_unstable();
        let answer = (*pool.choose(rng).ok_or_else(invalid_size)?).clone();

        Self::with_answer(config, valid_words, &answer)
    }

    /// Start a game with a known answer
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWordSize`] if fewer than two valid words have
    /// the configured length, [`GameError::InvalidLength`] if the answer has the
    /// wrong length, or [`GameError::NotInDictionary`] if it is not a valid word.
    pub fn with_answer(
        config: GameConfig,
        valid_words: FxHashSet<String>,
        answer: &str,
    ) -> Result<Self, GameError> {
        // A struct literal can carry a zero turn limit past the builder
        let config = config.with_max_turns(config.max_turns);
        let valid_words: FxHashSet<String> = valid_words
            .into_iter()
            .filter(|word| word.len() == config.word_length)
            .collect();
        if valid_words.len() < MIN_PLAYABLE_WORDS {
            return Err(GameError::InvalidWordSize {
                length: config.word_length,
                available: valid_words.len(),
            });
        }

        let answer = normalize(answer);
        let actual = answer.chars().count();
        if actual != config.word_length {
            return Err(GameError::InvalidLength {
                expected: config.word_length,
                actual,
            });
        }
        if !valid_words.contains(&answer) {
            return Err(GameError::NotInDictionary(answer));
        }
        let answer = Word::new(&answer).map_err(|_| GameError::NotInDictionary(answer.clone()))?;
        let answer_counts = answer.char_counts();

        Ok(Self {
            config,
            valid_words,
            answer,
            answer_counts,
            guesses: Vec::new(),
            knowledge: LetterKnowledge::new(),
            remaining_turns: config.max_turns,
            state: GameState::AwaitingGuess,
        })
    }

    /// Submit the player's next guess
    ///
    /// Input is trimmed and lowercased before validation. A rejected guess
    /// leaves the session untouched and does not use up a turn.
    ///
    /// # Errors
    ///
    /// - [`GameError::SessionTerminated`] if the game is already won or lost
    /// - [`GameError::InvalidLength`] if the guess has the wrong length
    /// - [`GameError::NotInDictionary`] if the guess is not a valid word
    /// - [`GameError::DuplicateGuess`] if the word was already guessed
    pub fn submit_guess(&mut self, input: &str) -> Result<&GuessRecord, GameError> {
        if self.state.is_over() {
            return Err(GameError::SessionTerminated);
        }

        let guess = normalize(input);
        let actual = guess.chars().count();
        if actual != self.config.word_length {
            return Err(GameError::InvalidLength {
                expected: self.config.word_length,
                actual,
            });
        }
        if !self.valid_words.contains(&guess) {
            return Err(GameError::NotInDictionary(guess));
        }
        if self.has_guessed(&guess) {
            return Err(GameError::DuplicateGuess(guess));
        }

        let word = Word::new(&guess).map_err(|_| GameError::NotInDictionary(guess.clone()))?;
        let record = GuessRecord::evaluate_with_counts(&self.answer, &self.answer_counts, word)?;

        self.knowledge.merge(record.letters());
        self.remaining_turns -= 1;
        self.state = if record.is_correct() {
            GameState::Won
        } else if self.remaining_turns == 0 {
            GameState::Lost
        } else {
            GameState::AwaitingGuess
        };

        self.guesses.push(record);
        Ok(&self.guesses[self.guesses.len() - 1])
    }

    fn has_guessed(&self, guess: &str) -> bool {
        self.guesses.iter().any(|record| record.word().text() == guess)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub const fn remaining_turns(&self) -> usize {
        self.remaining_turns
    }

    /// Accepted guesses so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// Number of words that are valid guesses in this game
    #[must_use]
    pub fn valid_word_count(&self) -> usize {
        self.valid_words.len()
    }

    /// The answer, once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&str> {
        self.state.is_over().then(|| self.answer.text())
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "cater", "crane", "slate", "irate", "crate", "grate", "trace", "react",
    ];

    fn word_set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn session(answer: &str) -> GameSession {
        GameSession::with_answer(GameConfig::new(5), word_set(WORDS), answer).unwrap()
    }

    #[test]
    fn new_session_awaits_guess() {
        let game = session("cater");
        assert_eq!(game.state(), GameState::AwaitingGuess);
        assert_eq!(game.remaining_turns(), 6);
        assert!(game.guesses().is_empty());
        assert_eq!(game.valid_word_count(), WORDS.len());
        assert_eq!(game.revealed_answer(), None);
    }

    #[test]
    fn setup_fails_with_single_word_of_length() {
        let dictionary = Dictionary::from_lines(["crane", "cat", "dog"]);
        let mut rng = StdRng::seed_from_u64(1);

        let result = GameSession::new(GameConfig::new(5), &dictionary, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::InvalidWordSize {
                length: 5,
                available: 1
            })
        ));
    }

    #[test]
    fn setup_fails_with_no_words_of_length() {
        let dictionary = Dictionary::from_lines(["crane", "slate"]);
        let mut rng = StdRng::seed_from_u64(1);

        let result = GameSession::new(GameConfig::new(11), &dictionary, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::InvalidWordSize { available: 0, .. })
        ));
    }

    #[test]
    fn setup_picks_answer_from_dictionary() {
        let dictionary = Dictionary::from_lines(WORDS.iter().copied().chain(["cat", "dog"]));
        let mut picked = FxHashSet::default();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = GameSession::new(GameConfig::new(5), &dictionary, &mut rng).unwrap();
            assert_eq!(game.valid_word_count(), WORDS.len());
            assert!(WORDS.contains(&game.answer.text()));
            picked.insert(game.answer.text().to_string());
        }

        assert!(picked.len() > 1);
    }

    #[test]
    fn same_seed_same_answer() {
        let dictionary = Dictionary::from_lines(WORDS.iter().copied());
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            GameSession::new(GameConfig::new(5), &dictionary, &mut rng)
                .unwrap()
                .answer
                .text()
                .to_string()
        };

        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn with_answer_validates_answer() {
        assert!(matches!(
            GameSession::with_answer(GameConfig::new(5), word_set(WORDS), "zebra"),
            Err(GameError::NotInDictionary(_))
        ));
        assert!(matches!(
            GameSession::with_answer(GameConfig::new(5), word_set(WORDS), "cat"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 3
            })
        ));
        assert!(matches!(
            GameSession::with_answer(GameConfig::new(5), word_set(&["crane"]), "crane"),
            Err(GameError::InvalidWordSize { .. })
        ));
    }

    #[test]
    fn guess_of_wrong_length_is_rejected() {
        let mut game = session("cater");

        assert!(matches!(
            game.submit_guess("cat"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 3
            })
        ));
        assert_eq!(game.remaining_turns(), 6);
        assert_eq!(game.state(), GameState::AwaitingGuess);
    }

    #[test]
    fn guess_not_in_dictionary_is_rejected() {
        let mut game = session("cater");

        assert!(matches!(
            game.submit_guess("zzzzz"),
            Err(GameError::NotInDictionary(word)) if word == "zzzzz"
        ));
        assert_eq!(game.remaining_turns(), 6);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn duplicate_guess_is_rejected_without_using_a_turn() {
        let mut game = session("cater");

        game.submit_guess("crane").unwrap();
        assert_eq!(game.remaining_turns(), 5);

        assert!(matches!(
            game.submit_guess("CRANE"),
            Err(GameError::DuplicateGuess(word)) if word == "crane"
        ));
        assert_eq!(game.remaining_turns(), 5);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn guess_input_is_normalized() {
        let mut game = session("cater");

        let record = game.submit_guess("  SLATE\n").unwrap();
        assert_eq!(record.word().text(), "slate");
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let mut game = session("cater");

        let record = game.submit_guess("cater").unwrap();
        assert!(record.is_correct());
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.remaining_turns(), 5);
        assert_eq!(game.revealed_answer(), Some("cater"));
    }

    #[test]
    fn six_misses_lose_and_reveal_answer() {
        let mut game = session("cater");

        for guess in ["crane", "slate", "irate", "crate", "grate"] {
            game.submit_guess(guess).unwrap();
            assert_eq!(game.state(), GameState::AwaitingGuess);
            assert_eq!(game.revealed_answer(), None);
        }
        game.submit_guess("trace").unwrap();

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.remaining_turns(), 0);
        assert_eq!(game.revealed_answer(), Some("cater"));
    }

    #[test]
    fn win_on_last_turn_is_a_win() {
        let mut game = session("cater");

        for guess in ["crane", "slate", "irate", "crate", "grate"] {
            game.submit_guess(guess).unwrap();
        }
        game.submit_guess("cater").unwrap();

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.remaining_turns(), 0);
    }

    #[test]
    fn guesses_after_game_over_are_rejected() {
        let mut game = session("cater");
        game.submit_guess("cater").unwrap();

        assert!(matches!(
            game.submit_guess("crane"),
            Err(GameError::SessionTerminated)
        ));
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn knowledge_accumulates_across_guesses() {
        let mut game = session("cater");

        // c green, r yellow, a yellow, n gray, e yellow
        game.submit_guess("crane").unwrap();
        let knowledge = game.knowledge();
        assert_eq!(knowledge.get('c'), MatchKind::CorrectPosition);
        assert_eq!(knowledge.get('r'), MatchKind::PresentElsewhere);
        assert_eq!(knowledge.get('n'), MatchKind::Absent);
        assert_eq!(knowledge.get('t'), MatchKind::Unknown);

        // i gray, r a t e yellow; c keeps its green from the first guess
        game.submit_guess("irate").unwrap();
        let knowledge = game.knowledge();
        assert_eq!(knowledge.get('i'), MatchKind::Absent);
        assert_eq!(knowledge.get('t'), MatchKind::PresentElsewhere);
        assert_eq!(knowledge.get('a'), MatchKind::PresentElsewhere);
        assert_eq!(knowledge.get('c'), MatchKind::CorrectPosition);
        assert_eq!(knowledge.get('n'), MatchKind::Absent);
    }

    #[test]
    fn zero_turn_limit_in_struct_literal_allows_one_guess() {
        let config = GameConfig {
            word_length: 5,
            max_turns: 0,
        };
        let mut game = GameSession::with_answer(config, word_set(WORDS), "slate").unwrap();
        assert_eq!(game.remaining_turns(), 1);
        assert_eq!(game.config().max_turns, 1);

        game.submit_guess("crane").unwrap();
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.remaining_turns(), 0);
    }

    #[test]
    fn custom_turn_limit() {
        let config = GameConfig::new(5).with_max_turns(2);
        let mut game = GameSession::with_answer(config, word_set(WORDS), "cater").unwrap();

        game.submit_guess("crane").unwrap();
        game.submit_guess("slate").unwrap();
        assert_eq!(game.state(), GameState::Lost);
    }
}
