//! Game engine
//!
//! Configuration and the turn-by-turn session state machine.

mod config;
mod session;

pub use config::{DEFAULT_MAX_TURNS, GameConfig};
pub use session::{GameSession, GameState, MIN_PLAYABLE_WORDS};
