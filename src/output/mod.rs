//! Terminal output formatting
//!
//! Colored rendering of guesses, letter knowledge and game results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_rejection, print_setup_summary,
};
