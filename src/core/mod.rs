//! Core domain types for the daily word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and serialize to the scoring service's wire format.

mod attempt;
mod feedback;
mod guess;
mod mark;
mod status;

pub use attempt::Attempt;
pub use feedback::Feedback;
pub use guess::{Guess, GuessError};
pub use mark::Mark;
pub use status::GameStatus;

/// Letters per guess
pub const WORD_LENGTH: usize = 6;

/// Guesses allowed per daily puzzle
pub const MAX_ATTEMPTS: usize = 5;
