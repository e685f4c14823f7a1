//! Game state machine
//!
//! Owns a session's attempts and input buffer and decides every transition
//! from discrete keystrokes. Guesses are scored by the remote service when it
//! answers and by the local fallback scorer when it does not.

pub mod fallback;
mod keystroke;
mod state;

pub use fallback::{fallback_status, score_locally};
pub use keystroke::Keystroke;
pub use state::{GameState, ScoreSource, Transition};
