//! Offline score preview
//!
//! Scores a single guess with the local fallback scorer, without touching
//! the service or any session.

use crate::core::{Attempt, Guess, GuessError};
use crate::game::score_locally;

/// Result of scoring one guess locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub attempt: Attempt,
}

/// Validate `text` and score it locally
///
/// # Errors
///
/// Returns an error if `text` is not exactly six ASCII letters.
pub fn score_guess(text: &str) -> Result<ScoreResult, GuessError> {
    let guess = Guess::new(text.trim())?;
    let feedback = score_locally(guess.text());
    Ok(ScoreResult {
        attempt: Attempt::new(guess, feedback),
    })
}
