//! Local fallback scoring
//!
//! When the scoring service cannot be reached the game still owes the player
//! feedback. This scorer does not know the answer; it derives a mark from each
//! letter's position and character code:
//!
//! - `(position + code) % 3 == 0` → Grey
//! - `(position + code) % 3 == 1` → Yellow
//! - `(position + code) % 3 == 2` → Green
//!
//! The same letters always produce the same feedback.

use crate::core::{Feedback, GameStatus, MAX_ATTEMPTS, Mark};

pub const WON_MESSAGE: &str = "You won (offline scoring)!";
pub const LOST_MESSAGE: &str = "Out of attempts (offline scoring).";
pub const SUBMITTED_MESSAGE: &str = "Submitted (offline scoring).";

/// Score a guess without the service
///
/// Letters are uppercased before scoring. Output has one mark per input
/// character and this function never fails.
///
/// # Examples
/// ```
/// use word_splash::game::score_locally;
///
/// assert_eq!(score_locally("ABCDEF").to_emoji(), "🟩🟨⬜🟩🟨⬜");
/// assert_eq!(score_locally("abcdef"), score_locally("ABCDEF"));
/// ```
#[must_use]
pub fn score_locally(letters: &str) -> Feedback {
    letters
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            let code = u64::from(u32::from(ch.to_ascii_uppercase()));
            match (position as u64 + code) % 3 {
                0 => Mark::Grey,
                1 => Mark::Yellow,
                _ => Mark::Green,
            }
        })
        .collect::<Vec<_>>()
        .into()
}

/// Status after appending a locally scored attempt
///
/// `attempts_used` counts the attempt just appended.
#[must_use]
pub fn fallback_status(feedback: &Feedback, attempts_used: usize) -> GameStatus {
    if feedback.is_all_green() {
        GameStatus::Won
    } else if attempts_used >= MAX_ATTEMPTS {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

/// Player-facing message for a locally scored attempt
#[must_use]
pub const fn fallback_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won => WON_MESSAGE,
        GameStatus::Lost => LOST_MESSAGE,
        GameStatus::InProgress => SUBMITTED_MESSAGE,
    }
}
