//! A submitted guess paired with its feedback

use super::{Feedback, Guess};

/// One evaluated guess; immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Guess,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Guess, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Check if this attempt solved the puzzle
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_all_green()
    }

    /// Iterate letters alongside their marks
    pub fn cells(&self) -> impl Iterator<Item = (char, super::Mark)> + '_ {
        self.guess.letters().zip(self.feedback.marks().iter().copied())
    }
}
