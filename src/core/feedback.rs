//! Feedback for a submitted guess
//!
//! Feedback is an ordered list of marks, one per letter of the guess:
//! - Grey (letter not in word)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)
//!
//! Feedback only ever comes from the scoring service or the local fallback
//! scorer; the player never edits it.

use super::Mark;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-letter feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the mark at a specific position
    #[inline]
    #[must_use]
    pub fn mark_at(&self, position: usize) -> Option<Mark> {
        self.0.get(position).copied()
    }

    /// Check if every letter is green
    ///
    /// Empty feedback is never a win.
    ///
    /// # Examples
    /// ```
    /// use word_splash::core::Feedback;
    ///
    /// assert!(Feedback::from_str("GGGGGG").unwrap().is_all_green());
    /// assert!(!Feedback::from_str("GGGGGY").unwrap().is_all_green());
    /// ```
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&mark| mark == Mark::Green)
    }

    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.count(Mark::Green)
    }

    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.count(Mark::Yellow)
    }

    fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GY-GY-" or "🟩🟨⬜🟩🟨⬜"
    ///
    /// # Examples
    /// ```
    /// use word_splash::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY-").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨⬜").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars()
            .map(Mark::from_symbol)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use word_splash::core::Feedback;
    ///
    /// let f = Feedback::from_str("GY-").unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.to_emoji()).collect()
    }
}

impl From<Vec<Mark>> for Feedback {
    fn from(marks: Vec<Mark>) -> Self {
        Self(marks)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
