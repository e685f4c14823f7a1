//! Guess representation
//!
//! A Guess is a validated word of exactly [`WORD_LENGTH`] uppercase letters.

use super::WORD_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A submitted six-letter guess, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guess {
    text: String,
}

/// Error type for invalid guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly {expected} letters, got {0}", expected = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("Guess must contain only letters A-Z")]
    InvalidCharacters,
}

impl Guess {
    /// Create a new Guess from a string
    ///
    /// # Errors
    /// Returns `GuessError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_splash::core::Guess;
    ///
    /// let guess = Guess::new("planet").unwrap();
    /// assert_eq!(guess.text(), "PLANET");
    ///
    /// assert!(Guess::new("short").is_err());
    /// assert!(Guess::new("pl4net").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GuessError> {
        let text: String = text.into();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the guess as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letter at a specific position
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.text.as_bytes().get(position).map(|&b| char::from(b))
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl TryFrom<String> for Guess {
    type Error = GuessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Guess> for String {
    fn from(guess: Guess) -> Self {
        guess.text
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_creation_valid() {
        let guess = Guess::new("ABCDEF").unwrap();
        assert_eq!(guess.text(), "ABCDEF");
    }

    #[test]
    fn guess_creation_lowercase_normalized() {
        assert_eq!(Guess::new("planet").unwrap().text(), "PLANET");
        assert_eq!(Guess::new("PlAnEt").unwrap().text(), "PLANET");
    }

    #[test]
    fn guess_creation_invalid_length() {
        assert_eq!(Guess::new("toolonger"), Err(GuessError::InvalidLength(9)));
        assert_eq!(Guess::new("short"), Err(GuessError::InvalidLength(5)));
        assert_eq!(Guess::new(""), Err(GuessError::InvalidLength(0)));
    }

    #[test]
    fn guess_creation_invalid_characters() {
        assert_eq!(Guess::new("plan3t"), Err(GuessError::InvalidCharacters));
        assert_eq!(Guess::new("plan t"), Err(GuessError::InvalidCharacters));
        assert_eq!(Guess::new("planét"), Err(GuessError::InvalidCharacters));
    }

    #[test]
    fn guess_letter_at() {
        let guess = Guess::new("planet").unwrap();
        assert_eq!(guess.letter_at(0), Some('P'));
        assert_eq!(guess.letter_at(5), Some('T'));
        assert_eq!(guess.letter_at(6), None);
        assert_eq!(guess.letters().collect::<String>(), "PLANET");
    }

    #[test]
    fn guess_serde_round_trips_as_string() {
        let guess: Guess = serde_json::from_str(r#""orange""#).unwrap();
        assert_eq!(guess.text(), "ORANGE");
        assert_eq!(serde_json::to_string(&guess).unwrap(), r#""ORANGE""#);
        assert!(serde_json::from_str::<Guess>(r#""nope""#).is_err());
    }

    #[test]
    fn guess_error_message() {
        assert_eq!(
            GuessError::InvalidLength(3).to_string(),
            "Guess must be exactly 6 letters, got 3"
        );
    }
}
