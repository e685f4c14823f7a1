//! Discrete input events understood by the game

use std::fmt;

/// A normalized key event
///
/// Physical keys and on-screen keys are both translated into this vocabulary
/// before they reach [`GameState::apply`](super::GameState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keystroke {
    /// Type a letter
    ///
    /// Holds any `char`, but the game ignores anything outside 'A'..='Z'.
    /// Build it with [`Keystroke::letter`] to normalize raw input.
    Letter(char),
    /// Remove the last typed letter
    Backspace,
    /// Submit the typed letters as a guess
    Submit,
}

impl Keystroke {
    /// Build a letter keystroke from any ASCII letter, uppercasing it
    ///
    /// # Examples
    /// ```
    /// use word_splash::game::Keystroke;
    ///
    /// assert_eq!(Keystroke::letter('q'), Some(Keystroke::Letter('Q')));
    /// assert_eq!(Keystroke::letter('7'), None);
    /// ```
    #[must_use]
    pub const fn letter(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self::Letter(ch.to_ascii_uppercase()))
        } else {
            None
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(ch) => write!(f, "{ch}"),
            Self::Backspace => f.write_str("BACK"),
            Self::Submit => f.write_str("ENTER"),
        }
    }
}
