//! Per-letter feedback marks

use serde::{Deserialize, Serialize};

/// Correctness mark for a single letter of a guess
///
/// - Green: correct letter in the correct position
/// - Yellow: letter present elsewhere in the word
/// - Grey: letter absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[serde(alias = "gray")]
    Grey,
    Yellow,
    Green,
}

impl Mark {
    /// How much a mark tells about a letter (Grey < Yellow < Green)
    ///
    /// Used to pick the strongest hint when a letter was guessed more than once.
    #[inline]
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Grey => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for grey
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬜' => Some(Self::Grey),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }

    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Grey => "grey",
        }
    }
}
