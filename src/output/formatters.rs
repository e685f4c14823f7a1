//! Formatting utilities for terminal output

use crate::core::{Attempt, Feedback, MAX_ATTEMPTS, Mark};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// A single letter as a colored tile
#[must_use]
pub fn tile(letter: char, mark: Mark) -> ColoredString {
    let cell = format!(" {letter} ");
    match mark {
        Mark::Green => cell.black().on_green().bold(),
        Mark::Yellow => cell.black().on_yellow().bold(),
        Mark::Grey => cell.white().on_bright_black().bold(),
    }
}

/// A submitted attempt as a row of colored tiles
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    attempt
        .cells()
        .map(|(letter, mark)| tile(letter, mark).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Attempts used out of [`MAX_ATTEMPTS`], one cell per attempt
#[must_use]
pub fn attempts_bar(used: usize) -> String {
    format!(
        "[{}] {used}/{MAX_ATTEMPTS}",
        create_progress_bar(used, MAX_ATTEMPTS, MAX_ATTEMPTS)
    )
}
