//! Display functions for command results

use super::formatters::{attempt_row, attempts_bar, feedback_to_emoji};
use crate::commands::ScoreResult;
use crate::core::GameStatus;
use crate::game::GameState;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a scoring service call is outstanding
///
/// Draws to stderr and stays hidden when stderr is not a terminal.
#[must_use]
pub fn service_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Game status as a colored word
#[must_use]
pub fn status_label(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => "IN PROGRESS".cyan().bold().to_string(),
        GameStatus::Won => "WON".green().bold().to_string(),
        GameStatus::Lost => "LOST".red().bold().to_string(),
    }
}

/// Board lines: one colored row plus emoji per attempt
#[must_use]
pub fn board_lines(state: &GameState) -> Vec<String> {
    state
        .attempts()
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            format!(
                "  {}. {}  {}",
                (i + 1).to_string().bright_black(),
                attempt_row(attempt),
                feedback_to_emoji(attempt.feedback())
            )
        })
        .collect()
}

/// Print the daily status report
pub fn print_status(state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OCEAN WORD SPLASH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if !state.date().is_empty() {
        println!("\n📅 Day:      {}", state.date().bright_white().bold());
    }
    println!("🎯 Status:   {}", status_label(state.status()));
    println!("📊 Attempts: {}", attempts_bar(state.attempts_used()));
    println!("💬 {}", state.message());

    let lines = board_lines(state);
    if !lines.is_empty() {
        println!();
        for line in lines {
            println!("{line}");
        }
    }
    println!();
}

/// Print an offline score preview
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Offline score: {}",
        result.attempt.guess().text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}",
        attempt_row(&result.attempt),
        feedback_to_emoji(result.attempt.feedback())
    );
    println!(
        "  Greens: {}  Yellows: {}",
        result.attempt.feedback().count_greens(),
        result.attempt.feedback().count_yellows()
    );

    println!();
    if result.attempt.is_solved() {
        println!("{}", "✅ Would win when scored offline".green().bold());
    } else {
        println!("{}", "Not a winning guess when scored offline".bright_black());
    }
}
