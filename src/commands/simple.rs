//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a whole guess, fed to the
//! game as keystrokes.

use crate::core::WORD_LENGTH;
use crate::game::{GameState, Keystroke, ScoreSource, Transition};
use crate::output::display::{board_lines, status_label};
use crate::output::formatters::{attempt_row, attempts_bar};
use crate::output::service_spinner;
use crate::service::ScoringService;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(service: &dyn ScoringService) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(service, stdin.lock(), &mut stdout)
}

/// Play one session from `input`, writing the board to `out`
///
/// Stops when the game ends, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<R: BufRead, W: Write>(
    service: &dyn ScoringService,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Ocean Word Splash - Simple Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    let spinner = service_spinner("Loading today's puzzle…");
    let mut state = GameState::hydrate(service);
    spinner.finish_and_clear();

    if !state.date().is_empty() {
        writeln!(out, "Day: {}", state.date())?;
    }
    writeln!(out, "{}", state.message())?;
    for line in board_lines(&state) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "\nType a {WORD_LENGTH}-letter guess and press Enter. 'quit' to exit.\n")?;

    let mut line = String::new();
    while state.accepts_input() {
        write!(out, "Guess {} [{}]: ", state.attempts_used() + 1, attempts_bar(state.attempts_used()))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let entry = line.trim();
        if matches!(entry.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        match submit_line(&mut state, service, entry) {
            Transition::Scored { source, .. } => {
                if let Some(attempt) = state.attempts().last() {
                    writeln!(out, "  {}", attempt_row(attempt))?;
                }
                let message = state.message();
                match source {
                    ScoreSource::Service => writeln!(out, "  {message}")?,
                    ScoreSource::Fallback => writeln!(out, "  {}", message.yellow())?,
                }
            }
            _ => writeln!(out, "  ❌ {}", state.message())?,
        }
    }

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  Game over: {}", status_label(state.status()))?;
    for line in board_lines(&state) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;

    Ok(())
}

/// Replace the typed input with `entry` and submit it
///
/// Entries that are not exactly [`WORD_LENGTH`] letters are submitted empty,
/// so the game reports the validation message itself.
fn submit_line(state: &mut GameState, service: &dyn ScoringService, entry: &str) -> Transition {
    while !state.current_input().is_empty() {
        state.apply(Keystroke::Backspace, service);
    }

    let keys: Option<Vec<Keystroke>> = entry.chars().map(Keystroke::letter).collect();
    if let Some(keys) = keys.filter(|keys| keys.len() == WORD_LENGTH) {
        for key in keys {
            state.apply(key, service);
        }
    }

    if !state.can_submit() {
        return state.apply(Keystroke::Submit, service);
    }

    let spinner = service_spinner("Scoring…");
    let transition = state.apply(Keystroke::Submit, service);
    spinner.finish_and_clear();
    transition
}
