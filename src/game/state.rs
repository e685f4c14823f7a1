//! Session state and its transition function

use super::Keystroke;
use super::fallback::{fallback_message, fallback_status, score_locally};
use crate::core::{Attempt, GameStatus, Guess, MAX_ATTEMPTS, Mark, WORD_LENGTH};
use crate::service::{DailyStatus, ScoringService};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

/// Shown when the service seeds a session without a message of its own
pub const WELCOME_MESSAGE: &str = "Make your first guess!";

/// Shown when the session could not be seeded from the service
pub const OFFLINE_WELCOME_MESSAGE: &str = "Welcome! Scoring service unreachable, playing offline.";

/// Who produced the feedback for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    Service,
    Fallback,
}

/// What a single keystroke did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// A letter was appended to the input
    Typed(char),
    /// The last letter was removed
    Erased,
    /// Submit refused because the input has the wrong length
    Rejected,
    /// A guess was recorded
    Scored {
        source: ScoreSource,
        status: GameStatus,
    },
}

/// State of one daily puzzle session
///
/// Mutated only through [`GameState::apply`]. Taking `&mut self` for the whole
/// submit means a session can never have two guesses in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    date: String,
    attempts: Vec<Attempt>,
    current_input: String,
    status: GameStatus,
    message: String,
}

impl GameState {
    /// An empty in-progress session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session from the service, or start empty if it is unreachable
    #[must_use]
    pub fn hydrate(service: &dyn ScoringService) -> Self {
        match service.fetch_status() {
            Ok(status) => {
                info!(
                    service = service.name(),
                    date = %status.date,
                    attempts = status.attempts.len(),
                    status = %status.status,
                    "session seeded from scoring service"
                );
                Self::from_status(status)
            }
            Err(err) => {
                warn!(service = service.name(), error = %err, "status unavailable, starting offline");
                Self {
                    message: OFFLINE_WELCOME_MESSAGE.to_string(),
                    ..Self::default()
                }
            }
        }
    }

    /// Build a session from a status report
    ///
    /// Attempts beyond [`MAX_ATTEMPTS`] are dropped and the status is derived
    /// from the attempts.
    #[must_use]
    pub fn from_status(report: DailyStatus) -> Self {
        let mut attempts = report.attempts;
        if attempts.len() > MAX_ATTEMPTS {
            warn!(
                attempts = attempts.len(),
                "status report exceeds attempt limit, truncating"
            );
            attempts.truncate(MAX_ATTEMPTS);
        }

        let last_solved = attempts.last().is_some_and(Attempt::is_solved);
        let status = reconcile_status(last_solved, attempts.len(), report.status);
        let message = if report.message.is_empty() {
            WELCOME_MESSAGE.to_string()
        } else {
            report.message
        };

        Self {
            date: report.date,
            attempts,
            current_input: String::new(),
            status,
            message,
        }
    }

    /// Apply one keystroke
    ///
    /// `Submit` blocks on the scoring service; on any service failure the
    /// guess is scored locally instead.
    pub fn apply(&mut self, key: Keystroke, service: &dyn ScoringService) -> Transition {
        if self.status.is_terminal() {
            return Transition::Ignored;
        }

        match key {
            Keystroke::Letter(ch) => self.type_letter(ch),
            Keystroke::Backspace => self.erase(),
            Keystroke::Submit => self.submit(service),
        }
    }

    fn type_letter(&mut self, ch: char) -> Transition {
        if self.current_input.len() >= WORD_LENGTH || !ch.is_ascii_uppercase() {
            return Transition::Ignored;
        }
        self.current_input.push(ch);
        Transition::Typed(ch)
    }

    fn erase(&mut self) -> Transition {
        if self.current_input.pop().is_some() {
            Transition::Erased
        } else {
            Transition::Ignored
        }
    }

    fn submit(&mut self, service: &dyn ScoringService) -> Transition {
        let Some(guess) = self.ready_guess() else {
            self.message = format!("Enter {WORD_LENGTH} letters");
            return Transition::Rejected;
        };

        let attempt_number = self.attempts.len() + 1;
        let (source, feedback, status, message) = match service.submit_guess(&guess) {
            Ok(verdict) => {
                let status = reconcile_status(
                    verdict.feedback.is_all_green(),
                    attempt_number,
                    verdict.status,
                );
                (ScoreSource::Service, verdict.feedback, status, verdict.message)
            }
            Err(err) => {
                warn!(service = service.name(), error = %err, guess = %guess, "submit failed, scoring locally");
                let feedback = score_locally(guess.text());
                let status = fallback_status(&feedback, attempt_number);
                (
                    ScoreSource::Fallback,
                    feedback,
                    status,
                    fallback_message(status).to_string(),
                )
            }
        };

        self.attempts.push(Attempt::new(guess, feedback));
        self.current_input.clear();
        self.status = status;
        self.message = message;

        info!(
            ?source,
            attempt = self.attempts.len(),
            status = %self.status,
            "guess recorded"
        );

        Transition::Scored {
            source,
            status: self.status,
        }
    }

    /// The typed letters as a guess, if they form one
    fn ready_guess(&self) -> Option<Guess> {
        if self.current_input.len() != WORD_LENGTH {
            return None;
        }
        Guess::new(self.current_input.as_str()).ok()
    }

    #[inline]
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    /// Check if keystrokes can still change anything
    #[inline]
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Check if a submit would reach the scorer
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.accepts_input() && self.current_input.len() == WORD_LENGTH
    }

    /// Strongest mark seen for each guessed letter
    ///
    /// Green beats Yellow beats Grey, so a letter once placed correctly stays green.
    #[must_use]
    pub fn letter_marks(&self) -> FxHashMap<char, Mark> {
        let mut marks: FxHashMap<char, Mark> = FxHashMap::default();
        for (letter, mark) in self.attempts.iter().flat_map(Attempt::cells) {
            marks
                .entry(letter)
                .and_modify(|best| {
                    if mark.strength() > best.strength() {
                        *best = mark;
                    }
                })
                .or_insert(mark);
        }
        marks
    }
}

/// Reconcile a reported status with the attempts so far
///
/// A reported terminal status is honored. An all-green last attempt forces
/// Won; reaching the limit without a win forces Lost. Disagreements are logged.
fn reconcile_status(last_solved: bool, attempts_used: usize, reported: GameStatus) -> GameStatus {
    let status = if last_solved {
        GameStatus::Won
    } else if reported.is_terminal() {
        reported
    } else if attempts_used >= MAX_ATTEMPTS {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    };

    if status == reported {
        debug!(%status, "reported status confirmed");
    } else {
        warn!(%reported, %status, "reported status disagrees with attempts");
    }
    status
}
