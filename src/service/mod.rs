//! Scoring service interfaces
//!
//! The game consults a remote scoring service for two things: the daily
//! status used to seed a session, and the verdict for each submitted guess.
//! Every failure collapses into [`ServiceError`]; callers recover locally.

use crate::core::{Attempt, Feedback, GameStatus, Guess};
use thiserror::Error;

pub mod http;
mod offline;
#[cfg(test)]
pub(crate) mod testing;
mod wire;

pub use http::{DEFAULT_API_BASE, HttpScoringClient, ServiceConfig};
pub use offline::OfflineService;

/// Errors emitted by scoring services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// Service calls are disabled for this session.
    #[error("scoring service disabled (offline mode)")]
    Offline,

    /// Request transport failed.
    #[error("scoring service transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success status code.
    #[error("scoring service error ({status}): {body}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, if it could be read.
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("scoring service decode error: {0}")]
    Decode(String),

    /// Response decoded but violates the game's shape rules.
    #[error("scoring service returned an invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Decode(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Daily puzzle status used to seed a session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailyStatus {
    /// Label of the current daily puzzle (may be empty)
    pub date: String,
    /// Attempts already made today, oldest first
    pub attempts: Vec<Attempt>,
    pub status: GameStatus,
    pub message: String,
}

/// Service verdict for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessVerdict {
    pub feedback: Feedback,
    pub status: GameStatus,
    pub message: String,
}

/// Remote scoring backend.
///
/// Each call is a single request/response exchange; retries and timeouts
/// belong to the transport.
pub trait ScoringService: Send + Sync {
    /// Returns the service name for logging.
    fn name(&self) -> &'static str;

    /// Fetches the status of today's puzzle for this session.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport, status or decoding failure.
    fn fetch_status(&self) -> Result<DailyStatus, ServiceError>;

    /// Submits a guess and returns the service's verdict.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport, status, decoding or validation failure.
    fn submit_guess(&self, guess: &Guess) -> Result<GuessVerdict, ServiceError>;
}
