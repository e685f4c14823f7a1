//! Scripted scoring service for unit tests

use super::{DailyStatus, GuessVerdict, ScoringService, ServiceError};
use crate::core::Guess;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses in order and records every submitted guess.
///
/// Once the script runs out, calls fail with a transport error.
#[derive(Debug, Default)]
pub(crate) struct ScriptedService {
    status: Mutex<Option<Result<DailyStatus, ServiceError>>>,
    verdicts: Mutex<VecDeque<Result<GuessVerdict, ServiceError>>>,
    submitted: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_status(self, status: DailyStatus) -> Self {
        *self.status.lock().unwrap() = Some(Ok(status));
        self
    }

    pub(crate) fn then_verdict(self, verdict: GuessVerdict) -> Self {
        self.verdicts.lock().unwrap().push_back(Ok(verdict));
        self
    }

    pub(crate) fn then_failure(self) -> Self {
        self.verdicts
            .lock()
            .unwrap()
            .push_back(Err(ServiceError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }));
        self
    }

    pub(crate) fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }
}

impl ScoringService for ScriptedService {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn fetch_status(&self) -> Result<DailyStatus, ServiceError> {
        self.status
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ServiceError::Transport("no scripted status".to_string())))
    }

    fn submit_guess(&self, guess: &Guess) -> Result<GuessVerdict, ServiceError> {
        self.submitted.lock().unwrap().push(guess.text().to_string());
        self.verdicts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Transport("no scripted verdict".to_string())))
    }
}
