//! JSON shapes exchanged with the scoring service

use super::{DailyStatus, GuessVerdict, ServiceError};
use crate::core::{Attempt, Feedback, GameStatus, Guess, MAX_ATTEMPTS, WORD_LENGTH};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct GuessRequest<'a> {
    pub guess: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    guesses: Option<Vec<String>>,
    #[serde(default)]
    attempts: Option<Vec<Feedback>>,
    #[serde(default)]
    status: Option<GameStatus>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VerdictPayload {
    feedback: Feedback,
    #[serde(default)]
    status: Option<GameStatus>,
    #[serde(default)]
    message: Option<String>,
}

/// Decode a `GET /status` body.
///
/// `guesses` and `attempts` are parallel arrays; they must pair up exactly.
pub(super) fn decode_status(body: &str) -> Result<DailyStatus, ServiceError> {
    let payload: StatusPayload = serde_json::from_str(body)?;
    let guesses = payload.guesses.unwrap_or_default();
    let rows = payload.attempts.unwrap_or_default();

    if guesses.len() != rows.len() {
        return Err(ServiceError::InvalidPayload(format!(
            "{} guesses but {} feedback rows",
            guesses.len(),
            rows.len()
        )));
    }
    if guesses.len() > MAX_ATTEMPTS {
        return Err(ServiceError::InvalidPayload(format!(
            "{} attempts exceeds the limit of {MAX_ATTEMPTS}",
            guesses.len()
        )));
    }

    let attempts = guesses
        .into_iter()
        .zip(rows)
        .map(|(text, feedback)| {
            let guess =
                Guess::new(text).map_err(|e| ServiceError::InvalidPayload(e.to_string()))?;
            check_feedback(&feedback)?;
            Ok(Attempt::new(guess, feedback))
        })
        .collect::<Result<Vec<_>, ServiceError>>()?;

    Ok(DailyStatus {
        date: payload.date.unwrap_or_default(),
        attempts,
        status: payload.status.unwrap_or_default(),
        message: payload.message.unwrap_or_default(),
    })
}

/// Decode a `POST /guess` body.
pub(super) fn decode_verdict(body: &str) -> Result<GuessVerdict, ServiceError> {
    let payload: VerdictPayload = serde_json::from_str(body)?;
    check_feedback(&payload.feedback)?;

    Ok(GuessVerdict {
        feedback: payload.feedback,
        status: payload.status.unwrap_or_default(),
        message: payload.message.unwrap_or_default(),
    })
}

fn check_feedback(feedback: &Feedback) -> Result<(), ServiceError> {
    if feedback.len() == WORD_LENGTH {
        Ok(())
    } else {
        Err(ServiceError::InvalidPayload(format!(
            "feedback has {} marks, expected {WORD_LENGTH}",
            feedback.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn status_with_all_fields() {
        let body = r#"{
            "date": "2026-10-19",
            "guesses": ["PLANET", "ORANGE"],
            "attempts": [
                ["grey","grey","yellow","grey","green","grey"],
                ["green","green","green","green","green","green"]
            ],
            "status": "won",
            "message": "Solved in 2!"
        }"#;
        let status = decode_status(body).unwrap();

        assert_eq!(status.date, "2026-10-19");
        assert_eq!(status.attempts.len(), 2);
        assert_eq!(status.attempts[0].guess().text(), "PLANET");
        assert_eq!(status.attempts[0].feedback().mark_at(4), Some(Mark::Green));
        assert!(status.attempts[1].is_solved());
        assert_eq!(status.status, GameStatus::Won);
        assert_eq!(status.message, "Solved in 2!");
    }

    #[test]
    fn status_missing_fields_use_defaults() {
        let status = decode_status("{}").unwrap();
        assert_eq!(status, DailyStatus::default());
        assert_eq!(status.status, GameStatus::InProgress);
    }

    #[test]
    fn status_null_fields_use_defaults() {
        let body = r#"{"date": null, "guesses": null, "attempts": null, "status": null, "message": null}"#;
        let status = decode_status(body).unwrap();
        assert_eq!(status, DailyStatus::default());
        assert_eq!(status.status, GameStatus::InProgress);
    }

    #[test]
    fn status_null_arrays_keep_session_date() {
        let body = r#"{"date":"d","guesses":null,"attempts":null,"status":"in_progress"}"#;
        let status = decode_status(body).unwrap();
        assert_eq!(status.date, "d");
        assert!(status.attempts.is_empty());
    }

    #[test]
    fn status_lowercase_guesses_are_normalized() {
        let body = r#"{"guesses":["planet"],"attempts":[["grey","grey","grey","grey","grey","grey"]]}"#;
        let status = decode_status(body).unwrap();
        assert_eq!(status.attempts[0].guess().text(), "PLANET");
    }

    #[test]
    fn status_mismatched_arrays_rejected() {
        let body = r#"{"guesses":["PLANET"],"attempts":[]}"#;
        assert!(matches!(
            decode_status(body),
            Err(ServiceError::InvalidPayload(_))
        ));
    }

    #[test]
    fn status_too_many_attempts_rejected() {
        let row = r#"["grey","grey","grey","grey","grey","grey"]"#;
        let body = format!(
            r#"{{"guesses":["AAAAAA","BBBBBB","CCCCCC","DDDDDD","EEEEEE","FFFFFF"],"attempts":[{row},{row},{row},{row},{row},{row}]}}"#
        );
        assert!(matches!(
            decode_status(&body),
            Err(ServiceError::InvalidPayload(_))
        ));
    }

    #[test]
    fn status_invalid_guess_rejected() {
        let body = r#"{"guesses":["ABC"],"attempts":[["grey","grey","grey","grey","grey","grey"]]}"#;
        assert!(matches!(
            decode_status(body),
            Err(ServiceError::InvalidPayload(_))
        ));
    }

    #[test]
    fn status_not_json_is_decode_error() {
        assert!(matches!(
            decode_status("<html>bad gateway</html>"),
            Err(ServiceError::Decode(_))
        ));
    }

    #[test]
    fn verdict_defaults_status_and_message() {
        let body = r#"{"feedback":["green","yellow","grey","grey","grey","green"]}"#;
        let verdict = decode_verdict(body).unwrap();
        assert_eq!(verdict.feedback.count_greens(), 2);
        assert_eq!(verdict.status, GameStatus::InProgress);
        assert_eq!(verdict.message, "");
    }

    #[test]
    fn verdict_requires_feedback() {
        assert!(matches!(
            decode_verdict(r#"{"status":"won"}"#),
            Err(ServiceError::Decode(_))
        ));
    }

    #[test]
    fn verdict_wrong_length_feedback_rejected() {
        let body = r#"{"feedback":["green","green"],"status":"won"}"#;
        assert!(matches!(
            decode_verdict(body),
            Err(ServiceError::InvalidPayload(_))
        ));
    }

    #[test]
    fn guess_request_shape() {
        let body = serde_json::to_string(&GuessRequest { guess: "PLANET" }).unwrap();
        assert_eq!(body, r#"{"guess":"PLANET"}"#);
    }
}
