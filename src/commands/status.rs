//! Daily status report

use crate::game::GameState;
use crate::output::service_spinner;
use crate::service::{ScoringService, ServiceError};
use tracing::info;

/// Fetch today's status and apply the session rules to it
///
/// Unlike a playing session this does not fall back to an empty game; the
/// caller asked for the service's view.
///
/// # Errors
///
/// Returns the service error if the status cannot be fetched or decoded.
pub fn load_status(service: &dyn ScoringService) -> Result<GameState, ServiceError> {
    let spinner = service_spinner("Fetching today's status…");
    let result = service.fetch_status();
    spinner.finish_and_clear();

    let report = result?;
    info!(service = service.name(), date = %report.date, "status fetched");
    Ok(GameState::from_status(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attempt, Feedback, GameStatus, Guess};
    use crate::service::testing::ScriptedService;
    use crate::service::{DailyStatus, OfflineService};

    #[test]
    fn offline_status_is_an_error() {
        assert!(matches!(
            load_status(&OfflineService),
            Err(ServiceError::Offline)
        ));
    }

    #[test]
    fn status_is_derived_from_attempts() {
        let service = ScriptedService::new().with_status(DailyStatus {
            date: "2024-06-01".to_string(),
            attempts: vec![Attempt::new(
                Guess::new("PLANET").unwrap(),
                Feedback::from_str("GGGGGG").unwrap(),
            )],
            status: GameStatus::InProgress,
            message: String::new(),
        });

        let state = load_status(&service).unwrap();
        assert_eq!(state.date(), "2024-06-01");
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.attempts_used(), 1);
    }
}
