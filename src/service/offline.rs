//! Service stand-in for sessions played without a backend

use super::{DailyStatus, GuessVerdict, ScoringService, ServiceError};
use crate::core::Guess;

/// Scoring service that is never reachable.
///
/// Every call fails with [`ServiceError::Offline`], so the game seeds an empty
/// session and scores every guess with the local fallback scorer.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineService;

impl ScoringService for OfflineService {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn fetch_status(&self) -> Result<DailyStatus, ServiceError> {
        Err(ServiceError::Offline)
    }

    fn submit_guess(&self, _guess: &Guess) -> Result<GuessVerdict, ServiceError> {
        Err(ServiceError::Offline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_service_always_fails() {
        let service = OfflineService;
        assert!(matches!(service.fetch_status(), Err(ServiceError::Offline)));
        let guess = Guess::new("PLANET").unwrap();
        assert!(matches!(
            service.submit_guess(&guess),
            Err(ServiceError::Offline)
        ));
    }
}
