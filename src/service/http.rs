//! HTTP scoring service client
//!
//! Talks JSON to the scoring backend with a blocking `reqwest` client. The
//! cookie store carries the session identity between the two endpoints.

use super::wire::{GuessRequest, decode_status, decode_verdict};
use super::{DailyStatus, GuessVerdict, ScoringService, ServiceError};
use crate::core::Guess;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Default API base, matching the development backend
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

const USER_AGENT: &str = concat!("word_splash/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpScoringClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Scoring service reached over HTTP.
#[derive(Debug)]
pub struct HttpScoringClient {
    api_base: String,
    http_client: Client,
}

impl HttpScoringClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the API base is empty or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let api_base = config.api_base.trim().trim_end_matches('/').to_string();
        if api_base.is_empty() {
            return Err(ServiceError::Transport(
                "api base URL must not be empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .cookie_store(true)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            api_base,
            http_client,
        })
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base)
    }

    fn read_body(response: Response) -> Result<String, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text()?)
    }
}

impl ScoringService for HttpScoringClient {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_status(&self) -> Result<DailyStatus, ServiceError> {
        let endpoint = self.endpoint("status");
        debug!(%endpoint, "fetching daily status");

        let response = self
            .http_client
            .get(&endpoint)
            .header("Accept", "application/json")
            .send()?;

        decode_status(&Self::read_body(response)?)
    }

    fn submit_guess(&self, guess: &Guess) -> Result<GuessVerdict, ServiceError> {
        let endpoint = self.endpoint("guess");
        debug!(%endpoint, guess = %guess, "submitting guess");

        let response = self
            .http_client
            .post(&endpoint)
            .header("Accept", "application/json")
            .json(&GuessRequest {
                guess: guess.text(),
            })
            .send()?;

        decode_verdict(&Self::read_body(response)?)
    }
}
