//! Remote scoring delegation with silent local fallback
//!
//! The remote scoring service accepts a JSON [`ClinicalInput`] at
//! `POST {base_url}/predict` and answers with a JSON
//! [`RiskAssessment`]. Its availability is strictly optional:
//! [`RemoteScorer::assess`] swallows every transport, status, and parse
//! failure and falls back to the local model, so a dead endpoint is
//! never visible to the caller.
//!
//! The transport is injected through [`ScoreTransport`] so the fallback
//! path can be driven deterministically in tests with a failing stub.

mod client;

pub use client::{HttpTransport, ScoreTransport};

use crate::config::UserConfig;
use crate::models::{ClinicalInput, RiskAssessment};
use crate::scoring;
use thiserror::Error;
use tracing::warn;

/// Path of the scoring endpoint on the remote service.
const PREDICT_PATH: &str = "/predict";

/// Errors on the remote scoring path
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request to scoring service failed: {0}")]
    Transport(String),

    #[error("scoring service returned status {0}")]
    Status(u16),

    #[error("failed to parse scoring response: {0}")]
    Parse(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Scorer that tries the remote service first and falls back to
/// [`scoring::score`] on any failure.
pub struct RemoteScorer<T: ScoreTransport = HttpTransport> {
    base_url: String,
    transport: T,
}

impl RemoteScorer {
    /// Remote scorer over HTTP against a given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }

    /// Remote scorer using the configured (or default) base URL.
    pub fn from_config(config: &UserConfig) -> Self {
        Self::new(config.api_url())
    }
}

impl<T: ScoreTransport> RemoteScorer<T> {
    /// Remote scorer with an injected transport.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Full URL of the predict endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PREDICT_PATH)
    }

    /// One remote scoring attempt; errors propagate.
    pub fn predict(&self, input: &ClinicalInput) -> RemoteResult<RiskAssessment> {
        self.transport.predict(&self.predict_url(), input)
    }

    /// Score via the remote service, falling back to the local model.
    ///
    /// Never fails and never retries: a single failed attempt of any
    /// kind is treated as a signal to compute locally.
    pub fn assess(&self, input: &ClinicalInput) -> RiskAssessment {
        match self.predict(input) {
            Ok(assessment) => assessment,
            Err(error) => {
                warn!("remote scoring unavailable, using local model: {error}");
                scoring::score(input)
            }
        }
    }
}
