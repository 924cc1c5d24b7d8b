//! HTTP transport for the remote scoring service
//!
//! Uses ureq (sync HTTP) — no async runtime needed. Timeouts are the
//! transport's defaults; the fallback policy lives in
//! [`super::RemoteScorer`], so a slow or dead endpoint costs one failed
//! attempt and nothing else.

use crate::models::{ClinicalInput, RiskAssessment};
use crate::remote::{RemoteError, RemoteResult};

/// One remote scoring attempt against an absolute endpoint URL.
///
/// Implementations must map every failure mode (transport, non-2xx
/// status, malformed body) into a [`RemoteError`]; the caller decides
/// whether to fall back.
pub trait ScoreTransport {
    fn predict(&self, url: &str, input: &ClinicalInput) -> RemoteResult<RiskAssessment>;
}

/// Production transport: JSON over HTTP via ureq.
pub struct HttpTransport {
    agent: ureq::Agent,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // We handle status codes ourselves
        .build()
        .new_agent()
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            agent: make_agent(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTransport for HttpTransport {
    fn predict(&self, url: &str, input: &ClinicalInput) -> RemoteResult<RiskAssessment> {
        let response = self
            .agent
            .post(url)
            .header("Content-Type", "application/json")
            .send_json(input)
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(RemoteError::Status(status));
        }

        response
            .into_body()
            .read_json()
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}
