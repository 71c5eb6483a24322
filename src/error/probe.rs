use thiserror::Error;

/// Failure of a single probe. Never fatal to the run.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("{source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
}

impl ProbeError {
    /// Classifies a request error. Timeouts are split out so they can be
    /// reported with the configured limit instead of reqwest's wording.
    #[must_use]
    pub fn from_request(source: reqwest::Error, timeout_ms: u64) -> Self {
        if source.is_timeout() {
            ProbeError::Timeout { timeout_ms }
        } else {
            ProbeError::Transport { source }
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout { .. })
    }

    /// Short label for the table cell when failed probes are displayed.
    #[must_use]
    pub fn short_reason(&self) -> String {
        match self {
            ProbeError::Timeout { .. } => "timeout".to_owned(),
            ProbeError::Transport { source } => {
                if source.is_connect() {
                    "connect failed".to_owned()
                } else if source.is_request() {
                    "request failed".to_owned()
                } else {
                    "transport error".to_owned()
                }
            }
            ProbeError::BuildClient { .. } => "client error".to_owned(),
        }
    }
}
