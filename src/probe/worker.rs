use std::time::{Duration, Instant};

use reqwest::{Client, redirect};
use tracing::debug;

use crate::error::ProbeError;

use super::endpoint::EndpointDescriptor;
use super::status::status_line;

pub const DEFAULT_USER_AGENT: &str = concat!("pulsecheck/", env!("CARGO_PKG_VERSION"));

/// Outcome of a probe that received a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSample {
    pub status: String,
    pub elapsed: Duration,
}

/// Builds the client shared by every worker.
///
/// Redirects are not followed: a 3xx is the terminal response of a probe.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialized.
pub fn build_client() -> Result<Client, ProbeError> {
    Client::builder()
        .redirect(redirect::Policy::none())
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|source| ProbeError::BuildClient { source })
}

/// Performs one GET against the endpoint, bounded by its own timeout.
///
/// `elapsed` covers the time from sending the request until the response
/// headers arrived; the body is not read.
///
/// # Errors
///
/// Returns [`ProbeError::Timeout`] when the endpoint did not answer within its
/// timeout and [`ProbeError::Transport`] for DNS, connect, and TLS failures.
pub async fn probe_endpoint(
    client: &Client,
    endpoint: &EndpointDescriptor,
) -> Result<ProbeSample, ProbeError> {
    let started = Instant::now();
    let response = client
        .get(endpoint.url())
        .timeout(endpoint.timeout())
        .send()
        .await
        .map_err(|err| ProbeError::from_request(err, endpoint.timeout_ms()))?;
    let elapsed = started.elapsed();
    let status = status_line(response.status());
    debug!(
        name = endpoint.name(),
        url = endpoint.url(),
        status = %status,
        elapsed = ?elapsed,
        "probe completed"
    );
    drop(response);

    Ok(ProbeSample { status, elapsed })
}
