use std::sync::Arc;
use std::time::Instant;

use reqwest::Client;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::ProbeError;

use super::completion::CompletionSignal;
use super::endpoint::EndpointDescriptor;
use super::store::{ProbeState, ResultStore};
use super::worker::{ProbeSample, build_client, probe_endpoint};

/// What a live slot shows when its probe fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDisplay {
    /// Leave the slot untouched; the row keeps its sentinel.
    Silent,
    /// Write a failed state with a short reason.
    Shown,
}

impl FailureDisplay {
    #[must_use]
    pub const fn from_flag(show_errors: bool) -> Self {
        if show_errors {
            FailureDisplay::Shown
        } else {
            FailureDisplay::Silent
        }
    }
}

/// One completed probe, streamed in completion order.
#[derive(Debug)]
pub enum ProbeReport {
    Completed {
        endpoint: EndpointDescriptor,
        sample: ProbeSample,
    },
    Failed {
        endpoint: EndpointDescriptor,
        error: ProbeError,
    },
}

pub struct LiveDispatch {
    pub store: ResultStore,
    pub completion: Arc<CompletionSignal>,
}

pub struct StreamDispatch {
    /// Closed once every worker has finished.
    pub reports: mpsc::Receiver<ProbeReport>,
    pub completion: Arc<CompletionSignal>,
}

/// Fans out one worker per endpoint. No rate limiting, no retries.
#[derive(Clone)]
pub struct ProbeDispatcher {
    client: Client,
}

impl ProbeDispatcher {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new() -> Result<Self, ProbeError> {
        Ok(Self::with_client(build_client()?))
    }

    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Creates the result store and launches the workers that fill it.
    ///
    /// All slots exist in their sentinel state before the first worker is
    /// spawned. Must be called from within a tokio runtime.
    #[must_use]
    pub fn dispatch_live(
        &self,
        endpoints: &[EndpointDescriptor],
        failures: FailureDisplay,
    ) -> LiveDispatch {
        let (store, writers) = ResultStore::new(endpoints);
        let completion = CompletionSignal::new();

        for (endpoint, writer) in endpoints.iter().zip(writers) {
            let endpoint = endpoint.clone();
            let client = self.client.clone();
            let guard = completion.enter();

            tokio::spawn(async move {
                let _guard = guard;
                let started = Instant::now();
                match probe_endpoint(&client, &endpoint).await {
                    Ok(sample) => writer.record(ProbeState::Completed {
                        status: sample.status,
                        elapsed: sample.elapsed,
                    }),
                    Err(err) => {
                        debug!(
                            name = endpoint.name(),
                            slot = writer.index(),
                            "probe failed: {}",
                            err
                        );
                        if failures == FailureDisplay::Shown {
                            writer.record(ProbeState::Failed {
                                reason: err.short_reason(),
                                elapsed: started.elapsed(),
                            });
                        }
                    }
                }
            });
        }

        LiveDispatch { store, completion }
    }

    /// Launches the workers and returns their reports in completion order.
    ///
    /// A supervisor task waits for the completion signal and then drops the
    /// last sender, which closes the stream. Must be called from within a
    /// tokio runtime.
    #[must_use]
    pub fn dispatch_stream(&self, endpoints: &[EndpointDescriptor]) -> StreamDispatch {
        let (report_tx, reports) = mpsc::channel(endpoints.len().max(1));
        let completion = CompletionSignal::new();

        for endpoint in endpoints {
            let endpoint = endpoint.clone();
            let client = self.client.clone();
            let report_tx = report_tx.clone();
            let guard = completion.enter();

            tokio::spawn(async move {
                let _guard = guard;
                let report = match probe_endpoint(&client, &endpoint).await {
                    Ok(sample) => ProbeReport::Completed { endpoint, sample },
                    Err(error) => {
                        debug!(name = endpoint.name(), "probe failed: {}", error);
                        ProbeReport::Failed { endpoint, error }
                    }
                };
                if report_tx.send(report).await.is_err() {
                    debug!("report receiver dropped before probe finished");
                }
            });
        }

        let supervisor_signal = Arc::clone(&completion);
        tokio::spawn(async move {
            supervisor_signal.wait().await;
            drop(report_tx);
        });

        StreamDispatch {
            reports,
            completion,
        }
    }
}
