//! Concurrent probe dispatch and result aggregation.
mod completion;
mod dispatcher;
mod endpoint;
mod status;
mod store;
mod worker;

#[cfg(test)]
mod test_support;

pub use completion::{CompletionGuard, CompletionSignal};
pub use dispatcher::{FailureDisplay, LiveDispatch, ProbeDispatcher, ProbeReport, StreamDispatch};
pub use endpoint::EndpointDescriptor;
pub use status::{StatusClass, status_line};
pub use store::{
    ProbeResult, ProbeState, ResultStore, SENTINEL_STATUS, SlotWriter, format_elapsed,
};
pub use worker::{DEFAULT_USER_AGENT, ProbeSample, build_client, probe_endpoint};
