use std::sync::Arc;

use tracing::debug;

use crate::error::AppResult;
use crate::probe::{EndpointDescriptor, FailureDisplay, ProbeDispatcher};
use crate::ui::run_dashboard;

/// Starts the probes and hands the result store to the live table.
///
/// In-flight probes are abandoned when the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or drawn.
pub(crate) async fn run_interactive(
    dispatcher: &ProbeDispatcher,
    endpoints: &[EndpointDescriptor],
    failures: FailureDisplay,
    no_color: bool,
) -> AppResult<()> {
    let dispatch = dispatcher.dispatch_live(endpoints, failures);

    let completion = Arc::clone(&dispatch.completion);
    let drained = tokio::spawn(async move {
        completion.wait().await;
        debug!("initial dispatch drained");
    });

    let result = run_dashboard(dispatch.store, no_color).await;
    drained.abort();
    result
}
