use std::io::Write;

use crossterm::style::{Color, Stylize};
use tokio::sync::mpsc;
use tracing::info;

use crate::error::{AppResult, ProbeError};
use crate::probe::{
    EndpointDescriptor, ProbeDispatcher, ProbeReport, ProbeSample, StatusClass, format_elapsed,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BatchSummary {
    pub(crate) completed: usize,
    pub(crate) failed: usize,
}

/// Probes every endpoint once and prints one line per probe as it finishes.
///
/// # Errors
///
/// Returns an error when writing to stdout or stderr fails.
pub(crate) async fn run_batch(
    dispatcher: &ProbeDispatcher,
    endpoints: &[EndpointDescriptor],
    color_stdout: bool,
    color_stderr: bool,
) -> AppResult<BatchSummary> {
    let mut dispatch = dispatcher.dispatch_stream(endpoints);
    let summary = drain_reports(
        &mut dispatch.reports,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        color_stdout,
        color_stderr,
    )
    .await?;
    info!(
        completed = summary.completed,
        failed = summary.failed,
        "all probes finished"
    );
    Ok(summary)
}

/// Writes reports in arrival order until the stream closes. Results go to
/// `out`, failures to `diag`.
pub(crate) async fn drain_reports<O: Write, D: Write>(
    reports: &mut mpsc::Receiver<ProbeReport>,
    out: &mut O,
    diag: &mut D,
    color_out: bool,
    color_diag: bool,
) -> AppResult<BatchSummary> {
    let mut summary = BatchSummary::default();
    while let Some(report) = reports.recv().await {
        match report {
            ProbeReport::Completed { endpoint, sample } => {
                writeln!(out, "{}", format_result_line(&endpoint, &sample, color_out))?;
                out.flush()?;
                summary.completed = summary.completed.saturating_add(1);
            }
            ProbeReport::Failed { endpoint, error } => {
                writeln!(diag, "{}", format_failure_line(&endpoint, &error, color_diag))?;
                summary.failed = summary.failed.saturating_add(1);
            }
        }
    }
    Ok(summary)
}

/// `<status> | <name> | <url> | <duration>` with the status colored by class.
pub(crate) fn format_result_line(
    endpoint: &EndpointDescriptor,
    sample: &ProbeSample,
    use_color: bool,
) -> String {
    let status = if use_color {
        let color = StatusClass::from_status_text(&sample.status).color();
        sample.status.as_str().with(color).to_string()
    } else {
        sample.status.clone()
    };
    format!(
        "{} | {} | {} | {}",
        status,
        endpoint.name(),
        endpoint.url(),
        format_elapsed(sample.elapsed)
    )
}

pub(crate) fn format_failure_line(
    endpoint: &EndpointDescriptor,
    error: &ProbeError,
    use_color: bool,
) -> String {
    let line = format!("{} ({}): {}", endpoint.name(), endpoint.url(), error);
    if use_color {
        line.with(Color::Red).to_string()
    } else {
        line
    }
}
