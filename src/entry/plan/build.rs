use std::path::Path;

use tracing::debug;

use crate::args::ProbeArgs;
use crate::config::{load_config, resolve_endpoints};
use crate::error::{AppError, AppResult};
use crate::probe::FailureDisplay;

use super::types::{RunMode, RunPlan};

/// Resolves the configuration and the output mode. A flag set either on the
/// command line or in the config file is honored. Errors are returned
/// unlogged; the binary reports them once on exit.
pub(crate) fn build_plan(args: &ProbeArgs, stdout_is_terminal: bool) -> AppResult<RunPlan> {
    let config = load_config(Path::new(&args.config))?;
    let endpoints = resolve_endpoints(&config).map_err(AppError::config)?;

    let no_ui = args.no_ui || config.no_ui.unwrap_or(false);
    let mode = if no_ui {
        RunMode::Batch
    } else if !stdout_is_terminal {
        debug!("stdout is not a terminal; printing a report instead of the live table");
        RunMode::Batch
    } else {
        RunMode::Interactive
    };
    let show_errors = args.show_errors || config.show_errors.unwrap_or(false);

    debug!(
        endpoints = endpoints.len(),
        mode = ?mode,
        show_errors,
        "run plan ready"
    );

    Ok(RunPlan {
        endpoints,
        mode,
        failures: FailureDisplay::from_flag(show_errors),
        no_color: args.no_color,
    })
}
