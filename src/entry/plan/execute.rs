use std::io::IsTerminal;

use tracing::info;

use crate::app::{run_batch, run_interactive};
use crate::error::AppResult;
use crate::probe::ProbeDispatcher;

use super::types::{RunMode, RunPlan};

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    let dispatcher = ProbeDispatcher::new()?;
    info!(
        endpoints = plan.endpoints.len(),
        mode = ?plan.mode,
        "starting probes"
    );

    match plan.mode {
        RunMode::Batch => {
            let color_stdout = !plan.no_color && std::io::stdout().is_terminal();
            let color_stderr = !plan.no_color && std::io::stderr().is_terminal();
            run_batch(&dispatcher, &plan.endpoints, color_stdout, color_stderr).await?;
            Ok(())
        }
        RunMode::Interactive => {
            run_interactive(&dispatcher, &plan.endpoints, plan.failures, plan.no_color).await
        }
    }
}
