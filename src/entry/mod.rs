mod plan;

use std::io::IsTerminal;

use clap::Parser;

use crate::args::ProbeArgs;
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

/// Parses the command line, loads the configuration, and runs the selected
/// mode. Configuration problems abort before any probe is started.
///
/// # Errors
///
/// Returns an error when the configuration is missing or invalid, or when
/// the runtime, HTTP client, or terminal cannot be set up.
pub fn run() -> AppResult<()> {
    let args = ProbeArgs::parse();

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(&args, std::io::stdout().is_terminal())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}
