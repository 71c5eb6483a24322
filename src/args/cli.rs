use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Probe HTTP endpoints concurrently and show their status and latency, as a live table or a one-shot report."
)]
pub struct ProbeArgs {
    /// Endpoint configuration file (.toml or .json)
    #[arg(long, short, env = "PULSECHECK_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Print a one-shot report in completion order instead of the live table
    #[arg(long = "no-ui", alias = "batch")]
    pub no_ui: bool,

    /// Show failed probes in the live table instead of keeping their placeholder
    #[arg(long = "show-errors")]
    pub show_errors: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
