//! CLI argument types.
mod cli;


pub use cli::ProbeArgs;
